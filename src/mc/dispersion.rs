/*
    Orbital Compute, techno-economic projections of compute in orbit
    Copyright (C) 2024 Christopher Rabotin <christopher.rabotin@gmail.com>

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU Affero General Public License for more details.

    You should have received a copy of the GNU Affero General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use super::ParamKey;
use crate::io::ConfigRepr;

/// A dispersion configuration: the mean is an offset from the template value, and both default to
/// zero.
#[derive(Copy, Clone, Debug, PartialEq, TypedBuilder, Serialize, Deserialize)]
pub struct ParamDispersion {
    pub param: ParamKey,
    #[builder(default, setter(strip_option))]
    pub mean: Option<f64>,
    #[builder(default, setter(strip_option))]
    pub std_dev: Option<f64>,
}

impl ParamDispersion {
    pub fn zero_mean(param: ParamKey, std_dev: f64) -> Self {
        Self {
            param,
            std_dev: Some(std_dev),
            mean: Some(0.0),
        }
    }
}

impl ConfigRepr for ParamDispersion {}
