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

use snafu::prelude::*;

use crate::io::{ConfigError, ExportError};
use crate::params::ParamKey;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum LcocError {
    #[snafu(display("unknown scenario `{name}`, expected aggressive, baseline or conservative"))]
    UnknownScenario { name: String },
    #[snafu(display("unknown parameter `{name}`"))]
    UnknownParameter { name: String },
    #[snafu(display("cannot disperse {param}: {reason}"))]
    Dispersion { param: ParamKey, reason: String },
    #[snafu(display("configuration error: {source}"))]
    Config { source: ConfigError },
    #[snafu(display("export failed: {source}"))]
    Export { source: ExportError },
}

impl From<ConfigError> for LcocError {
    fn from(source: ConfigError) -> Self {
        Self::Config { source }
    }
}

impl From<ExportError> for LcocError {
    fn from(source: ExportError) -> Self {
        Self::Export { source }
    }
}
