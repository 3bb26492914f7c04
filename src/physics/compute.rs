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

use crate::market::demand_pressure;
use crate::params::{Params, Tech, BASE_YEAR};

/// Years of undamped hardware learning, after which the learning rate is damped.
const LEARNING_HORIZON: i32 = 15;
const LATE_LEARNING_DAMPING: f64 = 0.4;
/// Demand pressure is capped before coupling into the learning rate.
const MAX_PRESSURE: f64 = 3.0;

/// AI hardware learning rate in the provided year, accelerated by demand pressure.
pub fn effective_learning_rate(year: i32, params: &Params) -> f64 {
    let pressure = demand_pressure(year, params).min(MAX_PRESSURE);
    (params.ai_learn * (1.0 + params.learn_coupling * (pressure - 1.0))).max(0.0)
}

/// Step gains of the compute technology breakthroughs active in the provided year.
pub fn tech_multiplier(year: i32, params: &Params) -> f64 {
    let mut mult = 1.0;
    if params.unlocked(Tech::Thermodynamic, year) {
        mult *= 2.0;
    }
    if params.unlocked(Tech::Photonic, year) {
        mult *= 1.5;
    }
    mult
}

/// Terrestrial compute efficiency (GFLOPS/W), compounded from the base year.
pub fn ground_efficiency(year: i32, params: &Params) -> f64 {
    let learned = (BASE_YEAR..year).fold(params.gflops_w, |eff, y| {
        let damping = if y - BASE_YEAR < LEARNING_HORIZON {
            1.0
        } else {
            LATE_LEARNING_DAMPING
        };
        eff * (1.0 + effective_learning_rate(y, params) * damping)
    });
    learned * tech_multiplier(year, params)
}

/// Orbital compute efficiency (GFLOPS/W), after the radiation hardening penalty.
pub fn orbital_efficiency(year: i32, params: &Params) -> f64 {
    ground_efficiency(year, params) * (1.0 - params.rad_pen)
}
