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

use crate::orbital::Shell;
use crate::params::{years_since_base, Params, Tech};

/// Launch cost (LEO $/kg) at which commercial parts become as attractive as radiation hardened
/// ones.
const COTS_PIVOT_COST: f64 = 300.0;

/// LEO launch cost ($/kg) in the provided year.
pub fn launch_cost_per_kg(year: i32, params: &Params) -> f64 {
    let mut cost = params.launch_cost * (1.0 - params.launch_learn).powi(years_since_base(year));
    if params.unlocked(Tech::Starship, year) {
        cost *= params.starship_factor;
    }
    cost.max(params.launch_floor)
}

/// Launch cost ($/kg) to the provided shell.
pub fn shell_launch_cost(year: i32, shell: Shell, params: &Params) -> f64 {
    launch_cost_per_kg(year, params) * shell.spec().launch_mult
}

/// Blend between radiation hardened (0) and shielded commercial (1) components.
///
/// The blend is smooth in the launch cost so that the platform cost has no step at any launch
/// price.
pub fn cots_blend(year: i32, shell: Shell, params: &Params) -> f64 {
    1.0 / (1.0 + (shell_launch_cost(year, shell, params) / COTS_PIVOT_COST).powi(2))
}

/// Launch capacity available in a year.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LaunchCapacity {
    pub max_flights: f64,
    pub payload_kg: f64,
}

impl LaunchCapacity {
    /// Total mass that may be launched this year (kg)
    pub fn mass_kg(&self) -> f64 {
        self.max_flights * self.payload_kg
    }
}

/// Flights and payload available in the provided year. Heavy lift flight rates ramp up after
/// availability.
pub fn launch_capacity(year: i32, params: &Params) -> LaunchCapacity {
    if params.unlocked(Tech::Starship, year) {
        let years = f64::from(year - params.starship_year);
        LaunchCapacity {
            max_flights: (50.0 * 1.6_f64.powf(years)).min(20_000.0),
            payload_kg: 100_000.0,
        }
    } else {
        LaunchCapacity {
            max_flights: 30.0,
            payload_kg: 15_000.0,
        }
    }
}

#[cfg(test)]
mod ut_launch {
    use super::*;

    #[test]
    fn blend_rises_as_launch_gets_cheaper() {
        let params = Params::default();
        let early = cots_blend(2026, Shell::Leo, &params);
        let late = cots_blend(2040, Shell::Leo, &params);
        assert!(early < 0.1 && late > 0.9, "{early} {late}");
        assert!(cots_blend(2040, Shell::Cislunar, &params) < late);
    }

    #[test]
    fn heavy_lift_ramp() {
        let params = Params::default();
        let before = launch_capacity(params.starship_year - 1, &params);
        assert!((before.mass_kg() - 450_000.0).abs() < f64::EPSILON);
        let after = launch_capacity(params.starship_year, &params);
        assert!((after.max_flights - 50.0).abs() < f64::EPSILON);
        assert!((launch_capacity(2100, &params).max_flights - 20_000.0).abs() < f64::EPSILON);
    }
}
