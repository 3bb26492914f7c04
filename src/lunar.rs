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

use crate::params::{Params, Tech, BASE_YEAR};

/// Readiness above which a lunar industrial base gets committed.
pub const READINESS_THRESHOLD: f64 = 0.70;
/// Years from commitment to an operating lunar base.
pub const BUILD_LEAD_YEARS: i32 = 10;
const STEEPNESS: i32 = 2;

/// Cumulative quantities the readiness index is computed from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadinessInputs {
    pub cumulative_mass_kg: f64,
    pub global_exaflops: f64,
    pub orbital_power_gw: f64,
}

/// Sigmoid score of a value against its threshold: 0.5 at the threshold.
fn score(value: f64, threshold: f64) -> f64 {
    let x = (value / threshold).max(0.0).powi(STEEPNESS);
    x / (1.0 + x)
}

/// Lunar readiness index in [0, 1].
///
/// Reactors make a lunar base more attractive. Compute efficiency breakthroughs reduce the pressure
/// to build from lunar resources, since more compute fits in each kg launched from Earth.
pub fn lunar_readiness(inputs: &ReadinessInputs, year: i32, params: &Params) -> f64 {
    let mut readiness = 0.3 * score(inputs.cumulative_mass_kg, 1e8)
        + 0.25 * score(inputs.global_exaflops, 1e5)
        + 0.25 * score(inputs.orbital_power_gw, 100.0)
        + 0.2 * score(f64::from((year - BASE_YEAR).max(0)), 25.0);

    for (tech, adjustment) in [
        (Tech::Fission, 0.05),
        (Tech::Fusion, 0.10),
        (Tech::Thermodynamic, -0.05),
        (Tech::Photonic, -0.05),
    ] {
        if params.unlocked(tech, year) {
            readiness += adjustment;
        }
    }
    readiness.clamp(0.0, 1.0)
}

/// Unlock year of the lunar base: the first ready year plus the build lead time.
pub fn lunar_unlock_year<I: IntoIterator<Item = (i32, f64)>>(readiness: I) -> Option<i32> {
    readiness
        .into_iter()
        .find(|(_, index)| *index >= READINESS_THRESHOLD)
        .map(|(year, _)| year + BUILD_LEAD_YEARS)
}

#[cfg(test)]
mod ut_lunar {
    use super::*;

    #[test]
    fn index_is_bounded() {
        let params = Params::default();
        assert_eq!(lunar_readiness(&ReadinessInputs::default(), 2026, &params), 0.0);
        let huge = ReadinessInputs {
            cumulative_mass_kg: 1e15,
            global_exaflops: 1e12,
            orbital_power_gw: 1e9,
        };
        let late = lunar_readiness(&huge, 2200, &params);
        assert!(late <= 1.0 && late > 0.95);
    }

    #[test]
    fn unlock() {
        assert_eq!(lunar_unlock_year([(2040, 0.5), (2041, 0.71), (2042, 0.9)]), Some(2051));
        assert_eq!(lunar_unlock_year([(2040, 0.5)]), None);
    }
}
