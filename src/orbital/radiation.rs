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

use super::Shell;
use crate::params::{years_since_base, Params, Tech};

/// Fraction of the radiation damage left when photonic compute is active: photonic platforms still
/// carry electronic components.
const PHOTONIC_MITIGATION: f64 = 0.3;
/// Attrition is capped at this annual fraction.
const MAX_REPLACEMENT_RATE: f64 = 0.3;

/// Radiation driven degradation of a platform in a given shell and year.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RadiationEffects {
    /// Total ionizing dose factor, relative to LEO
    pub tid_factor: f64,
    /// Effective lifetime (years), the design life over the TID factor unless `max_life` caps it
    pub lifetime_years: f64,
    /// Penalty of single event upsets: scrubbing, redundancy and restarts
    pub seu_penalty: f64,
    /// Fraction of the compute actually usable
    pub availability: f64,
    /// Annual attrition fraction
    pub replacement_rate: f64,
}

/// Computes the radiation effects for a platform in the provided shell and year.
pub fn shell_radiation_effects(shell: Shell, year: i32, params: &Params) -> RadiationEffects {
    let spec = shell.spec();
    let mitigation = if params.unlocked(Tech::Photonic, year) {
        PHOTONIC_MITIGATION
    } else {
        1.0
    };

    let tid_factor = spec.tid_mult * mitigation;
    let mut lifetime_years = params.sat_life / tid_factor.max(1e-6);
    if let Some(max_life) = params.max_life {
        lifetime_years = lifetime_years.min(max_life);
    }

    let seu_penalty = 1.0
        + params.seu_base_overhead
            * spec.seu_mult
            * (1.0 - params.rad_improve).powi(years_since_base(year))
            * mitigation;

    RadiationEffects {
        tid_factor,
        lifetime_years,
        seu_penalty,
        availability: 1.0 / seu_penalty,
        replacement_rate: (1.0 / lifetime_years).min(MAX_REPLACEMENT_RATE),
    }
}

#[cfg(test)]
mod ut_radiation {
    use super::*;

    #[test]
    fn photonic_mitigation() {
        let params = Params::default();
        let before = shell_radiation_effects(Shell::Leo, params.photonic_year - 1, &params);
        let after = shell_radiation_effects(Shell::Leo, params.photonic_year, &params);
        assert!((after.tid_factor - 0.3 * before.tid_factor).abs() < 1e-12);
        assert!(after.availability > before.availability);
        // Uncapped: the design life divided by the TID factor
        assert!((after.lifetime_years - params.sat_life / after.tid_factor).abs() < 1e-9);
    }

    #[test]
    fn lifetime_cap_is_opt_in() {
        let params = Params::default();
        let geo = shell_radiation_effects(Shell::Geo, params.photonic_year, &params);
        assert!((geo.lifetime_years - 6.0 / 0.18).abs() < 1e-9);

        let capped = Params::builder().max_life(15.0).build();
        let geo = shell_radiation_effects(Shell::Geo, capped.photonic_year, &capped);
        assert!((geo.lifetime_years - 15.0).abs() < f64::EPSILON);
        // Short lives are untouched by the cap
        let meo = shell_radiation_effects(Shell::Meo, 2026, &capped);
        assert!((meo.lifetime_years - 2.0).abs() < 1e-12);
    }

    #[test]
    fn attrition_is_capped() {
        let params = Params::default();
        let meo = shell_radiation_effects(Shell::Meo, 2026, &params);
        assert!((meo.lifetime_years - 2.0).abs() < 1e-12);
        assert!((meo.replacement_rate - 0.3).abs() < f64::EPSILON);
    }
}
