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

use enum_iterator::all;

use crate::orbital::{PerShell, Shell};
use crate::params::{Params, Tech};
use crate::satellite::SatelliteResult;

/// Reference production cost at which orbital compute addresses its base share of demand
/// ($/GPU-hr).
const REFERENCE_LCOC: f64 = 2.0;
const BASE_ELIGIBLE_SHARE: f64 = 0.2;
const MAX_ELIGIBLE_SHARE: f64 = 0.8;
/// GEO deployment starts once LEO reaches this fraction of its slots.
const LEO_SATURATION: f64 = 0.8;
const GEO_SEED_PLATFORMS: f64 = 10.0;
const CISLUNAR_SEED_PLATFORMS: f64 = 2.0;
/// Years after the thermal breakthrough for cislunar platforms to reach full maturity.
const CISLUNAR_MATURITY_YEARS: f64 = 10.0;
const MIN_CISLUNAR_MATURITY: f64 = 0.1;

/// Unconstrained deployment targets of one year.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FleetTargets {
    /// Platform count per shell, capped by each shell's capacity
    pub counts: PerShell<f64>,
    /// LEO target before the slot cap
    pub leo_uncapped: f64,
}

/// Fraction of demand orbital compute may compete for, growing as its cost drops below the
/// reference.
pub fn eligible_share(leo_lcoc: f64) -> f64 {
    (BASE_ELIGIBLE_SHARE * (REFERENCE_LCOC / leo_lcoc.max(1e-9)).sqrt())
        .clamp(BASE_ELIGIBLE_SHARE, MAX_ELIGIBLE_SHARE)
}

/// Unconstrained platform targets: a trickle before the crossover, then geometric growth of LEO, of
/// GEO once LEO nears saturation, and of cislunar once reactors are available.
pub fn fleet_targets(
    year: i32,
    crossover: Option<i32>,
    params: &Params,
    sats: &PerShell<SatelliteResult>,
) -> FleetTargets {
    let mut counts = PerShell::<f64>::default();

    let crossover = match crossover {
        Some(crossover) if year >= crossover => crossover,
        _ => {
            counts.leo = params.pre_crossover_platforms.floor();
            return FleetTargets {
                counts,
                leo_uncapped: params.pre_crossover_platforms,
            };
        }
    };

    let doubling = params.fleet_doubling_years;
    let since = f64::from(year - crossover);

    let leo_cap = Shell::Leo.max_platforms(sats.leo.dry_mass_kg);
    let leo_uncapped = params.leo_seed_platforms * 2_f64.powf(since / doubling);
    counts.leo = leo_uncapped.min(leo_cap);

    let geo_start = doubling * (LEO_SATURATION * leo_cap / params.leo_seed_platforms).log2();
    if since >= geo_start {
        counts.geo = (GEO_SEED_PLATFORMS * 2_f64.powf((since - geo_start) / doubling))
            .min(Shell::Geo.max_platforms(sats.geo.dry_mass_kg));
    }

    if params.unlocked(Tech::Fission, year) || params.unlocked(Tech::Fusion, year) {
        let reactor_year = [Tech::Fission, Tech::Fusion]
            .iter()
            .filter_map(|&tech| params.unlock_year(tech))
            .min()
            .unwrap_or(year);
        let start = crossover.max(reactor_year);
        // Lunar resources add one doubling per year on top of the base growth
        let isru_years = f64::from((year - params.lunar_isru_year + 1).max(0));
        let exponent = f64::from(year - start) / doubling + isru_years / doubling;
        let maturity = if params.thermal_enabled {
            (f64::from(year - params.thermal_year) / CISLUNAR_MATURITY_YEARS)
                .clamp(MIN_CISLUNAR_MATURITY, 1.0)
        } else {
            MIN_CISLUNAR_MATURITY
        };
        counts.cislunar = (CISLUNAR_SEED_PLATFORMS * 2_f64.powf(exponent) * maturity)
            .min(Shell::Cislunar.max_platforms(sats.cislunar.dry_mass_kg));
    }

    FleetTargets {
        counts: counts.map(|_, count| count.floor()),
        leo_uncapped,
    }
}

/// Scales the targets so that their total need fits within `available`, cutting the other shells
/// before LEO.
///
/// If LEO alone fits, the other shells share what is left proportionally. Otherwise, the other
/// shells are zeroed and LEO is scaled down.
pub fn scale_protect_leo(
    targets: &PerShell<f64>,
    need_each: &PerShell<f64>,
    available: f64,
) -> PerShell<f64> {
    let need = targets.map(|shell, count| count * need_each[shell]);
    let total = need.sum();
    if total <= available || total <= 0.0 {
        return *targets;
    }

    let mut scaled = *targets;
    if need.leo <= available {
        let others = total - need.leo;
        let frac = if others > 0.0 {
            (available - need.leo) / others
        } else {
            0.0
        };
        for shell in all::<Shell>().filter(|&shell| shell != Shell::Leo) {
            scaled[shell] = (targets[shell] * frac).floor();
        }
    } else {
        scaled = PerShell::default();
        scaled.leo = (targets.leo * available / need.leo).floor();
    }
    scaled
}
