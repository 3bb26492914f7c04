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

use core::fmt;
use serde::{Deserialize, Serialize};

use crate::orbital::Shell;
use crate::params::{years_since_base, Params, Tech};
use crate::physics::SOLAR_CONSTANT;

/// Nuclear platforms may grow to this multiple of their initial power.
const MAX_NUCLEAR_GROWTH: f64 = 10.0;
/// Electrical conversion efficiency of a fusion power plant.
const FUSION_CONVERSION_EFF: f64 = 0.4;
/// Operating temperature of the fusion heat rejection loop (K).
pub const FUSION_RADIATOR_TEMP_K: f64 = 1000.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerSource {
    Solar,
    Fission,
    Fusion,
}

impl PowerSource {
    pub const fn is_nuclear(&self) -> bool {
        !matches!(self, Self::Solar)
    }

    /// Nuclear platforms need less backhaul per TFLOPS: they are large and host more of the model
    /// locally.
    pub const fn bandwidth_factor(&self) -> f64 {
        if self.is_nuclear() {
            0.8
        } else {
            1.0
        }
    }

    fn tech(&self) -> Option<Tech> {
        match self {
            Self::Solar => None,
            Self::Fission => Some(Tech::Fission),
            Self::Fusion => Some(Tech::Fusion),
        }
    }
}

impl fmt::Display for PowerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solar => write!(f, "solar"),
            Self::Fission => write!(f, "fission"),
            Self::Fusion => write!(f, "fusion"),
        }
    }
}

/// Power source of a platform in the provided shell and year. Only high orbits may host reactors,
/// and fusion is preferred over fission.
pub fn power_source(shell: Shell, year: i32, params: &Params) -> PowerSource {
    if shell.allows_nuclear() {
        if params.unlocked(Tech::Fusion, year) {
            return PowerSource::Fusion;
        } else if params.unlocked(Tech::Fission, year) {
            return PowerSource::Fission;
        }
    }
    PowerSource::Solar
}

/// The sized power system of a platform.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PowerSystem {
    pub source: PowerSource,
    /// Bus power (kW)
    pub power_kw: f64,
    /// Array or reactor mass (kg)
    pub mass_kg: f64,
    pub battery_kg: f64,
    /// Solar array area (m²), zero for reactors
    pub array_area_m2: f64,
}

impl PowerSystem {
    /// Heat from the power plant itself which needs its own radiator (kW). Only fusion plants have
    /// one.
    pub fn plant_waste_heat_kw(&self) -> f64 {
        match self.source {
            PowerSource::Fusion => self.power_kw * (1.0 / FUSION_CONVERSION_EFF - 1.0),
            _ => 0.0,
        }
    }
}

/// Sizes the power system of a platform.
pub fn size_power_system(shell: Shell, year: i32, params: &Params) -> PowerSystem {
    let source = power_source(shell, year, params);
    match source {
        PowerSource::Solar => {
            let power_kw = (params.base_power_kw
                * (1.0 + params.power_growth).powi(years_since_base(year)))
            .min(params.max_solar_power_kw);
            let eclipse = shell.eclipse_frac(params);
            let array_area_m2 =
                power_kw * 1e3 / (params.solar_eff * SOLAR_CONSTANT * (1.0 - eclipse));
            let eclipse_hours = eclipse * shell.spec().period_hours;
            PowerSystem {
                source,
                power_kw,
                mass_kg: array_area_m2 * params.solar_areal_density,
                battery_kg: power_kw * eclipse_hours * params.battery_headroom * 1e3
                    / params.battery_wh_per_kg,
                array_area_m2,
            }
        }
        PowerSource::Fission | PowerSource::Fusion => {
            let unlock = source_unlock_year(source, params).unwrap_or(year);
            let power_kw = (params.nuclear_power_kw
                * (1.0 + params.power_growth).powi((year - unlock).max(0)))
            .min(MAX_NUCLEAR_GROWTH * params.nuclear_power_kw);
            let w_per_kg = if source == PowerSource::Fusion {
                params.fusion_w_per_kg
            } else {
                params.fission_w_per_kg
            };
            PowerSystem {
                source,
                power_kw,
                mass_kg: power_kw * 1e3 / w_per_kg,
                battery_kg: 0.0,
                array_area_m2: 0.0,
            }
        }
    }
}

/// Unlock year of the reactor technology of this source, if any.
pub(crate) fn source_unlock_year(source: PowerSource, params: &Params) -> Option<i32> {
    source.tech().and_then(|tech| params.unlock_year(tech))
}

#[cfg(test)]
mod ut_power {
    use super::*;

    #[test]
    fn source_selection() {
        let params = Params::default();
        assert_eq!(power_source(Shell::Leo, 2060, &params), PowerSource::Solar);
        assert_eq!(power_source(Shell::Geo, 2030, &params), PowerSource::Solar);
        assert_eq!(power_source(Shell::Geo, 2040, &params), PowerSource::Fission);
        assert_eq!(power_source(Shell::Cislunar, 2050, &params), PowerSource::Fusion);
    }

    #[test]
    fn solar_sizing() {
        let params = Params::default();
        let sys = size_power_system(Shell::Leo, 2026, &params);
        assert!((sys.power_kw - 100.0).abs() < 1e-9);
        assert!(sys.battery_kg > 0.0 && sys.mass_kg > 0.0);
        assert_eq!(sys.plant_waste_heat_kw(), 0.0);
        let capped = size_power_system(Shell::Leo, 2080, &params);
        assert!((capped.power_kw - params.max_solar_power_kw).abs() < 1e-9);
    }

    #[test]
    fn fusion_needs_its_own_radiator() {
        let params = Params::default();
        let sys = size_power_system(Shell::Cislunar, params.fusion_year, &params);
        assert!((sys.power_kw - params.nuclear_power_kw).abs() < 1e-9);
        assert!((sys.plant_waste_heat_kw() - 1.5 * sys.power_kw).abs() < 1e-9);
    }
}
