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

use super::{SOLAR_CONSTANT, STEFAN_BOLTZMANN};
use crate::orbital::Shell;
use crate::params::{Params, Tech};

/// Fraction of the solar constant seen by a radiator edge-on to the Sun.
const SUN_GRAZING_FRAC: f64 = 0.1;

/// Radiator operating point.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RadiatorProps {
    pub temp_k: f64,
    /// kg/m²
    pub areal_density: f64,
}

/// Radiator operating point in the provided year: the thermal breakthrough raises the temperature
/// and lightens the panels.
pub fn radiator_props(year: i32, params: &Params) -> RadiatorProps {
    if params.unlocked(Tech::Thermal, year) {
        RadiatorProps {
            temp_k: params.thermal_op_temp_k,
            areal_density: params.thermal_areal_density,
        }
    } else {
        RadiatorProps {
            temp_k: params.op_temp_k,
            areal_density: params.radiator_areal_density,
        }
    }
}

/// Environmental flux absorbed per unit radiator area (W/m²), weighted by the sunlit fraction of
/// the orbit.
pub fn absorbed_flux(shell: Shell, params: &Params) -> f64 {
    let spec = shell.spec();
    let sunlit = 1.0 - shell.eclipse_frac(params);
    let sun = SUN_GRAZING_FRAC * SOLAR_CONSTANT * sunlit;
    let albedo = SOLAR_CONSTANT * params.albedo * spec.earth_view * sunlit;
    let earth_ir = params.emissivity * params.earth_ir_flux * spec.earth_view;
    params.solar_absorptivity * (sun + albedo) + earth_ir
}

/// Net rejected flux per face (W/m²) of a radiator at the provided temperature, never below 1 W/m².
pub fn net_flux_at(temp_k: f64, shell: Shell, params: &Params) -> f64 {
    (params.emissivity * STEFAN_BOLTZMANN * temp_k.powi(4) - absorbed_flux(shell, params)).max(1.0)
}

/// Net rejected flux per face (W/m²) of the compute radiator in the provided year.
pub fn net_flux(year: i32, shell: Shell, params: &Params) -> f64 {
    net_flux_at(radiator_props(year, params).temp_k, shell, params)
}

/// Area (m²) of a two-sided radiator rejecting `heat_kw`.
pub fn radiator_area(heat_kw: f64, net_flux: f64) -> f64 {
    heat_kw * 1e3 / (2.0 * net_flux)
}

/// Radiator mass (kg) needed to reject one megawatt in the provided shell and year.
pub fn radiator_mass_per_mw(year: i32, shell: Shell, params: &Params) -> f64 {
    radiator_area(1e3, net_flux(year, shell, params)) * radiator_props(year, params).areal_density
}
