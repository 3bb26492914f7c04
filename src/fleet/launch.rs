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
use serde::{Deserialize, Serialize};

use crate::orbital::{PerShell, Shell};
use crate::physics::LaunchCapacity;

/// Platforms launched in one year, after the launch capacity constraint.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LaunchPlan {
    pub replacements: PerShell<f64>,
    pub growth: PerShell<f64>,
    /// Earth launched mass wanted before the constraint (kg)
    pub needed_mass_kg: f64,
    /// Earth launched mass (kg)
    pub launched_mass_kg: f64,
    pub flights: f64,
}

impl LaunchPlan {
    /// Launch capacity over the mass wanted, infinite if nothing needs launching.
    pub fn capacity_ratio(&self, capacity: &LaunchCapacity) -> f64 {
        if self.needed_mass_kg > 0.0 {
            capacity.mass_kg() / self.needed_mass_kg
        } else {
            f64::INFINITY
        }
    }
}

fn earth_mass(counts: &PerShell<f64>, dry: &PerShell<f64>, from_earth: &PerShell<bool>) -> f64 {
    all::<Shell>()
        .filter(|&shell| from_earth[shell])
        .map(|shell| counts[shell] * dry[shell])
        .sum()
}

/// Fits the replacements and growth within the launch capacity.
///
/// Capacity goes first to LEO replacements, then to the replacements in the other Earth launched
/// shells, and what remains is spread over the growth of every shell in proportion to its wanted
/// growth. Shells built from lunar resources do not use Earth launch capacity.
pub fn allocate_launches(
    mut replacements: PerShell<f64>,
    mut growth: PerShell<f64>,
    dry: &PerShell<f64>,
    from_earth: &PerShell<bool>,
    capacity: &LaunchCapacity,
) -> LaunchPlan {
    let wanted = replacements.map(|shell, count| count + growth[shell]);
    let needed_mass_kg = earth_mass(&wanted, dry, from_earth);

    if needed_mass_kg > capacity.mass_kg() {
        debug!(
            "launch capacity binds: {:.0} t wanted, {:.0} t available",
            needed_mass_kg / 1e3,
            capacity.mass_kg() / 1e3
        );
        let mut remaining = capacity.mass_kg();

        let leo_mass = replacements.leo * dry.leo;
        if leo_mass >= remaining {
            replacements.leo = remaining / dry.leo.max(1e-9);
            remaining = 0.0;
        } else {
            remaining -= leo_mass;
        }

        let others = PerShell::from_fn(|shell| from_earth[shell] && shell != Shell::Leo);
        let other_mass = earth_mass(&replacements, dry, &others);
        if other_mass > remaining {
            let frac = if other_mass > 0.0 {
                remaining / other_mass
            } else {
                0.0
            };
            for shell in all::<Shell>().filter(|&shell| others[shell]) {
                replacements[shell] *= frac;
            }
            remaining = 0.0;
        } else {
            remaining -= other_mass;
        }

        let growth_mass = earth_mass(&growth, dry, from_earth);
        let frac = if growth_mass > 0.0 {
            (remaining / growth_mass).min(1.0)
        } else {
            0.0
        };
        for shell in all::<Shell>().filter(|&shell| from_earth[shell]) {
            growth[shell] *= frac;
        }
    }

    let launched = replacements.map(|shell, count| count + growth[shell]);
    let launched_mass_kg = earth_mass(&launched, dry, from_earth);
    LaunchPlan {
        replacements,
        growth,
        needed_mass_kg,
        launched_mass_kg,
        flights: launched_mass_kg / capacity.payload_kg,
    }
}
