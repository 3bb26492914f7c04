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
use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};

use crate::params::Params;

mod radiation;
pub use radiation::{shell_radiation_effects, RadiationEffects};

/// Deployment capacity of an orbital shell.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Capacity {
    /// Maximum number of platforms (orbital slots)
    Platforms(f64),
    /// Maximum deployed mass (kg)
    Mass(f64),
}

/// Static description of an orbital regime.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShellSpec {
    pub altitude_km: f64,
    /// Round trip latency to the ground (ms)
    pub rtt_ms: f64,
    /// Total ionizing dose multiplier relative to LEO
    pub tid_mult: f64,
    /// Single event upset multiplier relative to LEO
    pub seu_mult: f64,
    pub capacity: Capacity,
    /// View factor of the Earth from a radiator
    pub earth_view: f64,
    /// Eclipse fraction of the orbit, `None` uses the configured LEO eclipse fraction
    pub eclipse: Option<f64>,
    /// Launch cost multiplier relative to LEO
    pub launch_mult: f64,
    pub period_hours: f64,
}

/// The orbital shells, in deployment priority order.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Sequence, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Shell {
    Leo,
    Meo,
    Geo,
    Cislunar,
}

impl Shell {
    pub const fn spec(&self) -> ShellSpec {
        match self {
            Self::Leo => ShellSpec {
                altitude_km: 550.0,
                rtt_ms: 4.0,
                tid_mult: 1.0,
                seu_mult: 1.0,
                capacity: Capacity::Platforms(40_000.0),
                earth_view: 0.3,
                eclipse: None,
                launch_mult: 1.0,
                period_hours: 1.6,
            },
            // Inside the Van Allen belts: not viable, hence no capacity
            Self::Meo => ShellSpec {
                altitude_km: 8_000.0,
                rtt_ms: 55.0,
                tid_mult: 3.0,
                seu_mult: 2.5,
                capacity: Capacity::Platforms(0.0),
                earth_view: 0.1,
                eclipse: Some(0.05),
                launch_mult: 2.0,
                period_hours: 4.8,
            },
            Self::Geo => ShellSpec {
                altitude_km: 35_786.0,
                rtt_ms: 240.0,
                tid_mult: 0.6,
                seu_mult: 2.0,
                capacity: Capacity::Platforms(1_800.0),
                earth_view: 0.02,
                eclipse: Some(0.01),
                launch_mult: 3.0,
                period_hours: 24.0,
            },
            Self::Cislunar => ShellSpec {
                altitude_km: 384_400.0,
                rtt_ms: 2_560.0,
                tid_mult: 0.8,
                seu_mult: 2.5,
                capacity: Capacity::Mass(1e12),
                earth_view: 0.0,
                eclipse: Some(0.0),
                launch_mult: 4.0,
                period_hours: 655.0,
            },
        }
    }

    /// Eclipse fraction of this shell.
    pub fn eclipse_frac(&self, params: &Params) -> f64 {
        self.spec().eclipse.unwrap_or(params.eclipse_frac)
    }

    /// Maximum platform count for a platform of the provided dry mass.
    pub fn max_platforms(&self, dry_mass_kg: f64) -> f64 {
        match self.spec().capacity {
            Capacity::Platforms(count) => count,
            Capacity::Mass(mass) => mass / dry_mass_kg.max(1.0),
        }
    }

    /// Whether this shell can use nuclear (fission or fusion) power.
    pub const fn allows_nuclear(&self) -> bool {
        matches!(self, Self::Geo | Self::Cislunar)
    }
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Leo => "LEO",
            Self::Meo => "MEO",
            Self::Geo => "GEO",
            Self::Cislunar => "cislunar",
        };
        write!(f, "{name}")
    }
}

/// A value for each orbital shell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PerShell<T> {
    pub leo: T,
    pub meo: T,
    pub geo: T,
    pub cislunar: T,
}

impl<T> PerShell<T> {
    /// Builds a value for every shell from the provided function.
    pub fn from_fn<F: FnMut(Shell) -> T>(mut f: F) -> Self {
        Self {
            leo: f(Shell::Leo),
            meo: f(Shell::Meo),
            geo: f(Shell::Geo),
            cislunar: f(Shell::Cislunar),
        }
    }

    pub fn get(&self, shell: Shell) -> &T {
        match shell {
            Shell::Leo => &self.leo,
            Shell::Meo => &self.meo,
            Shell::Geo => &self.geo,
            Shell::Cislunar => &self.cislunar,
        }
    }

    pub fn get_mut(&mut self, shell: Shell) -> &mut T {
        match shell {
            Shell::Leo => &mut self.leo,
            Shell::Meo => &mut self.meo,
            Shell::Geo => &mut self.geo,
            Shell::Cislunar => &mut self.cislunar,
        }
    }

    pub fn map<U, F: FnMut(Shell, &T) -> U>(&self, mut f: F) -> PerShell<U> {
        PerShell::from_fn(|shell| f(shell, self.get(shell)))
    }
}

impl PerShell<f64> {
    pub fn sum(&self) -> f64 {
        self.leo + self.meo + self.geo + self.cislunar
    }
}

impl<T> std::ops::Index<Shell> for PerShell<T> {
    type Output = T;

    fn index(&self, shell: Shell) -> &T {
        self.get(shell)
    }
}

impl<T> std::ops::IndexMut<Shell> for PerShell<T> {
    fn index_mut(&mut self, shell: Shell) -> &mut T {
        self.get_mut(shell)
    }
}
