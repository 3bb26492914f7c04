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

/// Below this bandwidth sellable fraction, bandwidth is reported as the bottleneck whatever the
/// other ratios.
pub const BANDWIDTH_OVERRIDE: f64 = 0.95;

/// The tightest constraint on the fleet in a given year.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bottleneck {
    Power,
    Thermal,
    Launch,
    Bandwidth,
    Demand,
    /// Orbital slots
    Slots,
}

impl fmt::Display for Bottleneck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Power => "power",
            Self::Thermal => "thermal",
            Self::Launch => "launch",
            Self::Bandwidth => "bandwidth",
            Self::Demand => "demand",
            Self::Slots => "slots",
        };
        write!(f, "{name}")
    }
}

/// Available over needed, for each candidate constraint. A ratio below one binds.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConstraintRatios {
    /// Thermal limit over the compute power budget of a LEO platform
    pub thermal: f64,
    /// Launch capacity over the mass to launch
    pub launch: f64,
    /// Available bandwidth over the bandwidth of the unconstrained targets
    pub bandwidth: f64,
    /// Eligible demand over the power of the unconstrained targets
    pub demand: f64,
    /// LEO slots over the uncapped LEO target
    pub slots: f64,
}

impl ConstraintRatios {
    /// The tightest binding constraint, `Power` if nothing binds.
    ///
    /// A bandwidth sellable fraction under [`BANDWIDTH_OVERRIDE`] always reports `Bandwidth`: this
    /// is a presentation choice, what matters is the compute that can be monetized.
    pub fn bottleneck(&self, bw_sell: f64) -> Bottleneck {
        if bw_sell < BANDWIDTH_OVERRIDE {
            return Bottleneck::Bandwidth;
        }
        [
            (Bottleneck::Thermal, self.thermal),
            (Bottleneck::Launch, self.launch),
            (Bottleneck::Bandwidth, self.bandwidth),
            (Bottleneck::Demand, self.demand),
            (Bottleneck::Slots, self.slots),
        ]
        .into_iter()
        .filter(|(_, ratio)| *ratio < 1.0)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map_or(Bottleneck::Power, |(kind, _)| kind)
    }
}

#[cfg(test)]
mod ut_bottleneck {
    use super::*;

    fn ratios() -> ConstraintRatios {
        ConstraintRatios {
            thermal: 10.0,
            launch: f64::INFINITY,
            bandwidth: 2.0,
            demand: 1.5,
            slots: 4000.0,
        }
    }

    #[test]
    fn nothing_binds() {
        assert_eq!(ratios().bottleneck(1.0), Bottleneck::Power);
    }

    #[test]
    fn tightest_wins() {
        let mut r = ratios();
        r.launch = 0.5;
        r.demand = 0.2;
        assert_eq!(r.bottleneck(1.0), Bottleneck::Demand);
        // Presentation override
        assert_eq!(r.bottleneck(0.9), Bottleneck::Bandwidth);
    }
}
