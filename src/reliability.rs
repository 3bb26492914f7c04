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

/// Workloads that an orbital or terrestrial datacenter may serve.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Workload {
    /// Latency insensitive, but checkpoint heavy
    Training,
    BatchInference,
    InteractiveInference,
}

impl Workload {
    /// Share of the AI compute market taken by this workload.
    pub const fn market_share(&self) -> f64 {
        match self {
            Self::Training => 0.5,
            Self::BatchInference => 0.3,
            Self::InteractiveInference => 0.2,
        }
    }

    /// Whether a site with this round trip latency and uptime can serve this workload.
    pub fn is_served(&self, latency_ms: f64, uptime: f64) -> bool {
        match self {
            Self::Training => uptime >= 0.95,
            Self::BatchInference => latency_ms <= 500.0,
            Self::InteractiveInference => latency_ms <= 50.0,
        }
    }
}

/// Checkpoint interval (hours) minimizing the lost work, from Young's formula.
pub fn checkpoint_interval(checkpoint_hours: f64, mtbf_hours: f64) -> f64 {
    (2.0 * checkpoint_hours * mtbf_hours).sqrt()
}

/// Effective uptime of a long running job which checkpoints optimally and restarts after each
/// failure.
///
/// The overhead is the time spent writing checkpoints, plus the expected work lost since the last
/// checkpoint, plus the restart time, all per unit of wall clock time.
pub fn effective_uptime(mtbf_hours: f64, checkpoint_hours: f64, restart_hours: f64) -> f64 {
    if mtbf_hours <= 0.0 {
        return 0.0;
    }
    let tau = checkpoint_interval(checkpoint_hours, mtbf_hours);
    let lost = if tau > 0.0 {
        checkpoint_hours / tau + tau / (2.0 * mtbf_hours)
    } else {
        0.0
    };
    let overhead = lost + restart_hours / mtbf_hours;
    (1.0 - overhead).max(0.0)
}

/// Cost multiplier of the redundancy needed to lift `uptime` to the `target` SLA.
pub fn sla_cost_multiplier(uptime: f64, target: f64) -> f64 {
    if uptime >= target {
        1.0
    } else {
        1.0 + 10.0 * (target - uptime)
    }
}

/// Fraction of the AI compute market a site with this latency and uptime may address.
pub fn addressable_fraction(latency_ms: f64, uptime: f64) -> f64 {
    [
        Workload::Training,
        Workload::BatchInference,
        Workload::InteractiveInference,
    ]
    .iter()
    .filter(|workload| workload.is_served(latency_ms, uptime))
    .map(|workload| workload.market_share())
    .sum()
}
