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

/*! # orbital-compute

A deterministic, year-by-year techno-economic simulator that projects whether compute in orbit
becomes cheaper than compute in terrestrial datacenters.

Given a [`Params`] set, the engine sizes a platform in every orbital shell for every year, deploys a
fleet under bandwidth, demand and launch constraints, prices the terrestrial alternative, and
reports the first year the delivered orbital cost undercuts the terrestrial market price, for each
[`Scenario`].
*/

/// Capital recovery and other finance primitives.
pub mod finance;

/// Demand, terrestrial supply and demand pressure.
pub mod market;

/// Radiative thermal control, launch costs, compute efficiency and communications.
pub mod physics;

/// Orbital shells and their radiation environment.
pub mod orbital;

/// The per-platform sizing model, including the fixed-point mass closure.
pub mod satellite;

/// Checkpoint-aware uptime, SLA multipliers and addressable workload fractions.
pub mod reliability;

/// The terrestrial datacenter cost and market-clearing price.
pub mod ground;

/// Multi-shell fleet deployment under bandwidth, demand and launch constraints.
pub mod fleet;

/// R&D stock and launch learning feedback.
pub mod learning;

/// Lunar readiness index.
pub mod lunar;

/// Scenario transforms, the two-pass year loop and the simulation state.
pub mod scenario;

/// Simulation parameters, all with defaults.
pub mod params;

/// Configuration loading, CSV export and chart series helpers.
pub mod io;

/// Monte Carlo dispersions of the simulation parameters.
pub mod mc;

mod errors;
/// The engine never fails, but loading, parsing and exporting may: those errors are reported here.
pub use self::errors::LcocError;

#[macro_use]
extern crate log;

/// Re-export some useful things
pub use self::fleet::{FleetResult, FleetTracker};
pub use self::ground::GroundResult;
pub use self::orbital::Shell;
pub use self::params::Params;
pub use self::satellite::SatelliteResult;
pub use self::scenario::{run_scenario, Scenario, ScenarioResult};
