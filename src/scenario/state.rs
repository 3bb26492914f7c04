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

use crate::fleet::FleetResult;
use crate::ground::GroundResult;
use crate::learning::{
    global_exaflops, launch_learning_rate, rd_acceleration, update_rd_stock,
};
use crate::lunar::{lunar_readiness, ReadinessInputs};
use crate::params::Params;

/// Snapshot of the cumulative state of a scenario at the end of a year.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    pub year: i32,
    /// Mass launched from Earth since the start (kg)
    pub cumulative_mass_kg: f64,
    pub cumulative_flights: f64,
    /// Platforms built since the start, replacements included
    pub cumulative_platforms: f64,
    /// Platforms deployed this year
    pub deployed_platforms: f64,
    pub orbital_power_gw: f64,
    /// Orbital compute actually sold (EF)
    pub delivered_exaflops: f64,
    /// Orbital and terrestrial compute (EF)
    pub global_exaflops: f64,
    pub rd_stock: f64,
    pub rd_acceleration: f64,
    pub launch_learning_rate: f64,
    /// Display trend of the launch cost ($/kg)
    pub launch_cost_per_kg: f64,
    pub lunar_readiness: f64,
}

impl SimulationState {
    /// State at the end of the year preceding the first simulated year, anchored on the configured
    /// launch cost.
    pub fn initial(year: i32, params: &Params) -> Self {
        Self {
            year,
            cumulative_mass_kg: 0.0,
            cumulative_flights: 0.0,
            cumulative_platforms: 0.0,
            deployed_platforms: 0.0,
            orbital_power_gw: 0.0,
            delivered_exaflops: 0.0,
            global_exaflops: 0.0,
            rd_stock: 0.0,
            rd_acceleration: 1.0,
            launch_learning_rate: params.launch_learn,
            launch_cost_per_kg: params.launch_cost,
            lunar_readiness: 0.0,
        }
    }

    /// Returns the state at the end of the year of the provided fleet and ground results.
    pub fn advance(&self, fleet: &FleetResult, ground: &GroundResult, params: &Params) -> Self {
        let launched = fleet.launch.replacements.sum() + fleet.launch.growth.sum();
        let global = global_exaflops(fleet.tflops, ground.ground_supply_gw);
        let rd_stock = update_rd_stock(self.rd_stock, global);
        let rate = launch_learning_rate(params.launch_learn, fleet.launch.flights);
        let launch_cost_per_kg = (self.launch_cost_per_kg * (1.0 - rate)).max(params.launch_floor);

        let mut next = Self {
            year: fleet.year,
            cumulative_mass_kg: self.cumulative_mass_kg + fleet.launch.launched_mass_kg,
            cumulative_flights: self.cumulative_flights + fleet.launch.flights,
            cumulative_platforms: self.cumulative_platforms + launched,
            deployed_platforms: fleet.total_platforms(),
            orbital_power_gw: fleet.total_power_gw,
            delivered_exaflops: fleet.tflops * fleet.sellable_util * 1e-6,
            global_exaflops: global,
            rd_stock,
            rd_acceleration: rd_acceleration(rd_stock),
            launch_learning_rate: rate,
            launch_cost_per_kg,
            lunar_readiness: 0.0,
        };
        next.lunar_readiness = lunar_readiness(
            &ReadinessInputs {
                cumulative_mass_kg: next.cumulative_mass_kg,
                global_exaflops: next.global_exaflops,
                orbital_power_gw: next.orbital_power_gw,
            },
            next.year,
            params,
        );
        next
    }
}
