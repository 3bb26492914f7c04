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
use typed_builder::TypedBuilder;

use super::MassBreakdown;
use crate::physics::{radiator_area, terminals_for_rate};

/// Mass of one optical terminal (kg).
pub const TERMINAL_MASS_KG: f64 = 15.0;

/// Fixed-point iteration closing the platform mass against its radiator budget.
///
/// The radiator may only take a fixed fraction of the dry mass, so the compute power it can cool
/// depends on the total mass, which itself depends on the compute power. Each pass recomputes the
/// mass from the current compute allocation, derives the heat the radiator budget can reject, and
/// updates both the compute power and the radiator mass until neither changes by more than the
/// relative tolerance.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[builder(doc)]
pub struct MassClosure {
    /// Maximum number of passes
    #[builder(default = 20)]
    pub max_iterations: usize,
    /// Relative change of both the compute power and the radiator mass under which the closure has
    /// converged
    #[builder(default = 0.01)]
    pub tolerance: f64,
}

impl Default for MassClosure {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Everything the closure needs, independent of the year and shell it was derived from.
#[derive(Copy, Clone, Debug)]
pub(crate) struct ClosureProblem {
    /// Masses which do not depend on the compute allocation: power, battery, avionics, attitude
    /// control
    pub fixed: MassBreakdown,
    pub power_limit_kw: f64,
    pub compute_kg_per_kw: f64,
    pub shield_kg_per_kw: f64,
    /// Net rejected flux per face (W/m²)
    pub net_flux: f64,
    pub areal_density: f64,
    pub waste_heat_frac: f64,
    pub radiator_mass_frac: f64,
    /// Downlink rate per kW of compute (Gbps/kW)
    pub rate_per_kw: f64,
    pub max_rate_gbps: f64,
    pub terminal_rate_gbps: f64,
    pub max_terminals: u32,
}

impl ClosureProblem {
    fn terminals(&self, compute_kw: f64) -> u32 {
        let est_rate = (compute_kw * self.rate_per_kw).min(self.max_rate_gbps);
        terminals_for_rate(est_rate, self.terminal_rate_gbps, self.max_terminals)
    }

    /// Full mass breakdown for this allocation, without any fusion plant radiator.
    pub fn mass(&self, compute_kw: f64, radiator_kg: f64, terminals: u32) -> MassBreakdown {
        MassBreakdown {
            compute: compute_kw * self.compute_kg_per_kw,
            shield: self.shield_kg_per_kw * compute_kw,
            comms: f64::from(terminals) * TERMINAL_MASS_KG,
            radiator: radiator_kg,
            ..self.fixed
        }
        .with_structure()
    }
}

/// Outcome of the mass closure.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClosureSolution {
    pub compute_kw: f64,
    pub radiator_kg: f64,
    pub radiator_area_m2: f64,
    /// Compute power the radiator budget can cool (kW)
    pub thermal_limit_kw: f64,
    pub terminals: u32,
    pub iterations: usize,
    pub converged: bool,
}

impl MassClosure {
    pub(crate) fn solve(&self, problem: &ClosureProblem) -> ClosureSolution {
        let mut compute_kw = problem.power_limit_kw;
        let mut radiator_kg = 0.0;
        let mut thermal_limit_kw = problem.power_limit_kw;
        let mut terminals = 1;
        let mut iterations = 0;
        let mut converged = false;

        for it in 1..=self.max_iterations {
            iterations = it;
            terminals = problem.terminals(compute_kw);
            let estimate = problem.mass(compute_kw, radiator_kg, terminals);

            // Radiator budget to heat rejection
            let budget_area = problem.radiator_mass_frac * estimate.dry() / problem.areal_density;
            let max_rejection_kw = 2.0 * budget_area * problem.net_flux / 1e3;
            thermal_limit_kw = max_rejection_kw / problem.waste_heat_frac;

            let next_compute = problem.power_limit_kw.min(thermal_limit_kw);
            let next_heat_kw = next_compute * problem.waste_heat_frac;
            let next_radiator =
                radiator_area(next_heat_kw, problem.net_flux) * problem.areal_density;

            let compute_change = (next_compute - compute_kw).abs() / compute_kw.max(1e-9);
            let radiator_change = (next_radiator - radiator_kg).abs() / next_radiator.max(1e-9);

            compute_kw = next_compute;
            radiator_kg = next_radiator;

            if compute_change < self.tolerance && radiator_change < self.tolerance {
                converged = true;
                break;
            }
        }

        if !converged {
            debug!(
                "mass closure did not converge in {} iterations: {compute_kw:.3} kW of compute, \
                {radiator_kg:.3} kg of radiator",
                self.max_iterations
            );
        }

        ClosureSolution {
            compute_kw,
            radiator_kg,
            radiator_area_m2: radiator_kg / problem.areal_density,
            thermal_limit_kw,
            terminals,
            iterations,
            converged,
        }
    }
}
