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

use super::power::{source_unlock_year, PowerSource, PowerSystem};
use super::MassBreakdown;
use crate::finance::crf;
use crate::params::{years_since_base, Params};

/// Years to build and integrate a platform, over which capital is tied up.
const BUILD_YEARS: f64 = 2.0;
/// Insurance premium as a fraction of the insured value.
const INSURANCE_RATE: f64 = 0.12;
const TERMINAL_COST: f64 = 5e5;
/// Years for a reactor technology to mature after its unlock.
const REACTOR_MATURITY_YEARS: f64 = 8.0;

/// Capital cost of one platform ($).
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub power: f64,
    pub battery: f64,
    pub compute: f64,
    pub radiator: f64,
    pub shield: f64,
    pub structure: f64,
    pub avionics: f64,
    pub terminals: f64,
    pub integration: f64,
    pub launch: f64,
    pub insurance: f64,
    pub ground_segment: f64,
    pub interest_during_construction: f64,
}

impl CostBreakdown {
    /// Flight hardware, before integration and test.
    pub fn hardware(&self) -> f64 {
        self.power
            + self.battery
            + self.compute
            + self.radiator
            + self.shield
            + self.structure
            + self.avionics
            + self.terminals
    }

    fn scale_hardware(&mut self, factor: f64) {
        self.power *= factor;
        self.battery *= factor;
        self.compute *= factor;
        self.radiator *= factor;
        self.shield *= factor;
        self.structure *= factor;
        self.avionics *= factor;
        self.terminals *= factor;
    }

    pub fn capex(&self) -> f64 {
        self.hardware()
            + self.integration
            + self.launch
            + self.insurance
            + self.ground_segment
            + self.interest_during_construction
    }
}

/// Annual cost of operating one platform ($/yr).
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnualCost {
    /// Capex recovered over the effective lifetime
    pub capital: f64,
    pub maintenance: f64,
    pub bandwidth: f64,
}

impl AnnualCost {
    pub fn total(&self) -> f64 {
        self.capital + self.maintenance + self.bandwidth
    }
}

/// Maturity of a reactor technology, a logistic curve centered half way through its maturation.
pub fn reactor_maturity(year: i32, unlock_year: i32) -> f64 {
    let x = f64::from(year - unlock_year) / REACTOR_MATURITY_YEARS;
    1.0 / (1.0 + (-6.0 * (x - 0.5)).exp())
}

/// Cost of the power system ($), with economies of scale and learning.
fn power_system_cost(power: &PowerSystem, year: i32, params: &Params) -> f64 {
    let kw = power.power_kw;
    match power.source {
        PowerSource::Solar => {
            let t = years_since_base(year);
            let usd_per_w = (100.0 * 0.88_f64.powi(t)).max(10.0) * (kw / 100.0).powf(-0.1);
            usd_per_w * kw * 1e3
        }
        PowerSource::Fission | PowerSource::Fusion => {
            let maturity = source_unlock_year(power.source, params)
                .map_or(1.0, |unlock| reactor_maturity(year, unlock));
            let first_of_a_kind = if power.source == PowerSource::Fusion {
                80.0
            } else {
                60.0
            };
            let usd_per_w = first_of_a_kind * (1.0 - 0.7 * maturity);
            usd_per_w * kw * 1e3 * (kw / 1e3).powf(-0.1)
        }
    }
}

/// Everything the pricing needs about a closed design.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Design<'a> {
    pub year: i32,
    pub power: &'a PowerSystem,
    pub mass: &'a MassBreakdown,
    pub radiator_area_m2: f64,
    pub plant_radiator_area_m2: f64,
    pub cots_blend: f64,
    pub terminals: u32,
    pub data_rate_gbps: f64,
    /// Launch cost to the shell ($/kg)
    pub launch_cost_per_kg: f64,
}

/// Capital cost of a closed design.
pub(crate) fn platform_costs(design: &Design, params: &Params) -> CostBreakdown {
    let year = design.year;
    let mass = design.mass;
    let hw_learning = (1.0 - params.hw_learn).powi(years_since_base(year));

    // Rad-hard parts cost five times more than shielded commercial ones
    let compute_per_kg = 20_000.0 * (1.0 - design.cots_blend) + 4_000.0 * design.cots_blend;

    let plant_radiator = if design.plant_radiator_area_m2 > 0.0 {
        2_000.0 * design.plant_radiator_area_m2.powf(0.9)
    } else {
        0.0
    };

    let mut costs = CostBreakdown {
        power: power_system_cost(design.power, year, params),
        battery: mass.battery * 1_000.0,
        compute: mass.compute * compute_per_kg * hw_learning,
        radiator: 2_000.0 * design.radiator_area_m2.max(1.0).powf(0.9) + plant_radiator,
        shield: mass.shield * 100.0,
        structure: mass.structure * 1_000.0,
        avionics: 2e6 + 2_000.0 * design.power.power_kw,
        terminals: f64::from(design.terminals) * TERMINAL_COST,
        ..Default::default()
    };

    costs.scale_hardware(params.prod_mult);
    let hardware = costs.hardware();

    costs.integration = 1.5 * hardware.powf(0.85);
    costs.launch = mass.dry() * design.launch_cost_per_kg;
    costs.insurance = INSURANCE_RATE * (hardware + costs.integration + costs.launch);
    costs.ground_segment = 1e6 + 5e4 * design.data_rate_gbps.max(0.0).powf(0.7);

    let base = hardware + costs.integration + costs.launch + costs.insurance + costs.ground_segment;
    // Capital is drawn evenly over the build, hence half of the build duration
    costs.interest_during_construction = params.wacc_orbital * BUILD_YEARS / 2.0 * base;
    costs
}

/// Annual cost of a platform with this capital cost.
pub(crate) fn annual_cost(
    costs: &CostBreakdown,
    design: &Design,
    lifetime_years: f64,
    params: &Params,
) -> AnnualCost {
    let capex = costs.capex();
    let bw_learning = (1.0 - params.bw_learn).powi(years_since_base(design.year));
    AnnualCost {
        capital: crf(params.wacc_orbital, lifetime_years) * capex,
        maintenance: params.maint_frac * capex,
        bandwidth: design.data_rate_gbps
            * params.bw_cost_gbps_yr
            * bw_learning
            * design.power.source.bandwidth_factor(),
    }
}
