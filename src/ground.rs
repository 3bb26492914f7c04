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

use crate::finance::{crf, HOURS_PER_YEAR};
use crate::market::{btm_share, demand_gw, ground_supply_gw, scarcity_premium};
use crate::params::{years_since_base, Params, Tech};
use crate::physics::ground_efficiency;
use crate::reliability::{effective_uptime, sla_cost_multiplier};

/// Years for SMR and terrestrial fusion energy to mature after their unlock.
const ENERGY_MATURITY_YEARS: f64 = 8.0;
const MAX_UTILIZATION: f64 = 0.9;
/// Life of the datacenter building and electrical plant (years).
const FACILITY_LIFE: f64 = 15.0;
/// Annual improvement of the datacenter overhead towards its floor.
const PUE_IMPROVEMENT: f64 = 0.05;

/// Carbon intensity of grid electricity (kg CO2/kWh).
const GRID_CO2_PER_KWH: f64 = 0.40;
/// Carbon intensity of behind-the-meter gas generation (kg CO2/kWh).
const BTM_CO2_PER_KWH: f64 = 0.45;

/// The terrestrial datacenter in one year.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroundResult {
    pub year: i32,
    /// Production cost ($/GPU-hr)
    pub base: f64,
    /// Market clearing price ($/GPU-hr), after the scarcity premium
    pub market: f64,
    pub scarcity_premium: f64,
    /// AI compute demand (GW)
    pub demand_gw: f64,
    /// Terrestrial supply (GW)
    pub ground_supply_gw: f64,
    /// Orbital supply sold to the market (GW)
    pub orbital_supply_gw: f64,
    /// Terrestrial and orbital supply (GW)
    pub supply_gw: f64,
    /// Unmet demand over the total supply, negative in oversupply
    pub unmet_ratio: f64,
    /// Effective uptime of long running jobs
    pub uptime: f64,
    /// Redundancy cost paid when the uptime misses the SLA target
    pub sla_multiplier: f64,
    /// Electricity price ($/kWh)
    pub energy_price: f64,
    pub utilization: f64,
    pub pue: f64,
    /// Operational emissions per unit of compute (kg CO2 per TFLOPS-year)
    pub carbon_per_tflop: f64,
}

/// Cost of the terrestrial alternative, and the price the market clears at given the orbital
/// supply.
pub fn size_ground(year: i32, orbital_supply_gw: f64, params: &Params) -> GroundResult {
    let t = years_since_base(year);
    let efficiency = ground_efficiency(year, params);
    // IT load of one GPU equivalent
    let kw_per_gpu = params.gpu_equiv_tflops / efficiency;

    let gpu_cost_per_kw = (params.gpu_cost_per_kw * (1.0 - params.hw_learn).powi(t))
        .max(params.gpu_cost_floor_per_kw);
    let hardware = gpu_cost_per_kw * kw_per_gpu * params.server_overhead;

    let btm = btm_share(year, params);
    let mut energy_price = params.grid_price * (1.0 - btm) + params.btm_price * btm;
    let mut utilization = params.utilization;
    // Share of the energy from SMR or fusion, which displaces fossil generation
    let mut clean_share: f64 = 0.0;
    for (tech, discount) in [(Tech::Smr, 0.3), (Tech::Fusion, 0.5)] {
        if let Some(unlock) = params.unlock_year(tech).filter(|&y| year >= y) {
            let maturity = (f64::from(year - unlock) / ENERGY_MATURITY_YEARS).min(1.0);
            energy_price *= 1.0 - discount * maturity;
            utilization += 0.05 * maturity;
            clean_share = clean_share.max(maturity);
        }
    }
    let utilization = utilization.min(MAX_UTILIZATION);
    let pue = params.pue_floor + (params.pue - params.pue_floor) * (1.0 - PUE_IMPROVEMENT).powi(t);

    let hours = HOURS_PER_YEAR * utilization;
    let hardware_hr = crf(params.wacc_ground, params.gpu_life) * hardware / hours;
    let facility_capex = params.facility_cost_per_kw * kw_per_gpu * pue;
    let facility_hr = crf(params.wacc_ground, FACILITY_LIFE) * facility_capex / hours;
    let energy_hr = kw_per_gpu * pue * energy_price;

    let uptime = effective_uptime(
        params.ground_mtbf_hours,
        params.checkpoint_hours,
        params.ground_restart_hours,
    );
    let sla_multiplier = sla_cost_multiplier(uptime, params.sla_target);
    let base = (hardware_hr + facility_hr + energy_hr) / uptime.max(1e-9) * sla_multiplier;

    let demand = demand_gw(year, params);
    let ground_supply = ground_supply_gw(year, params);
    let supply = ground_supply + orbital_supply_gw;
    let unmet_ratio = (demand - supply) / supply.max(1e-9);
    let premium = scarcity_premium(unmet_ratio);

    let co2_per_kwh =
        (GRID_CO2_PER_KWH * (1.0 - btm) + BTM_CO2_PER_KWH * btm) * (1.0 - clean_share);
    // One GPU equivalent delivers gpu_equiv_tflops
    let carbon_per_tflop =
        kw_per_gpu * pue * HOURS_PER_YEAR * co2_per_kwh / params.gpu_equiv_tflops;

    GroundResult {
        year,
        base,
        market: base * premium,
        scarcity_premium: premium,
        demand_gw: demand,
        ground_supply_gw: ground_supply,
        orbital_supply_gw,
        supply_gw: supply,
        unmet_ratio,
        uptime,
        sla_multiplier,
        energy_price,
        utilization,
        pue,
        carbon_per_tflop,
    }
}

#[cfg(test)]
mod ut_ground {
    use super::*;

    #[test]
    fn base_year() {
        let params = Params::default();
        let gnd = size_ground(2026, 0.0, &params);
        assert!((gnd.base - 2.255_389_4).abs() < 1e-6, "{}", gnd.base);
        assert!(gnd.market > gnd.base);
        assert!((gnd.pue - params.pue).abs() < 1e-12);
    }

    #[test]
    fn sla_shortfall_is_charged() {
        let params = Params::default();
        let strict = size_ground(2026, 0.0, &params);
        assert!(strict.uptime < params.sla_target);
        let expected = 1.0 + 10.0 * (params.sla_target - strict.uptime);
        assert!((strict.sla_multiplier - expected).abs() < 1e-12);

        let lenient = size_ground(2026, 0.0, &Params::builder().sla_target(0.99).build());
        assert!((lenient.sla_multiplier - 1.0).abs() < f64::EPSILON);
        assert!((lenient.base - 2.202_373_3).abs() < 1e-6, "{}", lenient.base);
        assert!((strict.base / lenient.base - strict.sla_multiplier).abs() < 1e-12);
    }

    #[test]
    fn orbital_supply_relieves_scarcity() {
        let params = Params::default();
        let scarce = size_ground(2035, 0.0, &params);
        let relieved = size_ground(2035, 100.0, &params);
        assert!(relieved.market < scarce.market);
        assert_eq!(relieved.base, scarce.base);
    }

    #[test]
    fn clean_energy_cuts_emissions() {
        let mut params = Params::default();
        let with_smr = size_ground(2045, 0.0, &params);
        params.smr_enabled = false;
        params.fusion_enabled = false;
        let fossil = size_ground(2045, 0.0, &params);
        assert!(with_smr.energy_price < fossil.energy_price);
        assert!(with_smr.carbon_per_tflop < fossil.carbon_per_tflop);
    }
}
