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

use crate::params::{years_since_base, Params};

/// Damping horizon of the demand growth rate (years).
const DEMAND_DAMPING_YEARS: f64 = 15.0;

/// AI compute demand (GW) in the provided year.
///
/// Growth starts from the 2025 baseline and decays hyperbolically, so that demand keeps growing but
/// more slowly.
pub fn demand_gw(year: i32, params: &Params) -> f64 {
    (0..=years_since_base(year)).fold(params.demand_gw, |demand, i| {
        demand * (1.0 + params.demand_growth / (1.0 + f64::from(i) / DEMAND_DAMPING_YEARS))
    })
}

/// Behind-the-meter share of terrestrial supply.
///
/// The share rises from its 2025 value towards its maximum, faster when the grid interconnection
/// queue is long and when grid power is expensive compared to on-site generation.
pub fn btm_share(year: i32, params: &Params) -> f64 {
    let t = f64::from(years_since_base(year));
    let price_ratio = params.grid_price / params.btm_price.max(1e-9);
    let pain = 1.0 - (-params.grid_delay_years / 5.0 * price_ratio.sqrt()).exp();
    params.btm_share + (params.btm_max_share - params.btm_share) * pain * (1.0 - (-t / 8.0).exp())
}

/// Grid-connected datacenter supply (GW).
pub fn grid_supply_gw(year: i32, params: &Params) -> f64 {
    params.supply_gw * (1.0 + params.supply_growth).powi(years_since_base(year) + 1)
}

/// Total terrestrial supply (GW), grid plus behind-the-meter.
pub fn ground_supply_gw(year: i32, params: &Params) -> f64 {
    grid_supply_gw(year, params) / (1.0 - btm_share(year, params))
}

/// Ratio of demand to terrestrial supply. Values above one mean compute is scarce.
pub fn demand_pressure(year: i32, params: &Params) -> f64 {
    demand_gw(year, params) / ground_supply_gw(year, params).max(1e-9)
}

/// Premium over the production cost that the market clears at, given the unmet demand ratio
/// `(demand - supply) / supply`.
pub fn scarcity_premium(unmet: f64) -> f64 {
    if unmet < 0.0 {
        // Oversupply discount
        (1.0 + 0.8 * unmet).max(0.6)
    } else if unmet <= 0.3 {
        1.0 + 1.5 * unmet
    } else if unmet <= 1.0 {
        // Demand destruction damps the premium
        1.45 + 0.8 * (unmet - 0.3)
    } else {
        2.01 + 0.5 * unmet.ln()
    }
}

#[cfg(test)]
mod ut_market {
    use super::*;

    #[test]
    fn curves() {
        let params = Params::default();
        assert!((demand_gw(2026, &params) - 19.5).abs() < 1e-9);
        assert!((ground_supply_gw(2026, &params) - 14.933_333).abs() < 1e-5);
        let mut prev = 0.0;
        for year in 2026..2070 {
            let demand = demand_gw(year, &params);
            assert!(demand > prev);
            prev = demand;
            let share = btm_share(year, &params);
            assert!(share >= params.btm_share && share <= params.btm_max_share);
        }
        assert!(demand_pressure(2030, &params) > 1.0);
    }

    #[test]
    fn btm_share_follows_grid_price() {
        let params = Params::default();
        let expensive = Params::builder().grid_price(2.0 * params.grid_price).build();
        // No drift in the base year
        assert!((btm_share(2026, &expensive) - btm_share(2026, &params)).abs() < 1e-12);
        for year in [2030, 2040, 2060] {
            assert!(btm_share(year, &expensive) > btm_share(year, &params), "{year}");
            assert!(btm_share(year, &expensive) <= expensive.btm_max_share);
        }
        assert!((btm_share(2030, &params) - 0.175_486_4).abs() < 1e-6);
        assert!((btm_share(2030, &expensive) - 0.194_901_1).abs() < 1e-6);
    }

    #[test]
    fn scarcity_is_continuous() {
        for knot in [0.0_f64, 0.3, 1.0] {
            let below = scarcity_premium(knot - 1e-9);
            let above = scarcity_premium(knot + 1e-9);
            assert!((below - above).abs() < 1e-6, "{knot}: {below} vs {above}");
        }
        assert!((scarcity_premium(-1.0) - 0.6).abs() < f64::EPSILON);
        assert!(scarcity_premium(5.0) > scarcity_premium(2.0));
    }
}
