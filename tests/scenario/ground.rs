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

use approx::assert_abs_diff_eq;
use orbital_compute::ground::size_ground;
use orbital_compute::{run_scenario, Params, Scenario};

#[test]
fn base_year_cost() {
    let gnd = size_ground(2026, 0.0, &Params::default());
    assert_abs_diff_eq!(gnd.base, 2.255_389_4, epsilon = 1e-6);
    assert_abs_diff_eq!(gnd.market, gnd.base * gnd.scarcity_premium, epsilon = 1e-12);
}

#[test]
fn ground_cost_falls_over_time() {
    let params = Params::default();
    let early = size_ground(2026, 0.0, &params);
    let late = size_ground(2045, 0.0, &params);
    assert!(late.base < early.base);
    assert!(late.pue < early.pue);
}

#[test]
fn sold_orbital_power_feeds_the_market() {
    let result = run_scenario(Scenario::Aggressive, &Params::default());
    for (fleet, gnd) in result.fleets.iter().zip(&result.gnds) {
        assert_abs_diff_eq!(
            gnd.orbital_supply_gw,
            fleet.total_power_gw * fleet.sellable_util,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            gnd.supply_gw,
            gnd.ground_supply_gw + gnd.orbital_supply_gw,
            epsilon = 1e-9
        );
    }
}
