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

use orbital_compute::physics::launch_cost_per_kg;
use orbital_compute::Params;
use rstest::rstest;

#[rstest]
#[case::defaults(Params::default())]
#[case::no_starship(Params::builder().starship_enabled(false).build())]
#[case::fast_learning(Params::builder().launch_learn(0.5).build())]
#[case::high_floor(Params::builder().launch_floor(400.0).build())]
fn launch_cost_monotone_above_floor(#[case] params: Params) {
    crate::init_logger();
    let mut prev = f64::INFINITY;
    for year in 2026..=2070 {
        let cost = launch_cost_per_kg(year, &params);
        assert!(cost <= prev, "{year}: {cost} > {prev}");
        assert!(cost >= params.launch_floor, "{year}: {cost} below the floor");
        prev = cost;
    }
}
