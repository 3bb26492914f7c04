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

use orbital_compute::physics::{ground_efficiency, orbital_efficiency};
use orbital_compute::Params;
use rstest::rstest;

#[rstest]
#[case(0.20)]
#[case(0.05)]
#[case(0.40)]
fn efficiency_monotone_and_penalized(#[case] ai_learn: f64) {
    let params = Params::builder().ai_learn(ai_learn).build();
    let mut prev_ground = 0.0;
    let mut prev_orbital = 0.0;
    for year in 2026..=2070 {
        let ground = ground_efficiency(year, &params);
        let orbital = orbital_efficiency(year, &params);
        assert!(ground >= prev_ground, "{year}: ground efficiency decreased");
        assert!(orbital >= prev_orbital, "{year}: orbital efficiency decreased");
        assert!(orbital <= ground, "{year}: orbital above ground");
        prev_ground = ground;
        prev_orbital = orbital;
    }
}
