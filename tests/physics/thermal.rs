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

use orbital_compute::physics::radiator_mass_per_mw;
use orbital_compute::{Params, Shell};

#[test]
fn thermal_breakthrough_cuts_radiator_mass() {
    for thermal_year in [2030, 2035, 2042] {
        let params = Params::builder().thermal_year(thermal_year).build();
        for shell in [Shell::Leo, Shell::Geo] {
            let before = radiator_mass_per_mw(thermal_year - 1, shell, &params);
            let after = radiator_mass_per_mw(thermal_year, shell, &params);
            assert!(after.is_finite() && before.is_finite());
            assert!(
                after < 0.1 * before,
                "{shell} {thermal_year}: {after} kg/MW vs {before} kg/MW"
            );
        }
    }
}

#[test]
fn disabled_breakthrough_changes_nothing() {
    let params = Params::builder().thermal_enabled(false).build();
    let before = radiator_mass_per_mw(params.thermal_year - 1, Shell::Leo, &params);
    let after = radiator_mass_per_mw(params.thermal_year, Shell::Leo, &params);
    assert_eq!(before, after);
}
