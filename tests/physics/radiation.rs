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

use orbital_compute::orbital::shell_radiation_effects;
use orbital_compute::{Params, Shell};

#[test]
fn radiation_ordering() {
    let params = Params::default();
    for year in 2026..=2060 {
        let leo = shell_radiation_effects(Shell::Leo, year, &params);
        let meo = shell_radiation_effects(Shell::Meo, year, &params);
        let geo = shell_radiation_effects(Shell::Geo, year, &params);
        assert!(geo.tid_factor < leo.tid_factor, "{year}");
        assert!(leo.tid_factor < meo.tid_factor, "{year}");
        assert!(meo.lifetime_years < leo.lifetime_years, "{year}");
        for effects in [leo, meo, geo] {
            assert!(effects.availability > 0.0 && effects.availability <= 1.0);
            assert!(effects.replacement_rate > 0.0 && effects.replacement_rate <= 0.3);
        }
    }
}
