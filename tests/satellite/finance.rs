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
use orbital_compute::finance::{annualize, crf};

#[test]
fn capital_recovery() {
    assert_abs_diff_eq!(crf(0.10, 6.0), 0.229_607_4, epsilon = 1e-7);
    assert_abs_diff_eq!(crf(0.0, 5.0), 0.2, epsilon = 1e-12);
    assert_abs_diff_eq!(annualize(1e6, 0.08, 5.0), 250_456.45, epsilon = 0.01);
}
