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

/// Hours in a year, used to convert annual costs to hourly rates.
pub const HOURS_PER_YEAR: f64 = 8760.0;

/// Capital recovery factor: the fraction of a lump capital expense paid each year to recover it
/// over `years` at the provided weighted average cost of capital.
///
/// A zero rate recovers the capital linearly, and a non positive life recovers all of it at once.
pub fn crf(wacc: f64, years: f64) -> f64 {
    if years <= 0.0 {
        return 1.0;
    }
    if wacc.abs() < 1e-9 {
        return 1.0 / years;
    }
    let growth = (1.0 + wacc).powf(years);
    wacc * growth / (growth - 1.0)
}

/// Annualized payment of `capex` over `years` at `wacc`.
pub fn annualize(capex: f64, wacc: f64, years: f64) -> f64 {
    crf(wacc, years) * capex
}
