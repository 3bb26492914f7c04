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

/// Saturation of the R&D stock.
pub const RD_MAX: f64 = 10.0;
/// Annual decay of the R&D stock.
const RD_DECAY: f64 = 0.1;
const RD_GAIN: f64 = 0.5;
/// Launches per year which are not driven by orbital compute.
pub const BASELINE_FLIGHTS: f64 = 200.0;
/// Terrestrial compute per GW of datacenter supply (EF).
pub const EXAFLOPS_PER_GW: f64 = 500.0;

/// Global compute (EF) from the orbital fleet compute (TFLOPS) and the terrestrial supply (GW).
pub fn global_exaflops(orbital_tflops: f64, ground_supply_gw: f64) -> f64 {
    orbital_tflops * 1e-6 + ground_supply_gw * EXAFLOPS_PER_GW
}

/// Next R&D stock: decays every year and grows logarithmically with the global compute, up to
/// [`RD_MAX`].
pub fn update_rd_stock(stock: f64, global_exaflops: f64) -> f64 {
    (stock * (1.0 - RD_DECAY) + RD_GAIN * (1.0 + global_exaflops / 1e3).ln()).min(RD_MAX)
}

/// Research acceleration factor of this R&D stock.
pub fn rd_acceleration(stock: f64) -> f64 {
    1.0 + 0.5 * stock / RD_MAX
}

/// Launch learning rate, boosted by the flight cadence.
pub fn launch_learning_rate(base_rate: f64, orbital_flights: f64) -> f64 {
    let flights = orbital_flights + BASELINE_FLIGHTS;
    base_rate * (1.0 + 0.25 * (1.0 + flights / 100.0).log2())
}
