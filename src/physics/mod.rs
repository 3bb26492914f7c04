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

/// Stefan-Boltzmann constant (W/m²/K⁴)
pub const STEFAN_BOLTZMANN: f64 = 5.670_374_419e-8;
/// Solar constant at 1 AU (W/m²)
pub const SOLAR_CONSTANT: f64 = 1361.0;

mod comms;
mod compute;
mod launch;
mod thermal;

pub use comms::*;
pub use compute::*;
pub use launch::*;
pub use thermal::*;
