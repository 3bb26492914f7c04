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

/// Space-to-ground bandwidth (Gbps) needed per delivered TFLOPS, shrinking over time with better
/// compression and on-orbit caching.
pub fn bw_per_tflop(year: i32, params: &Params) -> f64 {
    let bits_per_token = params.bytes_per_token * 8.0 * (1.0 + params.protocol_overhead);
    let gbps = bits_per_token / params.flops_per_token * 1e12 / 1e9;
    gbps * (1.0 - params.bw_shrink).powi(years_since_base(year))
}

/// Goodput of one optical terminal (Gbps).
pub fn terminal_rate_gbps(year: i32, params: &Params) -> f64 {
    params.terminal_gbps * (1.0 + params.terminal_growth).powi(years_since_base(year))
}

/// Maximum downlink rate of one platform (Gbps).
pub fn max_platform_rate_gbps(year: i32, params: &Params) -> f64 {
    f64::from(params.max_terminals) * terminal_rate_gbps(year, params)
}

/// Number of terminals needed for the provided data rate, at least one and at most the configured
/// maximum.
pub fn terminal_count(rate_gbps: f64, year: i32, params: &Params) -> u32 {
    terminals_for_rate(
        rate_gbps,
        terminal_rate_gbps(year, params),
        params.max_terminals,
    )
}

pub(crate) fn terminals_for_rate(
    rate_gbps: f64,
    terminal_rate_gbps: f64,
    max_terminals: u32,
) -> u32 {
    let needed = (rate_gbps / terminal_rate_gbps).ceil();
    needed.clamp(1.0, f64::from(max_terminals.max(1))) as u32
}

/// Total space-to-ground bandwidth available to the fleet (Gbps).
pub fn bw_available_gbps(year: i32, params: &Params) -> f64 {
    params.bw_base_tbps * 1e3 * (1.0 + params.bw_growth).powi(years_since_base(year))
}
