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

/// Fills the gaps of a log-scale series.
///
/// A missing or non-finite interior point becomes the geometric mean of the closest finite positive
/// points on either side. Leading and trailing gaps take the nearest finite point. A series without
/// any usable point is returned as all `None`.
pub fn interpolate_log(series: &[Option<f64>]) -> Vec<Option<f64>> {
    let usable = |v: &Option<f64>| v.filter(|x| x.is_finite() && *x > 0.0);

    (0..series.len())
        .map(|i| {
            if let Some(v) = usable(&series[i]) {
                return Some(v);
            }
            let before = series[..i].iter().rev().find_map(usable);
            let after = series[i + 1..].iter().find_map(usable);
            match (before, after) {
                (Some(lo), Some(hi)) => Some((lo * hi).sqrt()),
                (Some(v), None) | (None, Some(v)) => Some(v),
                (None, None) => None,
            }
        })
        .collect()
}

/// Wraps raw values, mapping the non-finite ones to `None`.
pub fn finite_or_none(values: &[f64]) -> Vec<Option<f64>> {
    values
        .iter()
        .map(|v| v.is_finite().then_some(*v))
        .collect()
}
