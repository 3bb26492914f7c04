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

use serde::Serialize;
use snafu::prelude::*;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::scenario::ScenarioResult;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ExportError {
    #[snafu(display("CSV export failed: {source}"))]
    Csv { source: csv::Error },

    #[snafu(display("could not create export file: {source}"))]
    Io { source: std::io::Error },
}

/// One exported year: the chart fields of a scenario.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExportRow {
    pub scenario: String,
    pub year: i32,
    /// Delivered orbital cost ($/GPU-hr)
    pub lcoc_effective: f64,
    pub lcoc_production: f64,
    /// Terrestrial market price ($/GPU-hr)
    pub market: f64,
    /// Embodied carbon of a LEO platform (kgCO2 per TFLOP-year)
    pub orbital_carbon_per_tflop: f64,
    pub ground_carbon_per_tflop: f64,
    pub leo_platforms: f64,
    pub meo_platforms: f64,
    pub geo_platforms: f64,
    pub cislunar_platforms: f64,
    pub orbital_power_gw: f64,
    pub sellable_util: f64,
    pub bottleneck: String,
    pub lunar_readiness: f64,
    /// Whether this year is at or past the crossover
    pub crossed_over: bool,
}

/// Builds the export rows of a scenario, one per simulated year.
pub fn export_rows(result: &ScenarioResult) -> Vec<ExportRow> {
    result
        .fleets
        .iter()
        .zip(&result.gnds)
        .zip(&result.sats)
        .zip(&result.states)
        .map(|(((fleet, ground), sats), state)| ExportRow {
            scenario: result.scenario.to_string(),
            year: fleet.year,
            lcoc_effective: fleet.lcoc_effective,
            lcoc_production: fleet.lcoc_production,
            market: ground.market,
            orbital_carbon_per_tflop: sats.leo.carbon_per_tflop,
            ground_carbon_per_tflop: ground.carbon_per_tflop,
            leo_platforms: fleet.counts.leo,
            meo_platforms: fleet.counts.meo,
            geo_platforms: fleet.counts.geo,
            cislunar_platforms: fleet.counts.cislunar,
            orbital_power_gw: fleet.total_power_gw,
            sellable_util: fleet.sellable_util,
            bottleneck: fleet.bottleneck.to_string(),
            lunar_readiness: state.lunar_readiness,
            crossed_over: result
                .crossover_year
                .map_or(false, |crossover| fleet.year >= crossover),
        })
        .collect()
}

/// Writes one CSV row per simulated year, with headers.
pub fn write_csv<W: Write>(result: &ScenarioResult, writer: W) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in export_rows(result) {
        wtr.serialize(row).context(CsvSnafu)?;
    }
    wtr.flush().context(IoSnafu)?;
    info!("exported {} years of {}", result.fleets.len(), result.scenario);
    Ok(())
}

/// Writes the CSV export of a scenario to the provided path.
pub fn to_csv_file<P: AsRef<Path>>(result: &ScenarioResult, path: P) -> Result<(), ExportError> {
    let file = File::create(path).context(IoSnafu)?;
    write_csv(result, file)
}
