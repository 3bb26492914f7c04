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

use orbital_compute::io::export::export_rows;
use orbital_compute::io::series::{finite_or_none, interpolate_log};
use orbital_compute::io::{write_csv, ConfigRepr};
use orbital_compute::scenario::{run_scenario_over, YearIndex};
use orbital_compute::{Params, Scenario};

#[test]
fn csv_export() {
    crate::init_logger();
    let years = YearIndex::new(2026, 2045);
    let result = run_scenario_over(Scenario::Baseline, &Params::default(), years);

    let mut buf = Vec::new();
    write_csv(&result, &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 21);
    assert!(lines[0].starts_with("scenario,year,lcoc_effective,"));
    assert!(lines[1].starts_with("baseline,2026,"));

    let rows = export_rows(&result);
    match result.crossover_year {
        Some(crossover) => {
            for row in &rows {
                assert_eq!(row.crossed_over, row.year >= crossover);
            }
        }
        None => assert!(rows.iter().all(|row| !row.crossed_over)),
    }
}

#[test]
fn chart_series_have_no_gaps() {
    let years = YearIndex::new(2026, 2040);
    let result = run_scenario_over(Scenario::Conservative, &Params::default(), years);
    let raw: Vec<f64> = result.fleets.iter().map(|fleet| fleet.lcoc_effective).collect();
    let filled = interpolate_log(&finite_or_none(&raw));
    assert_eq!(filled.len(), raw.len());
    assert!(filled.iter().all(|v| v.map_or(false, |v| v.is_finite() && v > 0.0)));
}

#[test]
fn params_from_yaml() {
    let yaml = "ai_learn: 0.3\nlaunch_cost: 2500.0\nfusion_enabled: false\n";
    let params = Params::loads(yaml).unwrap();
    assert_eq!(params.ai_learn, 0.3);
    assert_eq!(params.launch_cost, 2500.0);
    assert!(!params.fusion_enabled);
    assert_eq!(params.sat_life, Params::default().sat_life);
    assert!(params.validate().is_ok());

    assert!(Params::from_yaml("does/not/exist.yaml").is_err());
}
