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

use super::DispersedParams;
use crate::scenario::{Scenario, ScenarioResult};
use serde::{Deserialize, Serialize};
use statrs::statistics::{Data, OrderStatistics, Statistics};

/// Summary of a single Monte Carlo run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct McRun {
    pub index: usize,
    pub dispersed: DispersedParams,
    pub crossover_year: Option<i32>,
    pub lunar_unlock_year: Option<i32>,
    /// Delivered orbital cost in the last simulated year ($/GPU-hr)
    pub final_lcoc_effective: f64,
}

impl McRun {
    pub fn new(index: usize, dispersed: DispersedParams, result: &ScenarioResult) -> Self {
        Self {
            index,
            dispersed,
            crossover_year: result.crossover_year,
            lunar_unlock_year: result.lunar_unlock_year,
            final_lcoc_effective: result
                .fleets
                .last()
                .map_or(f64::NAN, |fleet| fleet.lcoc_effective),
        }
    }
}

/// Descriptive statistics of a sample.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub p05: f64,
    pub p50: f64,
    pub p95: f64,
}

impl Stats {
    /// Computes the statistics of the finite values of the sample, if any.
    ///
    /// The standard deviation is the sample one, zero for a single value. Percentiles follow the
    /// median-unbiased estimator of [`OrderStatistics::percentile`].
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.is_empty() {
            return None;
        }

        let count = finite.len();
        let std_dev = if count > 1 {
            finite.iter().std_dev()
        } else {
            0.0
        };
        let mean = finite.iter().mean();
        let min = Statistics::min(finite.iter());
        let max = Statistics::max(finite.iter());

        let mut data = Data::new(finite);
        Some(Self {
            count,
            mean,
            std_dev,
            min,
            max,
            p05: data.percentile(5),
            p50: data.percentile(50),
            p95: data.percentile(95),
        })
    }
}

/// All runs of a Monte Carlo batch, sorted by run index.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct McResults {
    pub runs: Vec<McRun>,
    pub scenario: Scenario,
}

impl McResults {
    /// Fraction of the runs which reach the crossover within the simulated years.
    pub fn crossover_fraction(&self) -> f64 {
        if self.runs.is_empty() {
            return 0.0;
        }
        self.runs.iter().filter(|run| run.crossover_year.is_some()).count() as f64
            / self.runs.len() as f64
    }

    pub fn crossover_years(&self) -> Vec<f64> {
        self.runs
            .iter()
            .filter_map(|run| run.crossover_year.map(f64::from))
            .collect()
    }

    pub fn lunar_unlock_years(&self) -> Vec<f64> {
        self.runs
            .iter()
            .filter_map(|run| run.lunar_unlock_year.map(f64::from))
            .collect()
    }

    /// Statistics of the crossover year, over the runs which reach it.
    pub fn crossover_stats(&self) -> Option<Stats> {
        Stats::from_values(&self.crossover_years())
    }

    pub fn lunar_unlock_stats(&self) -> Option<Stats> {
        Stats::from_values(&self.lunar_unlock_years())
    }

    pub fn final_lcoc_stats(&self) -> Option<Stats> {
        let values: Vec<f64> = self.runs.iter().map(|run| run.final_lcoc_effective).collect();
        Stats::from_values(&values)
    }
}

#[cfg(test)]
mod ut_results {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn stats() {
        let sample = [2030.0, 2034.0, f64::NAN, 2032.0, 2036.0, 2038.0];
        let stats = Stats::from_values(&sample).unwrap();
        assert_eq!(stats.count, 5);
        assert_abs_diff_eq!(stats.mean, 2034.0);
        assert_abs_diff_eq!(stats.std_dev, 10.0_f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(stats.min, 2030.0);
        assert_abs_diff_eq!(stats.max, 2038.0);
        assert_abs_diff_eq!(stats.p50, 2034.0, epsilon = 1e-9);
        assert!(stats.min <= stats.p05 && stats.p05 < stats.p50);
        assert!(stats.p50 < stats.p95 && stats.p95 <= stats.max);
        assert!(Stats::from_values(&[f64::NAN]).is_none());
    }

    #[test]
    fn single_value() {
        let stats = Stats::from_values(&[2040.0]).unwrap();
        assert_eq!(stats.count, 1);
        assert_abs_diff_eq!(stats.std_dev, 0.0);
        assert_abs_diff_eq!(stats.p05, 2040.0);
        assert_abs_diff_eq!(stats.p95, 2040.0);
    }

    #[test]
    fn percentiles_of_a_uniform_sample() {
        let values: Vec<f64> = (1..=101).map(f64::from).collect();
        let stats = Stats::from_values(&values).unwrap();
        assert_abs_diff_eq!(stats.p50, 51.0, epsilon = 1e-9);
        assert!((5.0..=6.0).contains(&stats.p05), "{}", stats.p05);
        assert!((96.0..=97.0).contains(&stats.p95), "{}", stats.p95);
    }
}
