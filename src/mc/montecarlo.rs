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

use super::results::{McResults, McRun};
use super::{DispersedParams, Distribution, Generator, Pcg64Mcg};
use crate::scenario::{run_scenario_over, Scenario, YearIndex};
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rayon::prelude::*;
use std::fmt;
use std::time::Instant;

/// A Monte Carlo framework, runs each dispersed parameter set through a scenario in parallel.
///
/// Runs are reproducible: the same seed and generator always yield the same parameter sets, so a
/// batch can be resumed by skipping the runs already computed.
pub struct MonteCarlo<Distr: Distribution<f64> + Copy> {
    /// Seed of the [64bit PCG random number generator](https://www.pcg-random.org/index.html)
    pub seed: u64,
    pub generator: Generator<Distr>,
    pub scenario: Scenario,
    pub years: YearIndex,
}

impl<Distr: Distribution<f64> + Copy + Sync> MonteCarlo<Distr> {
    pub fn new(generator: Generator<Distr>, scenario: Scenario, seed: u64) -> Self {
        Self {
            seed,
            generator,
            scenario,
            years: YearIndex::default(),
        }
    }

    fn progress_bar(&self, num_runs: usize) -> ProgressBar {
        let pb = ProgressBar::new(num_runs as u64);
        match ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:100.cyan/blue} {pos:>7}/{len:7} {msg}")
        {
            Ok(style) => pb.set_style(style.progress_chars("##-")),
            Err(e) => warn!("default progress bar style used: {e}"),
        }
        pb.set_message(format!("{self}"));
        pb
    }

    #[must_use = "Monte Carlo result must be used"]
    pub fn run(&self, num_runs: usize) -> McResults {
        self.resume_run(0, num_runs)
    }

    /// Runs `num_runs` parameter sets after skipping the first `skip` ones.
    #[must_use = "Monte Carlo result must be used"]
    pub fn resume_run(&self, skip: usize, num_runs: usize) -> McResults {
        let init_params = self.generate_params(skip, num_runs);
        let pb = self.progress_bar(num_runs);

        let start = Instant::now();
        let runs: Vec<McRun> = init_params
            .par_iter()
            .progress_with(pb)
            .map(|(index, dispersed)| {
                let result = run_scenario_over(self.scenario, &dispersed.params, self.years);
                McRun::new(*index, dispersed.clone(), &result)
            })
            .collect();

        info!(
            "{self} -- {} runs in {:.3} s",
            runs.len(),
            start.elapsed().as_secs_f64()
        );

        McResults {
            runs,
            scenario: self.scenario,
        }
    }

    /// Generates the dispersed parameter sets, each with its run index.
    pub fn generate_params(&self, skip: usize, num_runs: usize) -> Vec<(usize, DispersedParams)> {
        let rng = Pcg64Mcg::seed_from_u64(self.seed);
        (&self.generator)
            .sample_iter(rng)
            .skip(skip)
            .take(num_runs)
            .enumerate()
            .map(|(i, dispersed)| (skip + i, dispersed))
            .collect()
    }
}

impl<Distr: Distribution<f64> + Copy> fmt::Display for MonteCarlo<Distr> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} - orbital compute Monte Carlo - seed: {}",
            self.scenario, self.seed
        )
    }
}

impl<Distr: Distribution<f64> + Copy> fmt::LowerHex for MonteCarlo<Distr> {
    /// Formats as a file name friendly string
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "mc-{}-seed-{}", self.scenario, self.seed)
    }
}
