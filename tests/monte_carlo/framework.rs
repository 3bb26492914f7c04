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

use orbital_compute::io::ConfigRepr;
use orbital_compute::mc::*;
use orbital_compute::scenario::YearIndex;
use orbital_compute::{Params, Scenario};

#[test]
fn monte_carlo_crossover() {
    crate::init_logger();

    // 10% on the AI learning rate and 20% on the launch cost
    let generator = GaussianGenerator::from_1σs_prcts(
        Params::default(),
        &[(ParamKey::AiLearn, 0.1), (ParamKey::LaunchCost, 0.2)],
    )
    .unwrap();

    let mut my_mc = MonteCarlo::new(generator, Scenario::Baseline, 0);
    my_mc.years = YearIndex::new(2026, 2045);

    let rslts = my_mc.run(24);
    assert_eq!(rslts.runs.len(), 24);
    for (i, run) in rslts.runs.iter().enumerate() {
        assert_eq!(run.index, i);
        assert_eq!(run.dispersed.actual_dispersions.len(), 2);
    }

    let fraction = rslts.crossover_fraction();
    assert!((0.0..=1.0).contains(&fraction));
    if let Some(stats) = rslts.crossover_stats() {
        assert!(stats.min >= 2026.0 && stats.max <= 2045.0);
        assert!(stats.p05 <= stats.p50 && stats.p50 <= stats.p95);
        println!("crossover: {stats:?} ({:.0}% of runs)", fraction * 100.0);
    }
    assert!(rslts.final_lcoc_stats().is_some());
}

#[test]
fn monte_carlo_is_reproducible() {
    let generator =
        GaussianGenerator::from_1σs(Params::default(), &[(ParamKey::SatLife, 1.0)]).unwrap();
    let my_mc = MonteCarlo::new(generator, Scenario::Aggressive, 42);

    let all = my_mc.generate_params(0, 10);
    let resumed = my_mc.generate_params(6, 4);
    assert_eq!(&all[6..], &resumed[..]);

    let other_seed = MonteCarlo {
        seed: 7,
        ..my_mc
    };
    assert_ne!(other_seed.generate_params(0, 10), all);
    assert_eq!(format!("{other_seed:x}"), "mc-aggressive-seed-7");
}

#[test]
fn monte_carlo_from_yaml() {
    let cfgs = ParamDispersion::loads_many(
        "- param: fusion_year\n  std_dev: 4.0\n\
        - param: grid_price\n  mean: 0.01\n  std_dev: 0.01\n",
    )
    .unwrap();
    let generator = GaussianGenerator::from_dispersion_cfgs(Params::default(), &cfgs).unwrap();
    assert_eq!(generator.dispersions.len(), 2);

    let my_mc = MonteCarlo::new(generator, Scenario::Conservative, 3);
    for (_, dispersed) in my_mc.generate_params(0, 50) {
        let year = dispersed.params.fusion_year;
        assert!((2026..=2100).contains(&year));
        assert!(dispersed.params.grid_price >= ParamKey::GridPrice.bounds().0);
    }
}
