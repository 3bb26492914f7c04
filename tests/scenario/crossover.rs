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

use orbital_compute::lunar::{BUILD_LEAD_YEARS, READINESS_THRESHOLD};
use orbital_compute::scenario::{run_all, run_named_scenario, run_scenario_over, YearIndex};
use orbital_compute::{run_scenario, LcocError, Params, Scenario};
use rstest::rstest;

#[rstest]
#[case(Scenario::Aggressive)]
#[case(Scenario::Baseline)]
#[case(Scenario::Conservative)]
fn crossover_is_first_winning_prepass_year(#[case] scenario: Scenario) {
    crate::init_logger();
    let result = run_scenario(scenario, &Params::default());
    let crossover = result.crossover_year.expect("every default scenario crosses over");
    for check in &result.prepass {
        if check.year < crossover {
            assert!(!check.orbital_wins(), "{scenario} wins early in {}", check.year);
        } else {
            assert!(check.orbital_wins(), "{scenario} loses again in {}", check.year);
        }
    }
    let at = result
        .prepass
        .iter()
        .find(|check| check.year == crossover)
        .unwrap();
    assert!(at.lcoc_effective < at.market);
    // The second pass is deployed with the crossover
    assert!(result.fleets.iter().all(|fleet| fleet.crossover_year == Some(crossover)));
}

#[test]
fn scenario_ordering() {
    crate::init_logger();
    let results = run_all(&Params::default());
    let crossover = |scenario: Scenario| {
        results
            .iter()
            .find(|result| result.scenario == scenario)
            .and_then(|result| result.crossover_year)
            .unwrap_or(i32::MAX)
    };
    assert_eq!(results.len(), 3);
    assert!(crossover(Scenario::Aggressive) <= crossover(Scenario::Baseline));
    assert!(crossover(Scenario::Baseline) <= crossover(Scenario::Conservative));
}

#[test]
fn result_arrays_follow_the_years() {
    let years = YearIndex::new(2026, 2040);
    let result = run_scenario_over(Scenario::Baseline, &Params::default(), years);
    assert_eq!(result.fleets.len(), 15);
    assert_eq!(result.gnds.len(), 15);
    assert_eq!(result.sats.len(), 15);
    assert_eq!(result.states.len(), 15);
    assert_eq!(result.fleet(2033).unwrap().year, 2033);
    assert_eq!(result.ground(2040).unwrap().year, 2040);
    assert!(result.state(2041).is_none());
    for pair in result.states.windows(2) {
        assert!(pair[1].launch_cost_per_kg <= pair[0].launch_cost_per_kg);
        assert!(pair[1].cumulative_mass_kg >= pair[0].cumulative_mass_kg);
        assert!(pair[1].rd_stock <= orbital_compute::learning::RD_MAX);
    }
}

#[test]
fn runs_are_independent() {
    let params = Params::default();
    let first = run_scenario(Scenario::Conservative, &params);
    let _ = run_scenario(Scenario::Aggressive, &params);
    let again = run_scenario(Scenario::Conservative, &params);
    assert_eq!(first, again);
}

#[test]
fn named_scenarios() {
    let params = Params::default();
    let result = run_named_scenario("aggressive", &params).unwrap();
    assert_eq!(result.scenario, Scenario::Aggressive);
    assert!(matches!(
        run_named_scenario("optimistic", &params),
        Err(LcocError::UnknownScenario { .. })
    ));
}

#[test]
fn lunar_unlock_follows_readiness() {
    let result = run_scenario(Scenario::Baseline, &Params::default());
    let unlock = result.lunar_unlock_year.expect("baseline builds a lunar base");
    let ready = unlock - BUILD_LEAD_YEARS;
    assert!(result.state(ready).unwrap().lunar_readiness >= READINESS_THRESHOLD);
    for earlier in result.states.iter().filter(|state| state.year < ready) {
        assert!(earlier.lunar_readiness < READINESS_THRESHOLD, "{}", earlier.year);
    }
}
