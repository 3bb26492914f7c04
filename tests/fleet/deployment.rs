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

use enum_iterator::all;
use orbital_compute::fleet::{size_fleet, Bottleneck, ConstraintRatios};
use orbital_compute::orbital::Shell;
use orbital_compute::{run_scenario, FleetTracker, Params, Scenario};
use rstest::rstest;

#[rstest]
#[case(Scenario::Aggressive)]
#[case(Scenario::Baseline)]
#[case(Scenario::Conservative)]
fn fleet_never_shrinks_faster_than_attrition(#[case] scenario: Scenario) {
    crate::init_logger();
    let result = run_scenario(scenario, &Params::default());
    for pair in result.fleets.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        for shell in all::<Shell>() {
            let floor = prev.counts[shell] * (1.0 - next.replacement_rate[shell]);
            assert!(
                next.counts[shell] >= floor * (1.0 - 1e-9),
                "{scenario} {shell} {}: {} < {floor}",
                next.year,
                next.counts[shell]
            );
        }
    }
}

#[test]
fn fleet_outputs_are_finite() {
    let result = run_scenario(Scenario::Baseline, &Params::default());
    for fleet in &result.fleets {
        assert!(fleet.lcoc_effective.is_finite(), "{}", fleet.year);
        assert!(fleet.lcoc_effective >= fleet.lcoc_production, "{}", fleet.year);
        assert!((0.0..=1.0).contains(&fleet.sellable_util), "{}", fleet.year);
        assert!(fleet.cumulative_mass_kg >= 0.0);
    }
    for pair in result.fleets.windows(2) {
        assert!(pair[1].cumulative_flights >= pair[0].cumulative_flights);
    }
}

#[test]
fn pre_crossover_trickle_is_leo_only() {
    let params = Params::default();
    let mut tracker = FleetTracker::new();
    let fleet = size_fleet(2026, None, &params, &mut tracker);
    assert!(fleet.counts.leo > 0.0);
    assert_eq!(fleet.counts.meo, 0.0);
    assert_eq!(fleet.counts.geo, 0.0);
    assert_eq!(fleet.counts.cislunar, 0.0);
}

#[test]
fn tracker_reset_replays_identically() {
    let params = Params::default();
    let mut tracker = FleetTracker::new();
    let first: Vec<_> = (2026..=2040)
        .map(|year| size_fleet(year, Some(2030), &params, &mut tracker))
        .collect();
    tracker.reset();
    let second: Vec<_> = (2026..=2040)
        .map(|year| size_fleet(year, Some(2030), &params, &mut tracker))
        .collect();
    assert_eq!(first, second);
}

#[test]
fn bandwidth_override() {
    let ratios = ConstraintRatios {
        thermal: 2.0,
        launch: 0.5,
        bandwidth: 1.5,
        demand: 3.0,
        slots: 4.0,
    };
    assert_eq!(ratios.bottleneck(0.9), Bottleneck::Bandwidth);
    assert_eq!(ratios.bottleneck(1.0), Bottleneck::Launch);
}
