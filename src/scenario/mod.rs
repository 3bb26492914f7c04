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

use core::fmt;
use enum_iterator::{all, Sequence};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{LcocError, UnknownScenarioSnafu};
use crate::fleet::{size_fleet_with, FleetResult, FleetTracker};
use crate::ground::{size_ground, GroundResult};
use crate::lunar::lunar_unlock_year;
use crate::orbital::PerShell;
use crate::params::{Params, Tech, BASE_YEAR};
use crate::satellite::{size_satellite, SatelliteResult};

mod state;
pub use state::SimulationState;

/// Last simulated year by default.
pub const DEFAULT_END_YEAR: i32 = 2060;

/// Technologies whose unlock year moves with the scenario. SMR is terrestrial and does not move.
const SPACE_TECH: [Tech; 6] = [
    Tech::Thermal,
    Tech::Fission,
    Tech::Fusion,
    Tech::Thermodynamic,
    Tech::Photonic,
    Tech::Starship,
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Sequence, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Aggressive,
    Baseline,
    Conservative,
}

/// Adjustments a scenario makes to the base parameters.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioTransform {
    /// Multiplier of the AI hardware learning rate
    pub learn_mult: f64,
    /// Multiplier of the launch learning rate
    pub launch_learn_mult: f64,
    /// Years added to every space technology unlock year
    pub tech_offset: i32,
    pub demand_mult: f64,
}

impl Scenario {
    pub const fn transform(&self) -> ScenarioTransform {
        match self {
            Self::Aggressive => ScenarioTransform {
                learn_mult: 1.15,
                launch_learn_mult: 1.25,
                tech_offset: -3,
                demand_mult: 1.3,
            },
            Self::Baseline => ScenarioTransform {
                learn_mult: 1.0,
                launch_learn_mult: 1.0,
                tech_offset: 0,
                demand_mult: 1.0,
            },
            Self::Conservative => ScenarioTransform {
                learn_mult: 0.85,
                launch_learn_mult: 0.75,
                tech_offset: 3,
                demand_mult: 0.8,
            },
        }
    }

    /// Returns the parameters of this scenario built from the provided base parameters.
    pub fn apply(&self, base: &Params) -> Params {
        let tf = self.transform();
        let mut params = base.clone();
        params.ai_learn *= tf.learn_mult;
        params.launch_learn = (params.launch_learn * tf.launch_learn_mult).min(0.95);
        for tech in SPACE_TECH {
            params.shift_unlock(tech, tf.tech_offset);
        }
        params.demand_gw *= tf.demand_mult;
        params
    }
}

impl FromStr for Scenario {
    type Err = LcocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "aggressive" => Ok(Self::Aggressive),
            "baseline" => Ok(Self::Baseline),
            "conservative" => Ok(Self::Conservative),
            _ => UnknownScenarioSnafu { name: s.to_string() }.fail(),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aggressive => write!(f, "aggressive"),
            Self::Baseline => write!(f, "baseline"),
            Self::Conservative => write!(f, "conservative"),
        }
    }
}

/// Lookup between calendar years and indexes of the per-year arrays.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearIndex {
    pub start: i32,
    /// Inclusive
    pub end: i32,
}

impl YearIndex {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    pub fn index_of(&self, year: i32) -> Option<usize> {
        if (self.start..=self.end).contains(&year) {
            usize::try_from(year - self.start).ok()
        } else {
            None
        }
    }

    pub fn year_at(&self, index: usize) -> Option<i32> {
        let year = self.start + i32::try_from(index).ok()?;
        (year <= self.end).then_some(year)
    }

    pub fn len(&self) -> usize {
        usize::try_from(self.end - self.start + 1).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn years(&self) -> impl Iterator<Item = i32> {
        self.start..=self.end
    }
}

impl Default for YearIndex {
    fn default() -> Self {
        Self::new(BASE_YEAR, DEFAULT_END_YEAR)
    }
}

/// Unconstrained economics of one year, from the pass which locates the crossover.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CrossoverCheck {
    pub year: i32,
    /// Delivered cost of the unconstrained fleet ($/GPU-hr)
    pub lcoc_effective: f64,
    /// Terrestrial market price without any orbital supply ($/GPU-hr)
    pub market: f64,
}

impl CrossoverCheck {
    pub fn orbital_wins(&self) -> bool {
        self.lcoc_effective < self.market
    }
}

/// Everything computed for one scenario, with per-year arrays indexed by [`YearIndex`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario: Scenario,
    /// Parameters after the scenario transform
    pub params: Params,
    pub years: YearIndex,
    /// Platform design of each shell
    pub sats: Vec<PerShell<SatelliteResult>>,
    pub fleets: Vec<FleetResult>,
    pub gnds: Vec<GroundResult>,
    pub prepass: Vec<CrossoverCheck>,
    pub states: Vec<SimulationState>,
    /// First year the delivered orbital cost undercuts the terrestrial market price
    pub crossover_year: Option<i32>,
    pub lunar_unlock_year: Option<i32>,
}

impl ScenarioResult {
    /// Fleet of the provided year, if simulated.
    pub fn fleet(&self, year: i32) -> Option<&FleetResult> {
        self.years.index_of(year).and_then(|i| self.fleets.get(i))
    }

    pub fn ground(&self, year: i32) -> Option<&GroundResult> {
        self.years.index_of(year).and_then(|i| self.gnds.get(i))
    }

    pub fn state(&self, year: i32) -> Option<&SimulationState> {
        self.years.index_of(year).and_then(|i| self.states.get(i))
    }
}

/// Runs a scenario from the base year to [`DEFAULT_END_YEAR`].
pub fn run_scenario(scenario: Scenario, base: &Params) -> ScenarioResult {
    run_scenario_over(scenario, base, YearIndex::default())
}

/// Parses the scenario name and runs it.
pub fn run_named_scenario(name: &str, base: &Params) -> Result<ScenarioResult, LcocError> {
    Ok(run_scenario(Scenario::from_str(name)?, base))
}

/// Runs a scenario over the provided years.
///
/// The first pass deploys the unconstrained fleet, without any orbital supply on the terrestrial
/// market, to locate the crossover year. The fleet tracker is then reset and the second pass
/// deploys the fleet with the crossover year, feeding its sold power back into the terrestrial
/// market. Finally the simulation state is walked through the years.
pub fn run_scenario_over(scenario: Scenario, base: &Params, years: YearIndex) -> ScenarioResult {
    let params = scenario.apply(base);

    let sats: Vec<PerShell<SatelliteResult>> = years
        .years()
        .map(|year| PerShell::from_fn(|shell| size_satellite(year, &params, shell)))
        .collect();

    // Pass 1: locate the crossover
    let mut tracker = FleetTracker::new();
    let mut crossover_year = None;
    let mut prepass = Vec::with_capacity(years.len());
    for (year, designs) in years.years().zip(&sats) {
        let fleet = size_fleet_with(year, None, &params, designs, &mut tracker);
        let ground = size_ground(year, 0.0, &params);
        let check = CrossoverCheck {
            year,
            lcoc_effective: fleet.lcoc_effective,
            market: ground.market,
        };
        if crossover_year.is_none() && check.orbital_wins() {
            info!(
                "{scenario} -- crossover in {year}: {:.3} $/GPU-hr in orbit \
                vs {:.3} $/GPU-hr on the ground",
                check.lcoc_effective, check.market
            );
            crossover_year = Some(year);
        }
        prepass.push(check);
    }
    if crossover_year.is_none() {
        info!("{scenario} -- no crossover by {}", years.end);
    }

    // Pass 2: deploy with the crossover
    tracker.reset();
    let mut fleets = Vec::with_capacity(years.len());
    let mut gnds = Vec::with_capacity(years.len());
    for (year, designs) in years.years().zip(&sats) {
        let fleet = size_fleet_with(year, crossover_year, &params, designs, &mut tracker);
        let ground = size_ground(year, fleet.total_power_gw * fleet.sellable_util, &params);
        fleets.push(fleet);
        gnds.push(ground);
    }

    let mut states = Vec::with_capacity(years.len());
    let mut state = SimulationState::initial(years.start - 1, &params);
    for (fleet, ground) in fleets.iter().zip(&gnds) {
        state = state.advance(fleet, ground, &params);
        states.push(state);
    }

    let lunar_unlock_year =
        lunar_unlock_year(states.iter().map(|state| (state.year, state.lunar_readiness)));
    if let Some(unlock) = lunar_unlock_year {
        info!("{scenario} -- lunar base unlocked in {unlock}");
    }

    ScenarioResult {
        scenario,
        params,
        years,
        sats,
        fleets,
        gnds,
        prepass,
        states,
        crossover_year,
        lunar_unlock_year,
    }
}

/// Runs every scenario in parallel. Each run owns its fleet tracker and simulation state.
pub fn run_all(base: &Params) -> Vec<ScenarioResult> {
    all::<Scenario>()
        .collect::<Vec<Scenario>>()
        .par_iter()
        .map(|scenario| run_scenario(*scenario, base))
        .collect()
}
