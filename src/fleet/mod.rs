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
use serde::{Deserialize, Serialize};

use crate::market::demand_gw;
use crate::orbital::{PerShell, Shell};
use crate::params::Params;
use crate::physics::{bw_available_gbps, bw_per_tflop, launch_capacity};
use crate::reliability::addressable_fraction;
use crate::satellite::{size_satellite, SatelliteResult};

mod bottleneck;
mod launch;
mod targets;

pub use bottleneck::{Bottleneck, ConstraintRatios, BANDWIDTH_OVERRIDE};
pub use launch::{allocate_launches, LaunchPlan};
pub use targets::{eligible_share, fleet_targets, scale_protect_leo, FleetTargets};

/// Deployed fleet carried from one year to the next.
///
/// Built platforms cannot be unbuilt, so each year's fleet is floored by the survivors of the
/// previous year. A tracker belongs to a single scenario run and must be reset before each
/// independent run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FleetTracker {
    /// Deployed mass per shell (kg)
    pub mass_kg: PerShell<f64>,
    /// Deployed platforms per shell
    pub count: PerShell<f64>,
    pub cumulative_mass_kg: f64,
    pub cumulative_flights: f64,
}

impl FleetTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets the whole deployed fleet.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Platforms surviving this year's attrition, counting what was deployed last year both by mass
    /// and by count.
    pub fn survivors(&self, shell: Shell, replacement_rate: f64, dry_mass_kg: f64) -> f64 {
        let survival = 1.0 - replacement_rate;
        let by_mass = self.mass_kg[shell] * survival / dry_mass_kg.max(1.0);
        let by_count = self.count[shell] * survival;
        by_mass.max(by_count)
    }
}

/// The deployed fleet in one year.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FleetResult {
    pub year: i32,
    pub crossover_year: Option<i32>,
    /// Platforms per shell
    pub counts: PerShell<f64>,
    /// Platform count targets before any constraint
    pub targets: PerShell<f64>,
    /// Bus power per shell (GW)
    pub power_gw: PerShell<f64>,
    pub total_power_gw: f64,
    /// Sellable compute of the fleet (TFLOPS)
    pub tflops: f64,
    pub bw_need_gbps: f64,
    pub bw_available_gbps: f64,
    /// Fraction of the compute that the available bandwidth can monetize
    pub bw_sell: f64,
    pub eligible_demand_gw: f64,
    /// Fraction of the compute the eligible demand absorbs
    pub demand_sell: f64,
    /// Lesser of the bandwidth and demand sellable fractions
    pub sellable_util: f64,
    /// GPU-hour weighted production cost ($/GPU-hr)
    pub lcoc_production: f64,
    /// Delivered cost, the production cost over the sellable fraction ($/GPU-hr)
    pub lcoc_effective: f64,
    pub bottleneck: Bottleneck,
    pub ratios: ConstraintRatios,
    pub replacement_rate: PerShell<f64>,
    pub launch: LaunchPlan,
    pub max_flights: f64,
    pub cumulative_mass_kg: f64,
    pub cumulative_flights: f64,
}

impl FleetResult {
    pub fn total_platforms(&self) -> f64 {
        self.counts.sum()
    }
}

/// Sizes the platforms of every shell and deploys the fleet. See [`size_fleet_with`].
pub fn size_fleet(
    year: i32,
    crossover: Option<i32>,
    params: &Params,
    tracker: &mut FleetTracker,
) -> FleetResult {
    let sats = PerShell::from_fn(|shell| size_satellite(year, params, shell));
    size_fleet_with(year, crossover, params, &sats, tracker)
}

/// Deploys the fleet of one year with the provided platform designs, and updates the tracker for
/// next year.
///
/// The unconstrained targets are scaled down to fit the available bandwidth and then the eligible
/// demand, cutting the other shells before LEO. They are floored by the survivors of last year's
/// fleet, and the launches are fitted within the launch capacity. The delivered cost divides the
/// production cost by the fraction of the compute that can actually be sold.
pub fn size_fleet_with(
    year: i32,
    crossover: Option<i32>,
    params: &Params,
    sats: &PerShell<SatelliteResult>,
    tracker: &mut FleetTracker,
) -> FleetResult {
    let targets = fleet_targets(year, crossover, params, sats);

    // Bandwidth
    let bwpt = bw_per_tflop(year, params);
    let bw_each = sats.map(|_, sat| sat.tflops * bwpt * sat.power_source.bandwidth_factor());
    let bw_available = bw_available_gbps(year, params);
    let bw_fit = scale_protect_leo(&targets.counts, &bw_each, bw_available);
    if bw_fit != targets.counts {
        debug!("{year}: bandwidth binds the fleet targets");
    }

    // Demand, weighted by the share of the market each shell may address
    let eligible_demand_gw = demand_gw(year, params) * eligible_share(sats.leo.lcoc);
    let power_each = sats.map(|_, sat| sat.power_kw / 1e6);
    let demand_each = sats.map(|shell, sat| {
        power_each[shell] / addressable_fraction(shell.spec().rtt_ms, sat.sla).max(1e-9)
    });
    let demand_fit = scale_protect_leo(&bw_fit, &demand_each, eligible_demand_gw);
    if demand_fit != bw_fit {
        debug!("{year}: demand binds the fleet targets");
    }

    // Monotonic fleet
    let replacement_rate = sats.map(|_, sat| sat.radiation.replacement_rate);
    let survivors = PerShell::from_fn(|shell| {
        tracker.survivors(shell, replacement_rate[shell], sats[shell].dry_mass_kg)
    });
    let wanted = demand_fit.map(|shell, count| count.max(survivors[shell]));
    let replacements = PerShell::from_fn(|shell| {
        (wanted[shell].min(tracker.count[shell]) - survivors[shell]).max(0.0)
    });
    let growth = PerShell::from_fn(|shell| {
        (wanted[shell] - tracker.count[shell].max(survivors[shell])).max(0.0)
    });

    // Launch capacity
    let capacity = launch_capacity(year, params);
    let from_earth =
        PerShell::from_fn(|shell| !(shell == Shell::Cislunar && year >= params.lunar_isru_year));
    let dry = sats.map(|_, sat| sat.dry_mass_kg);
    let launch = allocate_launches(replacements, growth, &dry, &from_earth, &capacity);

    let counts = PerShell::from_fn(|shell| {
        survivors[shell] + launch.replacements[shell] + launch.growth[shell]
    });

    let power_gw = counts.map(|shell, count| count * power_each[shell]);
    let total_power_gw = power_gw.sum();
    let tflops = counts.map(|shell, count| count * sats[shell].tflops).sum();
    let bw_need_gbps = counts.map(|shell, count| count * bw_each[shell]).sum();
    let demand_need_gw = counts.map(|shell, count| count * demand_each[shell]).sum();

    let bw_sell = if bw_need_gbps > 0.0 {
        (bw_available / bw_need_gbps).min(1.0)
    } else {
        1.0
    };
    let demand_sell = if demand_need_gw > 0.0 {
        (eligible_demand_gw / demand_need_gw).min(1.0)
    } else {
        1.0
    };
    let sellable_util = bw_sell.min(demand_sell);

    let gpu_hours = counts.map(|shell, count| count * sats[shell].gpu_equivalents);
    let lcoc_production = if gpu_hours.sum() > 0.0 {
        gpu_hours.map(|shell, hours| hours * sats[shell].lcoc).sum() / gpu_hours.sum()
    } else {
        sats.leo.lcoc
    };
    let lcoc_effective = lcoc_production / sellable_util.max(1e-6);

    let unconstrained_need = |each: &PerShell<f64>| {
        targets
            .counts
            .map(|shell, count| count * each[shell])
            .sum()
    };
    let ratio = |available: f64, need: f64| {
        if need > 0.0 {
            available / need
        } else {
            f64::INFINITY
        }
    };
    let ratios = ConstraintRatios {
        thermal: sats.leo.margins.thermal,
        launch: launch.capacity_ratio(&capacity),
        bandwidth: ratio(bw_available, unconstrained_need(&bw_each)),
        demand: ratio(eligible_demand_gw, unconstrained_need(&demand_each)),
        slots: ratio(
            Shell::Leo.max_platforms(sats.leo.dry_mass_kg),
            targets.leo_uncapped,
        ),
    };
    let bottleneck = ratios.bottleneck(bw_sell);

    for shell in all::<Shell>() {
        tracker.mass_kg[shell] = counts[shell] * sats[shell].dry_mass_kg;
        tracker.count[shell] = counts[shell];
    }
    tracker.cumulative_mass_kg += launch.launched_mass_kg;
    tracker.cumulative_flights += launch.flights;

    FleetResult {
        year,
        crossover_year: crossover,
        counts,
        targets: targets.counts,
        power_gw,
        total_power_gw,
        tflops,
        bw_need_gbps,
        bw_available_gbps: bw_available,
        bw_sell,
        eligible_demand_gw,
        demand_sell,
        sellable_util,
        lcoc_production,
        lcoc_effective,
        bottleneck,
        ratios,
        replacement_rate,
        launch,
        max_flights: capacity.max_flights,
        cumulative_mass_kg: tracker.cumulative_mass_kg,
        cumulative_flights: tracker.cumulative_flights,
    }
}
