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
use serde::{Deserialize, Serialize};

use crate::finance::HOURS_PER_YEAR;
use crate::orbital::{shell_radiation_effects, RadiationEffects, Shell};
use crate::params::Params;
use crate::physics::{
    bw_per_tflop, cots_blend, ground_efficiency, max_platform_rate_gbps, net_flux, net_flux_at,
    radiator_area, radiator_props, shell_launch_cost, terminal_count, terminal_rate_gbps,
};
use crate::reliability::effective_uptime;

mod cost;
mod power;
mod solver;

pub use cost::{reactor_maturity, AnnualCost, CostBreakdown};
pub use power::{power_source, size_power_system, PowerSource, PowerSystem, FUSION_RADIATOR_TEMP_K};
pub use solver::{ClosureSolution, MassClosure, TERMINAL_MASS_KG};

use cost::{annual_cost, platform_costs, Design};
use solver::ClosureProblem;

/// Structure mass as a fraction of the subsystem masses.
const STRUCTURE_FRAC: f64 = 0.12;
/// Propellant and propulsion as a fraction of the wet mass.
const PROPULSION_FRAC: f64 = 0.05;
/// Shielding of commercial parts per kW of compute, for a unit TID multiplier (kg/kW).
const SHIELD_KG_PER_KW: f64 = 1.5;
/// Designs which cannot cool at least this much compute are not viable (kW).
const MIN_VIABLE_COMPUTE_KW: f64 = 1.0;
/// Energy spent per kg delivered to orbit, propellant production included (kWh/kg).
const LAUNCH_ENERGY_KWH_PER_KG: f64 = 55.6;
/// Launch emissions per kg delivered to LEO (kg CO2/kg).
const LAUNCH_CO2_PER_KG: f64 = 50.0;
/// Manufacturing emissions per kg of platform (kg CO2/kg).
const MANUFACTURING_CO2_PER_KG: f64 = 30.0;

/// Dry mass of a platform by subsystem (kg).
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MassBreakdown {
    /// Solar arrays or reactor
    pub power: f64,
    pub battery: f64,
    pub compute: f64,
    /// Compute radiator
    pub radiator: f64,
    /// Separate heat rejection loop of a fusion plant
    pub plant_radiator: f64,
    pub shield: f64,
    pub structure: f64,
    pub comms: f64,
    pub avionics: f64,
    /// Attitude determination and control
    pub adcs: f64,
    pub propulsion: f64,
}

impl MassBreakdown {
    fn subsystems(&self) -> f64 {
        self.power
            + self.battery
            + self.compute
            + self.shield
            + self.comms
            + self.avionics
            + self.adcs
            + self.radiator
            + self.plant_radiator
    }

    /// Recomputes the structure and propulsion from the other subsystems.
    pub fn with_structure(mut self) -> Self {
        let subsystems = self.subsystems();
        self.structure = STRUCTURE_FRAC * subsystems;
        self.propulsion = PROPULSION_FRAC * (subsystems + self.structure) / (1.0 - PROPULSION_FRAC);
        self
    }

    /// Avionics, attitude control, comms and propulsion
    pub fn other(&self) -> f64 {
        self.comms + self.avionics + self.adcs + self.propulsion
    }

    pub fn dry(&self) -> f64 {
        self.subsystems() + self.structure + self.propulsion
    }
}

/// The constraint limiting the delivered compute of a platform.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Binding {
    Power,
    Thermal,
    Comms,
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Power => write!(f, "power"),
            Self::Thermal => write!(f, "thermal"),
            Self::Comms => write!(f, "comms"),
        }
    }
}

/// Ratios of each limit to the power budget: below one means that limit binds.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    /// Thermal limit over the compute power budget
    pub thermal: f64,
    /// Maximum downlink rate over the rate needed by the delivered compute
    pub comms: f64,
}

/// Why a design is not physically viable. The clipped design is still reported.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DesignIssue {
    /// The radiator budget cannot cool a meaningful amount of compute
    ThermalCollapse { compute_kw: f64 },
}

impl fmt::Display for DesignIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ThermalCollapse { compute_kw } => write!(
                f,
                "thermal limit collapses compute to {compute_kw:.3} kW \
                (minimum {MIN_VIABLE_COMPUTE_KW} kW)"
            ),
        }
    }
}

/// A platform design in one shell and year.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SatelliteResult {
    pub year: i32,
    pub shell: Shell,
    pub power_source: PowerSource,
    /// Bus power (kW)
    pub power_kw: f64,
    /// Power budget of the compute (kW)
    pub power_limit_kw: f64,
    /// Compute the radiator budget can cool (kW)
    pub thermal_limit_kw: f64,
    /// Allocated compute power (kW)
    pub compute_kw: f64,
    pub mass: MassBreakdown,
    pub dry_mass_kg: f64,
    pub radiator_area_m2: f64,
    pub plant_radiator_area_m2: f64,
    /// Compute before the radiation penalties (TFLOPS)
    pub raw_tflops: f64,
    /// Sellable compute (TFLOPS)
    pub tflops: f64,
    /// Number of GPU equivalents, each one produces one GPU-hour per hour
    pub gpu_equivalents: f64,
    pub data_rate_gbps: f64,
    pub terminals: u32,
    pub binding: Binding,
    pub margins: Margins,
    pub radiation: RadiationEffects,
    pub cots_blend: f64,
    pub costs: CostBreakdown,
    pub capex: f64,
    pub annual: AnnualCost,
    /// Effective uptime of the jobs on this platform
    pub sla: f64,
    /// Levelized cost of compute ($/GPU-hr), assuming all of the capacity is sold
    pub lcoc: f64,
    /// Lifetime generated energy over the energy spent launching the platform
    pub energy_return_on_launch: f64,
    /// Embodied emissions per unit of compute (kg CO2 per TFLOPS-year)
    pub carbon_per_tflop: f64,
    pub invalid_reason: Option<DesignIssue>,
    pub closure: ClosureSolution,
}

impl SatelliteResult {
    pub fn is_valid(&self) -> bool {
        self.invalid_reason.is_none()
    }
}

/// Sizes a platform with the default mass closure. See [`size_satellite_with`].
pub fn size_satellite(year: i32, params: &Params, shell: Shell) -> SatelliteResult {
    size_satellite_with(year, params, shell, &MassClosure::default())
}

/// Sizes the physically consistent platform for the provided shell and year.
///
/// The power system is sized first, then the mass closure allocates compute power under the
/// radiator budget. A fusion plant rejects its own heat through a separate loop. Radiation
/// penalties are applied to the raw compute, the downlink may clip it further, and the capex is
/// annualized over the radiation driven lifetime.
pub fn size_satellite_with(
    year: i32,
    params: &Params,
    shell: Shell,
    closure: &MassClosure,
) -> SatelliteResult {
    let power = size_power_system(shell, year, params);
    let power_limit_kw = power.power_kw * params.compute_frac;

    let props = radiator_props(year, params);
    let flux = net_flux(year, shell, params);
    let blend = cots_blend(year, shell, params);
    let efficiency = ground_efficiency(year, params);
    let bwpt = bw_per_tflop(year, params);
    let max_rate_gbps = max_platform_rate_gbps(year, params);

    let problem = ClosureProblem {
        fixed: MassBreakdown {
            power: power.mass_kg,
            battery: power.battery_kg,
            avionics: 50.0 + 0.5 * power.power_kw,
            adcs: 30.0 + 0.3 * power.power_kw,
            ..Default::default()
        },
        power_limit_kw,
        compute_kg_per_kw: params.compute_kg_per_kw,
        shield_kg_per_kw: blend * SHIELD_KG_PER_KW * shell.spec().tid_mult,
        net_flux: flux,
        areal_density: props.areal_density,
        waste_heat_frac: params.waste_heat_frac,
        radiator_mass_frac: params.radiator_mass_frac,
        rate_per_kw: efficiency * bwpt,
        max_rate_gbps,
        terminal_rate_gbps: terminal_rate_gbps(year, params),
        max_terminals: params.max_terminals,
    };
    let sol = closure.solve(&problem);

    // The fusion plant radiator runs hot and does not eat into the compute radiator budget
    let plant_heat_kw = power.plant_waste_heat_kw();
    let plant_radiator_area_m2 = if plant_heat_kw > 0.0 {
        radiator_area(
            plant_heat_kw,
            net_flux_at(FUSION_RADIATOR_TEMP_K, shell, params),
        )
    } else {
        0.0
    };
    let mass = MassBreakdown {
        plant_radiator: plant_radiator_area_m2 * props.areal_density,
        ..problem.mass(sol.compute_kw, sol.radiator_kg, sol.terminals)
    }
    .with_structure();
    let dry_mass_kg = mass.dry();

    let radiation = shell_radiation_effects(shell, year, params);
    let raw_tflops = sol.compute_kw * efficiency;
    let mut tflops = raw_tflops * (1.0 - params.rad_pen) * radiation.availability;
    let mut data_rate_gbps = tflops * bwpt;

    let margins = Margins {
        thermal: sol.thermal_limit_kw / power_limit_kw.max(1e-9),
        comms: max_rate_gbps / data_rate_gbps.max(1e-9),
    };
    let binding = if margins.comms < 1.0 && margins.comms < margins.thermal {
        tflops *= margins.comms;
        data_rate_gbps = max_rate_gbps;
        Binding::Comms
    } else if margins.thermal < 1.0 {
        Binding::Thermal
    } else {
        Binding::Power
    };
    let gpu_equivalents = tflops / params.gpu_equiv_tflops;

    let design = Design {
        year,
        power: &power,
        mass: &mass,
        radiator_area_m2: sol.radiator_area_m2,
        plant_radiator_area_m2,
        cots_blend: blend,
        terminals: terminal_count(data_rate_gbps, year, params),
        data_rate_gbps,
        launch_cost_per_kg: shell_launch_cost(year, shell, params),
    };
    let costs = platform_costs(&design, params);
    let annual = annual_cost(&costs, &design, radiation.lifetime_years, params);

    let sla = effective_uptime(
        params.orbital_mtbf_hours,
        params.checkpoint_hours,
        params.orbital_restart_hours,
    );
    let lcoc = annual.total() / (gpu_equivalents * HOURS_PER_YEAR * sla).max(1e-9);

    let invalid_reason = if sol.compute_kw < MIN_VIABLE_COMPUTE_KW {
        let issue = DesignIssue::ThermalCollapse {
            compute_kw: sol.compute_kw,
        };
        warn!("{shell} platform in {year} is not viable: {issue}");
        Some(issue)
    } else {
        None
    };

    let lifetime_energy_kwh = power.power_kw * HOURS_PER_YEAR * radiation.lifetime_years;
    let energy_return_on_launch =
        lifetime_energy_kwh / (dry_mass_kg * LAUNCH_ENERGY_KWH_PER_KG).max(1e-9);
    let embodied_co2 = (LAUNCH_CO2_PER_KG * shell.spec().launch_mult + MANUFACTURING_CO2_PER_KG)
        * dry_mass_kg;
    let carbon_per_tflop = embodied_co2 / (tflops * radiation.lifetime_years).max(1e-9);

    SatelliteResult {
        year,
        shell,
        power_source: power.source,
        power_kw: power.power_kw,
        power_limit_kw,
        thermal_limit_kw: sol.thermal_limit_kw,
        compute_kw: sol.compute_kw,
        mass,
        dry_mass_kg,
        radiator_area_m2: sol.radiator_area_m2,
        plant_radiator_area_m2,
        raw_tflops,
        tflops,
        gpu_equivalents,
        data_rate_gbps,
        terminals: design.terminals,
        binding,
        margins,
        radiation,
        cots_blend: blend,
        capex: costs.capex(),
        costs,
        annual,
        sla,
        lcoc,
        energy_return_on_launch,
        carbon_per_tflop,
        invalid_reason,
        closure: sol,
    }
}
