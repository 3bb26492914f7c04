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

use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};
use std::fmt;
use typed_builder::TypedBuilder;

use crate::io::{ConfigError, ConfigRepr};

mod key;
pub use key::ParamKey;

/// First simulated year; every array in a [`crate::ScenarioResult`] is indexed from here.
pub const BASE_YEAR: i32 = 2026;

/// Technologies with an unlock year. A technology is active when its flag is set and the year is
/// reached.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Sequence, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tech {
    /// High temperature, low areal density radiators
    Thermal,
    Fission,
    Fusion,
    /// Small modular reactors for terrestrial datacenters
    Smr,
    /// Thermodynamic (probabilistic) compute
    Thermodynamic,
    Photonic,
    /// Fully reusable heavy lift launch
    Starship,
}

impl fmt::Display for Tech {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Thermal => "thermal",
            Self::Fission => "fission",
            Self::Fusion => "fusion",
            Self::Smr => "SMR",
            Self::Thermodynamic => "thermodynamic compute",
            Self::Photonic => "photonic compute",
            Self::Starship => "Starship-class launch",
        };
        write!(f, "{name}")
    }
}

/// All of the tunable inputs of the simulation.
///
/// The defaults set on the builder are the single source of truth: [`Params::default`] builds from
/// them, and a YAML file only needs to list the fields it overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[builder(doc)]
#[serde(default)]
pub struct Params {
    // Technology unlocks
    #[builder(default = true)]
    pub thermal_enabled: bool,
    #[builder(default = 2030)]
    pub thermal_year: i32,
    #[builder(default = true)]
    pub fission_enabled: bool,
    #[builder(default = 2034)]
    pub fission_year: i32,
    #[builder(default = true)]
    pub fusion_enabled: bool,
    #[builder(default = 2045)]
    pub fusion_year: i32,
    #[builder(default = true)]
    pub smr_enabled: bool,
    #[builder(default = 2032)]
    pub smr_year: i32,
    #[builder(default = true)]
    pub thermo_enabled: bool,
    #[builder(default = 2038)]
    pub thermo_year: i32,
    #[builder(default = true)]
    pub photonic_enabled: bool,
    #[builder(default = 2036)]
    pub photonic_year: i32,
    #[builder(default = true)]
    pub starship_enabled: bool,
    #[builder(default = 2027)]
    pub starship_year: i32,

    // Thermal and radiative
    /// Radiator emissivity (no unit)
    #[builder(default = 0.9)]
    pub emissivity: f64,
    /// Radiator operating temperature before the thermal breakthrough (K)
    #[builder(default = 340.0)]
    pub op_temp_k: f64,
    /// Radiator operating temperature after the thermal breakthrough (K)
    #[builder(default = 480.0)]
    pub thermal_op_temp_k: f64,
    /// Radiator areal density before the thermal breakthrough (kg/m²)
    #[builder(default = 5.0)]
    pub radiator_areal_density: f64,
    /// Radiator areal density after the thermal breakthrough (kg/m²)
    #[builder(default = 1.2)]
    pub thermal_areal_density: f64,
    /// Fraction of compute power rejected as heat by the compute radiator
    #[builder(default = 0.95)]
    pub waste_heat_frac: f64,
    /// Solar absorptivity of the radiator coating
    #[builder(default = 0.2)]
    pub solar_absorptivity: f64,
    /// Earth albedo
    #[builder(default = 0.3)]
    pub albedo: f64,
    /// Earth infrared flux (W/m²)
    #[builder(default = 237.0)]
    pub earth_ir_flux: f64,
    /// Fraction of a LEO orbit spent in eclipse
    #[builder(default = 0.1)]
    pub eclipse_frac: f64,
    /// Cap on the radiator mass as a fraction of the estimated dry mass
    #[builder(default = 0.3)]
    pub radiator_mass_frac: f64,

    // Power
    /// Solar cell efficiency
    #[builder(default = 0.3)]
    pub solar_eff: f64,
    /// Solar array areal density (kg/m²)
    #[builder(default = 2.0)]
    pub solar_areal_density: f64,
    #[builder(default = 250.0)]
    pub battery_wh_per_kg: f64,
    /// Battery sizing margin over the eclipse energy
    #[builder(default = 1.3)]
    pub battery_headroom: f64,
    /// Solar platform power in the base year (kW)
    #[builder(default = 100.0)]
    pub base_power_kw: f64,
    /// Annual growth of the platform power budget
    #[builder(default = 0.15)]
    pub power_growth: f64,
    #[builder(default = 5_000.0)]
    pub max_solar_power_kw: f64,
    /// Fission power system specific power (W/kg)
    #[builder(default = 50.0)]
    pub fission_w_per_kg: f64,
    /// Fusion power system specific power (W/kg)
    #[builder(default = 150.0)]
    pub fusion_w_per_kg: f64,
    /// Nuclear platform power at unlock (kW)
    #[builder(default = 10_000.0)]
    pub nuclear_power_kw: f64,
    /// Fraction of the bus power available to compute
    #[builder(default = 0.85)]
    pub compute_frac: f64,

    // Compute
    /// Terrestrial compute efficiency in the base year (GFLOPS/W)
    #[builder(default = 1_000.0)]
    pub gflops_w: f64,
    /// Annual AI hardware efficiency learning rate
    #[builder(default = 0.15)]
    pub ai_learn: f64,
    /// Coupling between demand pressure and the learning rate
    #[builder(default = 0.2)]
    pub learn_coupling: f64,
    /// Efficiency penalty of radiation hardening
    #[builder(default = 0.15)]
    pub rad_pen: f64,
    /// Design life of a platform (years)
    #[builder(default = 6.0)]
    pub sat_life: f64,
    /// Optional economic obsolescence cap on the effective life (years), uncapped when unset
    #[builder(default, setter(strip_option))]
    pub max_life: Option<f64>,
    /// Compute of one GPU-hour equivalent (TFLOPS)
    #[builder(default = 1_000.0)]
    pub gpu_equiv_tflops: f64,
    #[builder(default = 6.0)]
    pub compute_kg_per_kw: f64,
    /// Availability lost to single event upsets for a unit SEU multiplier
    #[builder(default = 0.05)]
    pub seu_base_overhead: f64,
    /// Annual improvement of radiation hardening
    #[builder(default = 0.05)]
    pub rad_improve: f64,

    // Economics
    /// LEO launch cost in the base year ($/kg)
    #[builder(default = 1_500.0)]
    pub launch_cost: f64,
    /// Annual launch cost learning rate
    #[builder(default = 0.12)]
    pub launch_learn: f64,
    /// Launch cost floor ($/kg)
    #[builder(default = 20.0)]
    pub launch_floor: f64,
    /// Launch cost multiplier once Starship-class launch is available
    #[builder(default = 0.35)]
    pub starship_factor: f64,
    /// Production cost multiplier on all platform hardware
    #[builder(default = 1.0)]
    pub prod_mult: f64,
    /// Annual hardware cost learning rate
    #[builder(default = 0.05)]
    pub hw_learn: f64,
    /// Annual maintenance as a fraction of capex
    #[builder(default = 0.03)]
    pub maint_frac: f64,
    #[builder(default = 0.10)]
    pub wacc_orbital: f64,
    #[builder(default = 0.08)]
    pub wacc_ground: f64,

    // Bandwidth
    /// Total space-to-ground bandwidth in the base year (Tbps)
    #[builder(default = 100.0)]
    pub bw_base_tbps: f64,
    #[builder(default = 0.35)]
    pub bw_growth: f64,
    /// Goodput of one optical terminal in the base year (Gbps)
    #[builder(default = 100.0)]
    pub terminal_gbps: f64,
    #[builder(default = 0.25)]
    pub terminal_growth: f64,
    #[builder(default = 8)]
    pub max_terminals: u32,
    #[builder(default = 0.2)]
    pub protocol_overhead: f64,
    /// Backhaul cost ($/Gbps/year)
    #[builder(default = 20_000.0)]
    pub bw_cost_gbps_yr: f64,
    /// Annual decline of the backhaul cost
    #[builder(default = 0.20)]
    pub bw_learn: f64,
    /// Annual shrink of the bandwidth needed per TFLOP
    #[builder(default = 0.05)]
    pub bw_shrink: f64,

    // Market
    /// AI compute demand in 2025 (GW)
    #[builder(default = 15.0)]
    pub demand_gw: f64,
    #[builder(default = 0.30)]
    pub demand_growth: f64,
    /// Grid-connected datacenter supply in 2025 (GW)
    #[builder(default = 12.0)]
    pub supply_gw: f64,
    #[builder(default = 0.12)]
    pub supply_growth: f64,

    // Behind the meter
    /// Behind-the-meter share of terrestrial supply in 2025
    #[builder(default = 0.1)]
    pub btm_share: f64,
    #[builder(default = 0.5)]
    pub btm_max_share: f64,
    /// Grid interconnection queue (years)
    #[builder(default = 4.0)]
    pub grid_delay_years: f64,
    /// Grid electricity price ($/kWh)
    #[builder(default = 0.08)]
    pub grid_price: f64,
    /// Behind-the-meter electricity price ($/kWh)
    #[builder(default = 0.12)]
    pub btm_price: f64,

    // Token economics
    #[builder(default = 1.4e11)]
    pub flops_per_token: f64,
    /// Bytes moved to and from orbit per token, context included
    #[builder(default = 2_000.0)]
    pub bytes_per_token: f64,

    // Ground datacenter
    /// Accelerator and server cost per kW of IT load in the base year ($/kW)
    #[builder(default = 30_000.0)]
    pub gpu_cost_per_kw: f64,
    #[builder(default = 3_000.0)]
    pub gpu_cost_floor_per_kw: f64,
    /// Server and networking overhead on the accelerator cost
    #[builder(default = 1.5)]
    pub server_overhead: f64,
    #[builder(default = 5.0)]
    pub gpu_life: f64,
    #[builder(default = 1.3)]
    pub pue: f64,
    #[builder(default = 1.1)]
    pub pue_floor: f64,
    /// Building and electrical plant per kW ($/kW)
    #[builder(default = 10_000.0)]
    pub facility_cost_per_kw: f64,
    #[builder(default = 0.7)]
    pub utilization: f64,

    // Reliability
    #[builder(default = 8_760.0)]
    pub ground_mtbf_hours: f64,
    #[builder(default = 4_380.0)]
    pub orbital_mtbf_hours: f64,
    /// Time to write one checkpoint (hours)
    #[builder(default = 0.05)]
    pub checkpoint_hours: f64,
    #[builder(default = 0.25)]
    pub ground_restart_hours: f64,
    #[builder(default = 0.5)]
    pub orbital_restart_hours: f64,
    /// Uptime promised to ground customers, shortfalls are paid for with redundancy
    #[builder(default = 0.999)]
    pub sla_target: f64,

    // Fleet
    /// LEO platforms flown before the crossover year
    #[builder(default = 10.0)]
    pub pre_crossover_platforms: f64,
    /// LEO platforms flown in the crossover year
    #[builder(default = 100.0)]
    pub leo_seed_platforms: f64,
    #[builder(default = 1.0)]
    pub fleet_doubling_years: f64,
    /// Year from which cislunar platforms are built from lunar resources
    #[builder(default = 2045)]
    pub lunar_isru_year: i32,
}

impl Default for Params {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ConfigRepr for Params {}

impl Params {
    /// Loads the parameters from a YAML file and rejects non-finite values.
    ///
    /// Out of range values are accepted: only the dispersed parameters are clamped, in
    /// [`crate::mc`].
    pub fn from_yaml<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let me = Self::load(path)?;
        me.validate()?;
        Ok(me)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_finite = enum_iterator::all::<ParamKey>().find(|key| !self.value(*key).is_finite());
        if let Some(key) = non_finite {
            return Err(ConfigError::InvalidConfig {
                msg: format!("{key} is {}", self.value(key)),
            });
        }
        if let Some(max_life) = self.max_life.filter(|life| !(life.is_finite() && *life > 0.0)) {
            return Err(ConfigError::InvalidConfig {
                msg: format!("max_life is {max_life}"),
            });
        }
        if self.max_terminals == 0 {
            return Err(ConfigError::InvalidConfig {
                msg: "a platform needs at least one terminal".to_string(),
            });
        }
        Ok(())
    }

    /// Returns whether the technology is enabled and unlocked by the provided year.
    pub fn unlocked(&self, tech: Tech, year: i32) -> bool {
        let (enabled, unlock) = self.tech(tech);
        enabled && year >= unlock
    }

    /// Returns the unlock year of this technology if it is enabled.
    pub fn unlock_year(&self, tech: Tech) -> Option<i32> {
        let (enabled, unlock) = self.tech(tech);
        enabled.then_some(unlock)
    }

    fn tech(&self, tech: Tech) -> (bool, i32) {
        match tech {
            Tech::Thermal => (self.thermal_enabled, self.thermal_year),
            Tech::Fission => (self.fission_enabled, self.fission_year),
            Tech::Fusion => (self.fusion_enabled, self.fusion_year),
            Tech::Smr => (self.smr_enabled, self.smr_year),
            Tech::Thermodynamic => (self.thermo_enabled, self.thermo_year),
            Tech::Photonic => (self.photonic_enabled, self.photonic_year),
            Tech::Starship => (self.starship_enabled, self.starship_year),
        }
    }

    /// Shifts the unlock year of a technology.
    pub(crate) fn shift_unlock(&mut self, tech: Tech, years: i32) {
        match tech {
            Tech::Thermal => self.thermal_year += years,
            Tech::Fission => self.fission_year += years,
            Tech::Fusion => self.fusion_year += years,
            Tech::Smr => self.smr_year += years,
            Tech::Thermodynamic => self.thermo_year += years,
            Tech::Photonic => self.photonic_year += years,
            Tech::Starship => self.starship_year += years,
        }
    }
}

/// Number of whole years elapsed since the base year, never negative.
pub fn years_since_base(year: i32) -> i32 {
    (year - BASE_YEAR).max(0)
}
