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
use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::Params;
use crate::errors::{LcocError, UnknownParameterSnafu};

/// Numeric parameters which may be dispersed in a Monte Carlo run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Sequence, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKey {
    /// Annual AI hardware efficiency learning rate
    AiLearn,
    /// Radiation hardening efficiency penalty
    RadPen,
    /// Design life of a platform (years)
    SatLife,
    /// Base year launch cost ($/kg)
    LaunchCost,
    LaunchLearn,
    LaunchFloor,
    ProdMult,
    WaccOrbital,
    WaccGround,
    /// Radiator emissivity
    Emissivity,
    /// Radiator areal density before the thermal breakthrough (kg/m²)
    RadiatorArealDensity,
    /// Radiator mass fraction of the dry mass
    RadiatorMassFrac,
    /// Solar cell efficiency
    SolarEff,
    /// Base year space-to-ground bandwidth (Tbps)
    BwBaseTbps,
    BwGrowth,
    /// Base year AI demand (GW)
    DemandGw,
    DemandGrowth,
    SupplyGrowth,
    /// Grid electricity price ($/kWh)
    GridPrice,
    /// Thermal breakthrough year, rounded to the nearest year when set
    ThermalYear,
    FissionYear,
    FusionYear,
    StarshipYear,
}

impl ParamKey {
    /// Returns the unit of this parameter, as a string
    pub const fn unit(&self) -> &'static str {
        match self {
            Self::SatLife => "yr",
            Self::LaunchCost | Self::LaunchFloor => "$/kg",
            Self::RadiatorArealDensity => "kg/m^2",
            Self::BwBaseTbps => "Tbps",
            Self::DemandGw => "GW",
            Self::GridPrice => "$/kWh",
            Self::ThermalYear | Self::FissionYear | Self::FusionYear | Self::StarshipYear => "year",
            _ => "",
        }
    }

    /// Physical domain of this parameter: dispersed values are clamped to it.
    pub const fn bounds(&self) -> (f64, f64) {
        match self {
            Self::AiLearn
            | Self::LaunchLearn
            | Self::BwGrowth
            | Self::DemandGrowth
            | Self::SupplyGrowth => (0.0, 0.95),
            Self::RadPen => (0.0, 0.9),
            Self::WaccOrbital | Self::WaccGround => (0.0, 0.5),
            Self::Emissivity | Self::SolarEff | Self::RadiatorMassFrac => (0.01, 1.0),
            Self::SatLife => (0.5, 30.0),
            Self::LaunchCost | Self::LaunchFloor => (1.0, 1e5),
            Self::ProdMult => (0.1, 10.0),
            Self::RadiatorArealDensity => (0.1, 50.0),
            Self::BwBaseTbps => (0.1, 1e6),
            Self::DemandGw => (0.1, 1e4),
            Self::GridPrice => (1e-3, 1.0),
            Self::ThermalYear | Self::FissionYear | Self::FusionYear | Self::StarshipYear => {
                (2026.0, 2100.0)
            }
        }
    }

    /// Whether this parameter is a calendar year.
    pub const fn is_year(&self) -> bool {
        matches!(
            self,
            Self::ThermalYear | Self::FissionYear | Self::FusionYear | Self::StarshipYear
        )
    }
}

impl FromStr for ParamKey {
    type Err = LcocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ai_learn" => Ok(Self::AiLearn),
            "rad_pen" => Ok(Self::RadPen),
            "sat_life" => Ok(Self::SatLife),
            "launch_cost" => Ok(Self::LaunchCost),
            "launch_learn" => Ok(Self::LaunchLearn),
            "launch_floor" => Ok(Self::LaunchFloor),
            "prod_mult" => Ok(Self::ProdMult),
            "wacc_orbital" => Ok(Self::WaccOrbital),
            "wacc_ground" => Ok(Self::WaccGround),
            "emissivity" => Ok(Self::Emissivity),
            "radiator_areal_density" => Ok(Self::RadiatorArealDensity),
            "radiator_mass_frac" => Ok(Self::RadiatorMassFrac),
            "solar_eff" => Ok(Self::SolarEff),
            "bw_base_tbps" => Ok(Self::BwBaseTbps),
            "bw_growth" => Ok(Self::BwGrowth),
            "demand_gw" => Ok(Self::DemandGw),
            "demand_growth" => Ok(Self::DemandGrowth),
            "supply_growth" => Ok(Self::SupplyGrowth),
            "grid_price" => Ok(Self::GridPrice),
            "thermal_year" => Ok(Self::ThermalYear),
            "fission_year" => Ok(Self::FissionYear),
            "fusion_year" => Ok(Self::FusionYear),
            "starship_year" => Ok(Self::StarshipYear),
            _ => UnknownParameterSnafu { name: s.to_string() }.fail(),
        }
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::AiLearn => "ai_learn",
            Self::RadPen => "rad_pen",
            Self::SatLife => "sat_life",
            Self::LaunchCost => "launch_cost",
            Self::LaunchLearn => "launch_learn",
            Self::LaunchFloor => "launch_floor",
            Self::ProdMult => "prod_mult",
            Self::WaccOrbital => "wacc_orbital",
            Self::WaccGround => "wacc_ground",
            Self::Emissivity => "emissivity",
            Self::RadiatorArealDensity => "radiator_areal_density",
            Self::RadiatorMassFrac => "radiator_mass_frac",
            Self::SolarEff => "solar_eff",
            Self::BwBaseTbps => "bw_base_tbps",
            Self::BwGrowth => "bw_growth",
            Self::DemandGw => "demand_gw",
            Self::DemandGrowth => "demand_growth",
            Self::SupplyGrowth => "supply_growth",
            Self::GridPrice => "grid_price",
            Self::ThermalYear => "thermal_year",
            Self::FissionYear => "fission_year",
            Self::FusionYear => "fusion_year",
            Self::StarshipYear => "starship_year",
        };
        let unit = if self.unit().is_empty() {
            String::new()
        } else {
            format!(" ({})", self.unit())
        };
        write!(f, "{repr}{unit}")
    }
}

impl Params {
    /// Returns the value of the requested parameter
    pub fn value(&self, key: ParamKey) -> f64 {
        match key {
            ParamKey::AiLearn => self.ai_learn,
            ParamKey::RadPen => self.rad_pen,
            ParamKey::SatLife => self.sat_life,
            ParamKey::LaunchCost => self.launch_cost,
            ParamKey::LaunchLearn => self.launch_learn,
            ParamKey::LaunchFloor => self.launch_floor,
            ParamKey::ProdMult => self.prod_mult,
            ParamKey::WaccOrbital => self.wacc_orbital,
            ParamKey::WaccGround => self.wacc_ground,
            ParamKey::Emissivity => self.emissivity,
            ParamKey::RadiatorArealDensity => self.radiator_areal_density,
            ParamKey::RadiatorMassFrac => self.radiator_mass_frac,
            ParamKey::SolarEff => self.solar_eff,
            ParamKey::BwBaseTbps => self.bw_base_tbps,
            ParamKey::BwGrowth => self.bw_growth,
            ParamKey::DemandGw => self.demand_gw,
            ParamKey::DemandGrowth => self.demand_growth,
            ParamKey::SupplyGrowth => self.supply_growth,
            ParamKey::GridPrice => self.grid_price,
            ParamKey::ThermalYear => f64::from(self.thermal_year),
            ParamKey::FissionYear => f64::from(self.fission_year),
            ParamKey::FusionYear => f64::from(self.fusion_year),
            ParamKey::StarshipYear => f64::from(self.starship_year),
        }
    }

    /// Sets the requested parameter; calendar years are rounded to the nearest year.
    pub fn set_value(&mut self, key: ParamKey, val: f64) {
        let year = val.round() as i32;
        match key {
            ParamKey::AiLearn => self.ai_learn = val,
            ParamKey::RadPen => self.rad_pen = val,
            ParamKey::SatLife => self.sat_life = val,
            ParamKey::LaunchCost => self.launch_cost = val,
            ParamKey::LaunchLearn => self.launch_learn = val,
            ParamKey::LaunchFloor => self.launch_floor = val,
            ParamKey::ProdMult => self.prod_mult = val,
            ParamKey::WaccOrbital => self.wacc_orbital = val,
            ParamKey::WaccGround => self.wacc_ground = val,
            ParamKey::Emissivity => self.emissivity = val,
            ParamKey::RadiatorArealDensity => self.radiator_areal_density = val,
            ParamKey::RadiatorMassFrac => self.radiator_mass_frac = val,
            ParamKey::SolarEff => self.solar_eff = val,
            ParamKey::BwBaseTbps => self.bw_base_tbps = val,
            ParamKey::BwGrowth => self.bw_growth = val,
            ParamKey::DemandGw => self.demand_gw = val,
            ParamKey::DemandGrowth => self.demand_growth = val,
            ParamKey::SupplyGrowth => self.supply_growth = val,
            ParamKey::GridPrice => self.grid_price = val,
            ParamKey::ThermalYear => self.thermal_year = year,
            ParamKey::FissionYear => self.fission_year = year,
            ParamKey::FusionYear => self.fusion_year = year,
            ParamKey::StarshipYear => self.starship_year = year,
        }
    }
}
