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

use super::{Distribution, Normal, ParamDispersion, ParamKey};
use crate::errors::{DispersionSnafu, LcocError};
use crate::Params;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Samples parameter sets by dispersing selected values of a template.
#[derive(Clone, Debug)]
pub struct Generator<Distr: Distribution<f64> + Copy> {
    pub template: Params,
    pub dispersions: Vec<(ParamKey, Distr)>,
}

/// Alias for the Gaussian generator, the only one which can be built from a dispersion
/// configuration.
pub type GaussianGenerator = Generator<Normal<f64>>;

/// A sampled parameter set and the offset actually applied to each dispersed value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DispersedParams {
    pub params: Params,
    pub actual_dispersions: Vec<(ParamKey, f64)>,
}

impl<D: Distribution<f64> + Copy> Generator<D> {
    pub fn add_dispersion(&mut self, param: ParamKey, dispersion: D) -> Result<(), LcocError> {
        let value = self.template.value(param);
        if !value.is_finite() {
            return DispersionSnafu {
                param,
                reason: format!("template value is {value}"),
            }
            .fail();
        }
        self.dispersions.push((param, dispersion));
        Ok(())
    }

    pub fn from_dispersions(
        template: Params,
        dispersions: &[(ParamKey, D)],
    ) -> Result<Self, LcocError> {
        let mut me: Self = template.into();
        for (param, dispersion) in dispersions {
            me.add_dispersion(*param, *dispersion)?;
        }
        Ok(me)
    }
}

impl<D: Distribution<f64> + Copy> From<Params> for Generator<D> {
    fn from(template: Params) -> Self {
        Self {
            template,
            dispersions: Vec::new(),
        }
    }
}

fn normal(param: ParamKey, mean: f64, std_dev: f64) -> Result<Normal<f64>, LcocError> {
    Normal::new(mean, std_dev).map_err(|e| LcocError::Dispersion {
        param,
        reason: e.to_string(),
    })
}

impl Generator<Normal<f64>> {
    pub fn add_3σ(&mut self, param: ParamKey, three_sigma: f64) -> Result<(), LcocError> {
        self.add_1σ(param, three_sigma / 3.0)
    }

    pub fn add_1σ(&mut self, param: ParamKey, std_dev: f64) -> Result<(), LcocError> {
        let dispersion = normal(param, 0.0, std_dev)?;
        self.add_dispersion(param, dispersion)
    }

    pub fn from_3σs(
        template: Params,
        three_sigmas: &[(ParamKey, f64)],
    ) -> Result<Self, LcocError> {
        let mut me: Self = template.into();
        for (param, three_sigma) in three_sigmas {
            me.add_3σ(*param, *three_sigma)?;
        }
        Ok(me)
    }

    pub fn from_1σs(template: Params, std_devs: &[(ParamKey, f64)]) -> Result<Self, LcocError> {
        let mut me: Self = template.into();
        for (param, std_dev) in std_devs {
            me.add_1σ(*param, *std_dev)?;
        }
        Ok(me)
    }

    /// Disperses each parameter with a standard deviation given as a fraction of its template
    /// value.
    pub fn from_1σs_prcts(template: Params, prcts: &[(ParamKey, f64)]) -> Result<Self, LcocError> {
        let std_devs: Vec<(ParamKey, f64)> = prcts
            .iter()
            .map(|(param, prct)| (*param, template.value(*param).abs() * prct))
            .collect();
        let mut me: Self = template.into();
        for (param, std_dev) in std_devs {
            me.add_1σ(param, std_dev)?;
        }
        Ok(me)
    }

    pub fn from_dispersion_cfgs(
        template: Params,
        cfgs: &[ParamDispersion],
    ) -> Result<Self, LcocError> {
        let mut me: Self = template.into();
        for cfg in cfgs {
            let dispersion = normal(
                cfg.param,
                cfg.mean.unwrap_or(0.0),
                cfg.std_dev.unwrap_or(0.0),
            )?;
            me.add_dispersion(cfg.param, dispersion)?;
        }
        Ok(me)
    }
}

impl<D: Distribution<f64> + Copy> Distribution<DispersedParams> for Generator<D> {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> DispersedParams {
        let mut params = self.template.clone();
        let mut actual_dispersions = Vec::with_capacity(self.dispersions.len());
        for (param, dispersion) in &self.dispersions {
            let (lower, upper) = param.bounds();
            let nominal = params.value(*param);
            let dispersed = (nominal + dispersion.sample(rng)).clamp(lower, upper);
            params.set_value(*param, dispersed);
            // Years are rounded when set
            actual_dispersions.push((*param, params.value(*param) - nominal));
        }

        DispersedParams {
            params,
            actual_dispersions,
        }
    }
}
