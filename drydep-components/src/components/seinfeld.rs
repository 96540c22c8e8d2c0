//! Kinetic-theory resistance scheme
//!
//! Gases use the Wesely (1989) surface resistance behind a Monin-Obukhov
//! aerodynamic resistance; particles use the Zhang et al. (2001) collection
//! efficiencies. Both follow Seinfeld & Pandis (2006), chapter 19.

use drydep_core::errors::DepositionResult;
use drydep_core::particle;
use drydep_core::scheme::{DepositionScheme, Particle, SurfaceConditions};
use drydep_core::seinfeld;
use drydep_core::wesely::{GasProperty, SpeciesClass};
use drydep_core::zhang::ZhangLandUse;
use drydep_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Parameters for the Seinfeld & Pandis scheme
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeinfeldParameters {
    /// Collector category used for particles
    ///
    /// If not set, the category is mapped from the Wesely land use of each
    /// cell.
    pub zhang_land_use: Option<ZhangLandUse>,
    /// Treat every gas as an interpolated species, even SO2 and O3
    pub interpolate_all_species: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeinfeldScheme {
    parameters: SeinfeldParameters,
}

impl SeinfeldScheme {
    pub fn from_parameters(parameters: SeinfeldParameters) -> Self {
        Self { parameters }
    }

    pub fn parameters(&self) -> &SeinfeldParameters {
        &self.parameters
    }

    fn collector(&self, conditions: &SurfaceConditions) -> ZhangLandUse {
        self.parameters
            .zhang_land_use
            .unwrap_or_else(|| ZhangLandUse::from(conditions.land_use))
    }

    fn species_class(&self, gas: &GasProperty) -> SpeciesClass {
        if self.parameters.interpolate_all_species {
            SpeciesClass::Other
        } else {
            SpeciesClass::for_gas(gas)
        }
    }
}

#[typetag::serde]
impl DepositionScheme for SeinfeldScheme {
    fn gas_deposition_velocity(
        &self,
        conditions: &SurfaceConditions,
        gas: &GasProperty,
    ) -> DepositionResult<FloatValue> {
        Ok(seinfeld::dry_dep_gas(
            conditions.reference_height,
            conditions.roughness_length,
            conditions.friction_velocity,
            conditions.obukhov_length,
            conditions.temperature,
            conditions.air_density,
            conditions.solar_radiation,
            conditions.slope,
            gas,
            conditions.season,
            conditions.land_use,
            conditions.wetness,
            self.species_class(gas),
        ))
    }

    fn particle_deposition_velocity(
        &self,
        conditions: &SurfaceConditions,
        particle: &Particle,
    ) -> DepositionResult<FloatValue> {
        Ok(seinfeld::dry_dep_particle(
            conditions.reference_height,
            conditions.roughness_length,
            conditions.friction_velocity,
            conditions.obukhov_length,
            particle.diameter,
            conditions.temperature,
            conditions.pressure,
            particle.density,
            conditions.air_density,
            conditions.season,
            self.collector(conditions),
        ))
    }

    fn settling_velocity(
        &self,
        conditions: &SurfaceConditions,
        particle: &Particle,
    ) -> DepositionResult<FloatValue> {
        let t = conditions.temperature;
        let slip = particle::slip_correction(
            particle.diameter,
            particle::mean_free_path(t, conditions.pressure),
        );
        Ok(particle::settling_velocity(
            particle.diameter,
            particle.density,
            slip,
            particle::dynamic_viscosity(t),
        ))
    }
}
