//! Selectable deposition parameterizations
//!
//! A [`DepositionScheme`] maps the state of a surface cell to deposition and
//! settling velocities. Schemes are serialisable trait objects so that the
//! choice of parameterization can be made in configuration.

use crate::categories::{LandUse, Season};
use crate::constants::STANDARD_PRESSURE;
use crate::errors::DepositionResult;
use crate::gocart::DepositionSurface;
use crate::wesely::{GasProperty, SurfaceWetness};
use crate::FloatValue;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Meteorological and surface state of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConditions {
    /// Near-surface air temperature
    /// unit: K
    pub temperature: FloatValue,
    /// unit: Pa
    pub pressure: FloatValue,
    /// unit: kg/m^3
    pub air_density: FloatValue,
    /// unit: m/s
    pub friction_velocity: FloatValue,
    /// Negative for unstable, positive for stable conditions
    /// unit: m
    pub obukhov_length: FloatValue,
    /// unit: m
    pub boundary_layer_height: FloatValue,
    /// unit: m
    pub roughness_length: FloatValue,
    /// Height at which the deposition velocity applies
    /// unit: m
    pub reference_height: FloatValue,
    /// unit: W/m^2
    pub solar_radiation: FloatValue,
    /// unit: radians
    pub slope: FloatValue,
    pub season: Season,
    pub land_use: LandUse,
    pub wetness: SurfaceWetness,
    pub surface: DepositionSurface,
}

impl Default for SurfaceConditions {
    /// A neutral midsummer afternoon over grassland
    fn default() -> Self {
        Self {
            temperature: 298.0,
            pressure: STANDARD_PRESSURE,
            air_density: 1.2,
            friction_velocity: 0.3,
            obukhov_length: 1.0e5,
            boundary_layer_height: 1000.0,
            roughness_length: 0.1,
            reference_height: 10.0,
            solar_radiation: 500.0,
            slope: 0.0,
            season: Season::Midsummer,
            land_use: LandUse::Range,
            wetness: SurfaceWetness::Dry,
            surface: DepositionSurface::Land,
        }
    }
}

/// A single particle size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// unit: m
    pub diameter: FloatValue,
    /// unit: kg/m^3
    pub density: FloatValue,
}

impl Particle {
    pub fn new(diameter: FloatValue, density: FloatValue) -> Self {
        Self { diameter, density }
    }

    pub fn radius(&self) -> FloatValue {
        self.diameter / 2.0
    }
}

/// A deposition parameterization
#[typetag::serde(tag = "type")]
pub trait DepositionScheme: Debug + Send + Sync {
    /// Dry deposition velocity of a gas (m/s)
    fn gas_deposition_velocity(
        &self,
        conditions: &SurfaceConditions,
        gas: &GasProperty,
    ) -> DepositionResult<FloatValue>;

    /// Dry deposition velocity of a particle, including settling (m/s)
    fn particle_deposition_velocity(
        &self,
        conditions: &SurfaceConditions,
        particle: &Particle,
    ) -> DepositionResult<FloatValue>;

    /// Gravitational settling velocity of a particle (m/s)
    fn settling_velocity(
        &self,
        conditions: &SurfaceConditions,
        particle: &Particle,
    ) -> DepositionResult<FloatValue>;
}
