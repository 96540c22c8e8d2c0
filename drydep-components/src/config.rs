//! TOML configuration of a deposition calculation
//!
//! A configuration selects a scheme by its type name and optionally sets the
//! surface conditions it is evaluated at:
//!
//! ```toml
//! [scheme]
//! type = "SeinfeldScheme"
//!
//! [scheme.parameters]
//! zhang_land_use = "grass"
//!
//! [conditions]
//! temperature = 285.0
//! season = "autumn"
//! ```
//!
//! Missing parameters and conditions take their default values.

use drydep_core::errors::{DepositionError, DepositionResult};
use drydep_core::scheme::{DepositionScheme, Particle, SurfaceConditions};
use drydep_core::wesely::GasProperty;
use drydep_core::FloatValue;
use log::info;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct DepositionConfig {
    pub scheme: Box<dyn DepositionScheme>,
    #[serde(default)]
    pub conditions: SurfaceConditions,
}

impl DepositionConfig {
    pub fn new(scheme: Box<dyn DepositionScheme>, conditions: SurfaceConditions) -> Self {
        Self { scheme, conditions }
    }

    pub fn from_toml_str(text: &str) -> DepositionResult<Self> {
        let config: DepositionConfig = toml::from_str(text)
            .map_err(|e| DepositionError::InvalidConfiguration(e.to_string()))?;
        info!("Loaded deposition configuration using {:?}", config.scheme);
        Ok(config)
    }

    pub fn to_toml_string(&self) -> DepositionResult<String> {
        toml::to_string(self).map_err(|e| DepositionError::InvalidConfiguration(e.to_string()))
    }

    /// Deposition velocity of a named gas at the configured conditions (m/s)
    pub fn gas_deposition_velocity(&self, gas: &str) -> DepositionResult<FloatValue> {
        let gas = GasProperty::from_name(gas)?;
        self.scheme.gas_deposition_velocity(&self.conditions, &gas)
    }

    /// Deposition velocity of a particle at the configured conditions (m/s)
    pub fn particle_deposition_velocity(
        &self,
        particle: &Particle,
    ) -> DepositionResult<FloatValue> {
        self.scheme
            .particle_deposition_velocity(&self.conditions, particle)
    }

    /// Settling velocity of a particle at the configured conditions (m/s)
    pub fn settling_velocity(&self, particle: &Particle) -> DepositionResult<FloatValue> {
        self.scheme.settling_velocity(&self.conditions, particle)
    }
}
