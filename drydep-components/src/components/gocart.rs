//! GOCART bulk resistance scheme
//!
//! Gas and particle deposition from the simplified resistance model adopted
//! by WRF/Chem GOCART. Surface properties enter only through the roughness
//! length; season, land use and wetness are ignored.

use drydep_core::errors::DepositionResult;
use drydep_core::gocart;
use drydep_core::particle;
use drydep_core::scheme::{DepositionScheme, Particle, SurfaceConditions};
use drydep_core::wesely::GasProperty;
use drydep_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Derivation of the gravitational settling velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettlingFormula {
    /// Slip-corrected viscosity with the GOCART free-path approximation
    #[default]
    Gocart,
    /// Sutherland viscosity and kinetic mean free path (Seinfeld & Pandis, 2006)
    Kinetic,
}

/// Parameters for the GOCART scheme
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GocartParameters {
    pub settling: SettlingFormula,
}

/// Simplified resistance-in-series deposition
///
/// $$v_d = \frac{1}{R_a + R_b + R_s}$$ for gases and
/// $$v_d = \frac{1}{R_a + R_s + R_a R_s v_s} + v_s$$ for particles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GocartScheme {
    parameters: GocartParameters,
}

impl GocartScheme {
    pub fn from_parameters(parameters: GocartParameters) -> Self {
        Self { parameters }
    }

    pub fn parameters(&self) -> &GocartParameters {
        &self.parameters
    }

    fn settling(&self, conditions: &SurfaceConditions, particle: &Particle) -> FloatValue {
        let (t, p) = (conditions.temperature, conditions.pressure);
        match self.parameters.settling {
            SettlingFormula::Gocart => {
                gocart::settling_velocity(particle.radius(), particle.density, t, p)
            }
            SettlingFormula::Kinetic => {
                let slip =
                    particle::slip_correction(particle.diameter, particle::mean_free_path(t, p));
                particle::settling_velocity(
                    particle.diameter,
                    particle.density,
                    slip,
                    particle::dynamic_viscosity(t),
                )
            }
        }
    }
}

#[typetag::serde]
impl DepositionScheme for GocartScheme {
    fn gas_deposition_velocity(
        &self,
        conditions: &SurfaceConditions,
        gas: &GasProperty,
    ) -> DepositionResult<FloatValue> {
        Ok(gocart::gas_deposition_velocity(
            conditions.obukhov_length,
            conditions.friction_velocity,
            conditions.boundary_layer_height,
            conditions.roughness_length,
            gas.diffusivity_ratio,
            conditions.surface,
        ))
    }

    fn particle_deposition_velocity(
        &self,
        conditions: &SurfaceConditions,
        particle: &Particle,
    ) -> DepositionResult<FloatValue> {
        Ok(gocart::particle_deposition_velocity_with_settling(
            conditions.obukhov_length,
            conditions.friction_velocity,
            conditions.boundary_layer_height,
            conditions.roughness_length,
            self.settling(conditions, particle),
        ))
    }

    fn settling_velocity(
        &self,
        conditions: &SurfaceConditions,
        particle: &Particle,
    ) -> DepositionResult<FloatValue> {
        Ok(self.settling(conditions, particle))
    }
}
