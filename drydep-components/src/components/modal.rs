//! Modal aerosol scheme
//!
//! Treats each particle as the geometric mean diameter of a log-normal mode
//! and returns moment-weighted velocities from the Gauss-Hermite model in
//! [`drydep_core::modal`]. The aerodynamic resistance comes from the
//! Monin-Obukhov profile at the reference height.

use drydep_core::errors::{DepositionError, DepositionResult};
use drydep_core::modal::{
    self, mode_deposition_velocity, sedimentation_velocity, AerosolMode, ConvectiveCorrection,
    ModalEnvironment, ModalVelocities, ModeKind, ModeVelocities, ReboundCorrection,
    GAUSS_HERMITE_7,
};
use drydep_core::scheme::{DepositionScheme, Particle, SurfaceConditions};
use drydep_core::seinfeld;
use drydep_core::wesely::GasProperty;
use drydep_core::FloatValue;
use log::debug;
use serde::{Deserialize, Serialize};

/// Moment of the size distribution a single velocity is weighted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MomentWeighting {
    Number,
    #[default]
    Mass,
}

impl MomentWeighting {
    fn select(self, velocities: ModeVelocities) -> FloatValue {
        match self {
            MomentWeighting::Number => velocities.number,
            MomentWeighting::Mass => velocities.mass,
        }
    }
}

/// Parameters for the modal aerosol scheme
///
/// Per-mode arrays are ordered nucleation, accumulation, coarse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalAerosolParameters {
    /// Mode used for single-particle queries
    pub mode: ModeKind,
    pub geometric_std_devs: [FloatValue; 3],
    pub rebound: [ReboundCorrection; 3],
    pub convective_correction: ConvectiveCorrection,
    pub weighting: MomentWeighting,
}

impl Default for ModalAerosolParameters {
    fn default() -> Self {
        Self {
            mode: ModeKind::Accumulation,
            geometric_std_devs: ModeKind::ALL.map(ModeKind::default_geometric_std_dev),
            rebound: ModeKind::ALL.map(ModeKind::rebound),
            convective_correction: ConvectiveCorrection::Disabled,
            weighting: MomentWeighting::Mass,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalAerosolScheme {
    parameters: ModalAerosolParameters,
}

impl ModalAerosolScheme {
    pub fn from_parameters(parameters: ModalAerosolParameters) -> Self {
        Self { parameters }
    }

    pub fn parameters(&self) -> &ModalAerosolParameters {
        &self.parameters
    }

    /// Near-surface state shared by all modes of a cell
    pub fn environment(&self, conditions: &SurfaceConditions) -> ModalEnvironment {
        let ra = seinfeld::aerodynamic_resistance(
            conditions.reference_height,
            conditions.roughness_length,
            conditions.friction_velocity,
            conditions.obukhov_length,
        );
        ModalEnvironment::new(
            conditions.temperature,
            conditions.pressure,
            conditions.air_density,
            conditions.friction_velocity,
            conditions.roughness_length,
            ra,
        )
        .with_convective_correction(
            self.parameters.convective_correction,
            conditions.boundary_layer_height,
            1.0 / conditions.obukhov_length,
        )
    }

    /// Build a mode with the configured width and rebound correction
    pub fn mode(
        &self,
        kind: ModeKind,
        geometric_mean_diameter: FloatValue,
        density: FloatValue,
        environment: &ModalEnvironment,
    ) -> DepositionResult<AerosolMode> {
        let i = kind.index();
        Ok(AerosolMode::new(
            kind,
            geometric_mean_diameter,
            self.parameters.geometric_std_devs[i],
            density,
            environment.mean_free_path,
        )?
        .with_rebound(self.parameters.rebound[i]))
    }

    /// Velocities of all three modes of a cell
    pub fn velocities(
        &self,
        conditions: &SurfaceConditions,
        diameters: [FloatValue; 3],
        density: FloatValue,
    ) -> DepositionResult<ModalVelocities> {
        let environment = self.environment(conditions);
        let modes = [
            self.mode(ModeKind::Nucleation, diameters[0], density, &environment)?,
            self.mode(ModeKind::Accumulation, diameters[1], density, &environment)?,
            self.mode(ModeKind::Coarse, diameters[2], density, &environment)?,
        ];
        Ok(modal::modal_velocities(&modes, &environment))
    }
}

#[typetag::serde]
impl DepositionScheme for ModalAerosolScheme {
    fn gas_deposition_velocity(
        &self,
        _conditions: &SurfaceConditions,
        gas: &GasProperty,
    ) -> DepositionResult<FloatValue> {
        debug!("Rejected gas {:?} in the modal aerosol scheme", gas);
        Err(DepositionError::Error(
            "The modal aerosol scheme only deposits particles".to_string(),
        ))
    }

    fn particle_deposition_velocity(
        &self,
        conditions: &SurfaceConditions,
        particle: &Particle,
    ) -> DepositionResult<FloatValue> {
        let environment = self.environment(conditions);
        let mode = self.mode(
            self.parameters.mode,
            particle.diameter,
            particle.density,
            &environment,
        )?;
        let velocities = mode_deposition_velocity(&mode, &environment, &GAUSS_HERMITE_7);
        Ok(self.parameters.weighting.select(velocities))
    }

    fn settling_velocity(
        &self,
        conditions: &SurfaceConditions,
        particle: &Particle,
    ) -> DepositionResult<FloatValue> {
        let environment = self.environment(conditions);
        let mode = self.mode(
            self.parameters.mode,
            particle.diameter,
            particle.density,
            &environment,
        )?;
        let velocities = sedimentation_velocity(&mode, environment.dynamic_viscosity);
        Ok(self.parameters.weighting.select(velocities))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drydep_core::wesely::gases;

    #[test]
    fn test_default_parameters_follow_mode_kinds() {
        let parameters = ModalAerosolParameters::default();
        assert_eq!(parameters.geometric_std_devs, [1.7, 2.0, 2.5]);
        assert_eq!(parameters.rebound[2], ReboundCorrection::Slinn);
        assert_eq!(parameters.rebound[0], ReboundCorrection::Fixed(1.0));
    }

    #[test]
    fn test_gas_rejected() {
        let scheme = ModalAerosolScheme::default();
        assert!(scheme
            .gas_deposition_velocity(&SurfaceConditions::default(), &gases::O3)
            .is_err());
    }

    #[test]
    fn test_invalid_diameter_rejected() {
        let scheme = ModalAerosolScheme::default();
        let particle = Particle::new(-1.0e-6, 1500.0);
        assert!(scheme
            .particle_deposition_velocity(&SurfaceConditions::default(), &particle)
            .is_err());
    }

    #[test]
    fn test_particle_matches_all_mode_result() {
        let scheme = ModalAerosolScheme::default();
        let conditions = SurfaceConditions::default();
        let all = scheme
            .velocities(&conditions, [0.01e-6, 0.3e-6, 2.0e-6], 1500.0)
            .unwrap();
        let particle = Particle::new(0.3e-6, 1500.0);
        assert_eq!(
            scheme
                .particle_deposition_velocity(&conditions, &particle)
                .unwrap(),
            all.deposition[1].mass
        );
        assert_eq!(
            scheme.settling_velocity(&conditions, &particle).unwrap(),
            all.sedimentation[1].mass
        );
    }

    #[test]
    fn test_number_weighting_below_mass() {
        let number = ModalAerosolScheme::from_parameters(ModalAerosolParameters {
            weighting: MomentWeighting::Number,
            ..Default::default()
        });
        let mass = ModalAerosolScheme::default();
        let conditions = SurfaceConditions::default();
        let particle = Particle::new(1.0e-6, 2000.0);
        assert!(
            number.settling_velocity(&conditions, &particle).unwrap()
                < mass.settling_velocity(&conditions, &particle).unwrap()
        );
    }

    #[test]
    fn test_convective_correction_enhances_deposition() {
        let conditions = SurfaceConditions {
            obukhov_length: -20.0,
            boundary_layer_height: 1000.0,
            ..Default::default()
        };
        let particle = Particle::new(0.3e-6, 1500.0);
        let plain = ModalAerosolScheme::default()
            .particle_deposition_velocity(&conditions, &particle)
            .unwrap();
        let convective = ModalAerosolScheme::from_parameters(ModalAerosolParameters {
            convective_correction: ConvectiveCorrection::Wesely1985,
            ..Default::default()
        })
        .particle_deposition_velocity(&conditions, &particle)
        .unwrap();
        assert!(convective > plain);
    }
}
