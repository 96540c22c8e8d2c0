//! Size-averaged dry deposition of a log-normal mode
//!
//! For each quadrature diameter $D_q$ the surface collection efficiency is
//! the sum of Brownian diffusion $Sc^{-2/3}$, impaction
//! $(St/(0.8 + St))^2$ (Peters & Eiden, 1992) and interception
//! $(0.00116 + 0.0061 z_0) D_q / 1.414 \times 10^{-7}$ (McKeen, 2008),
//! scaled by the rebound correction. The resulting surface conductance is
//! limited to [`MAX_SURFACE_CONDUCTANCE`] before being combined in series
//! with the aerodynamic resistance and in parallel with settling.

use super::mode::AerosolMode;
use super::quadrature::QuadratureRule;
use super::{
    made_dynamic_viscosity, made_mean_free_path, ModeVelocities, BOLTZMANN, COLLECTOR_DIAMETER,
    GRAVITY,
};
use crate::FloatValue;
use log::debug;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Upper bound on the surface-to-air conductance
/// unit: m/s
pub const MAX_SURFACE_CONDUCTANCE: FloatValue = 0.02;

/// Wesely (1985) convective enhancement of the transfer velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConvectiveCorrection {
    #[default]
    Disabled,
    Wesely1985,
}

impl ConvectiveCorrection {
    /// Multiplier applied to the friction velocity
    ///
    /// Under unstable conditions ($1/L < 0$), with $c = -h/L$:
    /// $0.45 c^{2/3}$ when $c > 30$, otherwise $1 + (-300/L)^{2/3}$.
    pub fn scale(
        &self,
        boundary_layer_height: FloatValue,
        inverse_obukhov_length: FloatValue,
    ) -> FloatValue {
        match self {
            ConvectiveCorrection::Disabled => 1.0,
            ConvectiveCorrection::Wesely1985 if inverse_obukhov_length < 0.0 => {
                let czh = -boundary_layer_height * inverse_obukhov_length;
                if czh > 30.0 {
                    0.45 * czh.powf(0.6667)
                } else {
                    1.0 + (-300.0 * inverse_obukhov_length).powf(0.6667)
                }
            }
            ConvectiveCorrection::Wesely1985 => 1.0,
        }
    }
}

/// Near-surface state shared by all modes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModalEnvironment {
    /// unit: K
    pub temperature: FloatValue,
    /// unit: kg/m^3
    pub air_density: FloatValue,
    /// unit: kg/(m s)
    pub dynamic_viscosity: FloatValue,
    /// unit: m
    pub mean_free_path: FloatValue,
    /// unit: m/s
    pub friction_velocity: FloatValue,
    /// unit: m
    pub roughness_length: FloatValue,
    /// unit: s/m
    pub aerodynamic_resistance: FloatValue,
    /// Friction velocity scaled by any convective correction
    /// unit: m/s
    pub utility_velocity: FloatValue,
}

impl ModalEnvironment {
    /// Build the environment from temperature (K) and pressure (Pa)
    ///
    /// The utility velocity defaults to the friction velocity.
    pub fn new(
        temperature: FloatValue,
        pressure: FloatValue,
        air_density: FloatValue,
        friction_velocity: FloatValue,
        roughness_length: FloatValue,
        aerodynamic_resistance: FloatValue,
    ) -> Self {
        Self {
            temperature,
            air_density,
            dynamic_viscosity: made_dynamic_viscosity(temperature),
            mean_free_path: made_mean_free_path(temperature, pressure),
            friction_velocity,
            roughness_length,
            aerodynamic_resistance,
            utility_velocity: friction_velocity,
        }
    }

    /// Apply a convective correction to the utility velocity
    pub fn with_convective_correction(
        mut self,
        correction: ConvectiveCorrection,
        boundary_layer_height: FloatValue,
        inverse_obukhov_length: FloatValue,
    ) -> Self {
        self.utility_velocity = self.friction_velocity
            * correction.scale(boundary_layer_height, inverse_obukhov_length);
        self
    }

    pub fn kinematic_viscosity(&self) -> FloatValue {
        self.dynamic_viscosity / self.air_density
    }
}

/// Terms of the deposition velocity at a single diameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointDeposition {
    /// unit: m/s
    pub settling_velocity: FloatValue,
    /// Surface conductance after the upper limit is applied
    /// unit: m/s
    pub surface_conductance: FloatValue,
    /// unit: m/s
    pub deposition_velocity: FloatValue,
}

/// Deposition velocity terms for one diameter of a mode
pub fn point_deposition(
    mode: &AerosolMode,
    environment: &ModalEnvironment,
    diameter: FloatValue,
) -> PointDeposition {
    let mu = environment.dynamic_viscosity;

    let knudsen = 2.0 * environment.mean_free_path / diameter;
    let slip = 1.0 + knudsen * (1.257 + 0.4 * (-1.1 / knudsen).exp());
    let settling_velocity = mode.density * GRAVITY / (18.0 * mu) * slip * diameter.powi(2);

    let diffusion_constant = BOLTZMANN * environment.temperature / (3.0 * PI * mu);
    let schmidt = environment.kinematic_viscosity() * diameter / diffusion_constant / slip;
    let diffusion = schmidt.powf(-2.0 / 3.0);

    let stokes = environment.friction_velocity / (9.0 * mu * COLLECTOR_DIAMETER)
        * mode.density
        * diameter.powi(2);
    let impaction = (stokes / (0.8 + stokes)).powi(2);

    let mut interception = (0.00116 + 0.0061 * environment.roughness_length) * diameter / 1.414e-7;
    if let Some(cap) = mode.interception_cap {
        interception = interception.min(cap);
    }

    let rebound = mode.rebound.factor(stokes);
    let surface_conductance =
        (environment.utility_velocity * (diffusion + impaction + interception) * rebound)
            .min(MAX_SURFACE_CONDUCTANCE);
    let surface_resistance = environment.aerodynamic_resistance + 1.0 / surface_conductance;

    PointDeposition {
        settling_velocity,
        surface_conductance,
        deposition_velocity: settling_velocity + 1.0 / surface_resistance,
    }
}

/// Number and mass weighted deposition velocities of a mode
///
/// $$v_{d,0} = \frac{1}{\sqrt{\pi}} \sum_n w_n v_d(D_n)$$
///
/// $$v_{d,3} = \frac{\sum_n w_n v_d(D_n) D_n^3}{\sqrt{\pi}\, \exp\left((1.5\sqrt{2}\ln\sigma_g)^2\right) D_g^3}$$
pub fn mode_deposition_velocity<const N: usize>(
    mode: &AerosolMode,
    environment: &ModalEnvironment,
    rule: &QuadratureRule<N>,
) -> ModeVelocities {
    let mut sum_0 = 0.0;
    let mut sum_3 = 0.0;
    let mut limited = 0;
    for (&y, &w) in rule.abscissae.iter().zip(rule.weights.iter()) {
        let diameter = mode.diameter_at(y);
        let point = point_deposition(mode, environment, diameter);
        if point.surface_conductance >= MAX_SURFACE_CONDUCTANCE {
            limited += 1;
        }
        sum_0 += w * point.deposition_velocity;
        sum_3 += w * point.deposition_velocity * diameter.powi(3);
    }
    if limited > 0 {
        debug!(
            "{:?} mode surface conductance limited at {} of {} quadrature points",
            mode.kind, limited, N
        );
    }

    ModeVelocities {
        number: sum_0 / PI.sqrt(),
        mass: mass_normalization(mode, sum_3),
    }
}

/// Normalise a third-moment quadrature sum by the analytic third moment
pub fn mass_normalization(mode: &AerosolMode, third_moment_sum: FloatValue) -> FloatValue {
    third_moment_sum
        / (PI.sqrt() * mode.third_moment_factor() * mode.geometric_mean_diameter.powi(3))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modal::mode::{ModeKind, ReboundCorrection};
    use crate::modal::quadrature::GAUSS_HERMITE_7;
    use approx::assert_relative_eq;

    fn environment() -> ModalEnvironment {
        ModalEnvironment::new(298.0, 101_325.0, 1.2, 0.3, 0.1, 30.0)
    }

    fn mode(kind: ModeKind, diameter: FloatValue, sigma: FloatValue) -> AerosolMode {
        AerosolMode::new(kind, diameter, sigma, 1500.0, environment().mean_free_path).unwrap()
    }

    /// Trapezoidal integral of $e^{-y^2} f(y)$ over a wide finite range
    fn trapezoid<F: Fn(FloatValue) -> FloatValue>(f: F) -> FloatValue {
        let (a, b, n) = (-8.0, 8.0, 4000);
        let h = (b - a) / n as FloatValue;
        (0..=n)
            .map(|i| {
                let y = a + i as FloatValue * h;
                let weight = if i == 0 || i == n { 0.5 } else { 1.0 };
                weight * (-y * y).exp() * f(y)
            })
            .sum::<FloatValue>()
            * h
    }

    #[test]
    fn test_quadrature_matches_finite_difference_integration() {
        let env = environment();
        for m in [
            mode(ModeKind::Accumulation, 0.3e-6, 2.0),
            mode(ModeKind::Nucleation, 0.02e-6, 1.7),
            mode(ModeKind::Coarse, 1.0e-6, 2.0),
        ] {
            let quadrature = mode_deposition_velocity(&m, &env, &GAUSS_HERMITE_7).number;
            let reference = trapezoid(|y| {
                point_deposition(&m, &env, m.diameter_at(y)).deposition_velocity
            }) / PI.sqrt();
            assert_relative_eq!(quadrature, reference, max_relative = 0.01);
        }
    }

    #[test]
    fn test_conductance_limit_inactive_for_accumulation() {
        let env = environment();
        let m = mode(ModeKind::Accumulation, 0.3e-6, 2.0);
        for &y in GAUSS_HERMITE_7.abscissae.iter() {
            let point = point_deposition(&m, &env, m.diameter_at(y));
            assert!(point.surface_conductance < MAX_SURFACE_CONDUCTANCE);
        }
    }

    #[test]
    fn test_conductance_limit() {
        let env = environment();
        // Ultrafine particles diffuse fast enough to reach the limit
        let m = mode(ModeKind::Nucleation, 0.002e-6, 1.7);
        let point = point_deposition(&m, &env, m.geometric_mean_diameter);
        assert_eq!(point.surface_conductance, MAX_SURFACE_CONDUCTANCE);
        assert_relative_eq!(
            point.deposition_velocity,
            point.settling_velocity + 1.0 / (30.0 + 1.0 / MAX_SURFACE_CONDUCTANCE)
        );
    }

    #[test]
    fn test_rebound_reduces_coarse_deposition() {
        let env = environment();
        let coarse = mode(ModeKind::Coarse, 5.0e-6, 2.5);
        let without = coarse.with_rebound(ReboundCorrection::Fixed(1.0));
        let d = 5.0e-6;
        assert!(
            point_deposition(&coarse, &env, d).surface_conductance
                < point_deposition(&without, &env, d).surface_conductance
        );
    }

    #[test]
    fn test_interception_cap() {
        // Rough surface and light wind keep the conductance below its limit
        let env = ModalEnvironment::new(298.0, 101_325.0, 1.2, 0.01, 2.0, 30.0);
        let coarse =
            mode(ModeKind::Coarse, 20.0e-6, 2.5).with_rebound(ReboundCorrection::Fixed(1.0));
        let uncapped = AerosolMode {
            interception_cap: None,
            ..coarse
        };
        let d = 50.0e-6;
        assert!(
            point_deposition(&coarse, &env, d).surface_conductance
                < point_deposition(&uncapped, &env, d).surface_conductance
        );
    }

    #[test]
    fn test_mass_normalization_of_constant() {
        for (sigma, tolerance) in [(1.7, 1.0e-4), (2.0, 1.0e-3)] {
            let m = mode(ModeKind::Accumulation, 1.0e-6, sigma);
            let sum = GAUSS_HERMITE_7.integrate(|y| m.diameter_at(y).powi(3));
            assert_relative_eq!(mass_normalization(&m, sum), 1.0, max_relative = tolerance);
        }
    }

    #[test]
    fn test_velocities_positive() {
        let env = environment();
        for kind in ModeKind::ALL {
            let m = mode(kind, 0.5e-6, kind.default_geometric_std_dev());
            let v = mode_deposition_velocity(&m, &env, &GAUSS_HERMITE_7);
            assert!(v.number > 0.0 && v.mass > 0.0);
        }
    }

    #[test]
    fn test_convective_correction() {
        assert_eq!(ConvectiveCorrection::Disabled.scale(1000.0, -0.1), 1.0);
        assert_eq!(ConvectiveCorrection::Wesely1985.scale(1000.0, 0.01), 1.0);
        // -h/L = 100
        assert_relative_eq!(
            ConvectiveCorrection::Wesely1985.scale(1000.0, -0.1),
            0.45 * 100.0_f64.powf(0.6667)
        );
        // -h/L = 10
        assert_relative_eq!(
            ConvectiveCorrection::Wesely1985.scale(1000.0, -0.01),
            1.0 + 3.0_f64.powf(0.6667)
        );

        let env = environment().with_convective_correction(
            ConvectiveCorrection::Wesely1985,
            1000.0,
            -0.01,
        );
        assert!(env.utility_velocity > env.friction_velocity);
    }
}
