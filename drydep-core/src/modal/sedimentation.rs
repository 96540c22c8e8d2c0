//! Mode-averaged gravitational sedimentation
//!
//! Closed form of Binkowski & Shankar (1995), which integrates the settling
//! velocity with the approximate slip correction $1 + \hat{B} Kn$ analytically
//! over the log-normal distribution:
//!
//! $$v_{s,0} = \frac{g \rho_p D_g^2}{18 \mu}\left(E_{16} + \hat{B} Kn_g E_{4}\right)$$
//!
//! $$v_{s,3} = \frac{g \rho_p D_g^2}{18 \mu}\left(E_{64} + \hat{B} Kn_g E_{28}\right)$$
//!
//! where $E_k = \exp(k \ln^2\sigma_g / 8)$.

use super::mode::AerosolMode;
use super::{ModeVelocities, GRAVITY};
use crate::FloatValue;

/// Binkowski-Shankar approximation to the slip correction constant
pub const BHAT: FloatValue = 1.246;

/// Number and mass weighted sedimentation velocities of a mode
pub fn sedimentation_velocity(mode: &AerosolMode, dynamic_viscosity: FloatValue) -> ModeVelocities {
    let prefactor =
        GRAVITY / (18.0 * dynamic_viscosity) * mode.density * mode.geometric_mean_diameter.powi(2);
    let slip = BHAT * mode.knudsen;
    ModeVelocities {
        number: prefactor * (mode.moment_factor(16.0) + slip * mode.moment_factor(4.0)),
        mass: prefactor * (mode.moment_factor(64.0) + slip * mode.moment_factor(28.0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modal::deposition::mass_normalization;
    use crate::modal::mode::ModeKind;
    use crate::modal::quadrature::GAUSS_HERMITE_7;
    use crate::modal::{made_dynamic_viscosity, made_mean_free_path};
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_closed_form_matches_quadrature() {
        let mu = made_dynamic_viscosity(298.0);
        let lambda = made_mean_free_path(298.0, 101_325.0);
        let settling = |d: FloatValue, density: FloatValue| {
            GRAVITY * density * d.powi(2) * (1.0 + BHAT * 2.0 * lambda / d) / (18.0 * mu)
        };

        for (diameter, sigma) in [(0.02e-6, 1.7), (0.3e-6, 2.0)] {
            let mode =
                AerosolMode::new(ModeKind::Accumulation, diameter, sigma, 1500.0, lambda).unwrap();
            let closed = sedimentation_velocity(&mode, mu);
            let number =
                GAUSS_HERMITE_7.integrate(|y| settling(mode.diameter_at(y), 1500.0)) / PI.sqrt();
            assert_relative_eq!(closed.number, number, max_relative = 1e-4);
        }

        // The mass moment is only well resolved by seven points for narrow modes
        let mode = AerosolMode::new(ModeKind::Nucleation, 0.02e-6, 1.7, 1500.0, lambda).unwrap();
        let closed = sedimentation_velocity(&mode, mu);
        let mass = mass_normalization(
            &mode,
            GAUSS_HERMITE_7.integrate(|y| {
                let d = mode.diameter_at(y);
                settling(d, 1500.0) * d.powi(3)
            }),
        );
        assert_relative_eq!(closed.mass, mass, max_relative = 0.01);
    }

    #[test]
    fn test_mass_exceeds_number() {
        let mu = made_dynamic_viscosity(288.15);
        let lambda = made_mean_free_path(288.15, 101_325.0);
        for kind in ModeKind::ALL {
            let sigma = kind.default_geometric_std_dev();
            let mode = AerosolMode::new(kind, 0.5e-6, sigma, 1500.0, lambda).unwrap();
            let v = sedimentation_velocity(&mode, mu);
            assert!(v.mass > v.number);
            assert!(v.number > 0.0);
        }
    }

    #[test]
    fn test_monodisperse_limit() {
        // A very narrow mode settles like a single particle
        let mu = made_dynamic_viscosity(298.0);
        let lambda = made_mean_free_path(298.0, 101_325.0);
        let d = 2.0e-6;
        let mode = AerosolMode::new(ModeKind::Coarse, d, 1.0001, 1000.0, lambda).unwrap();
        let expected = GRAVITY * 1000.0 * d * d * (1.0 + BHAT * 2.0 * lambda / d) / (18.0 * mu);
        let v = sedimentation_velocity(&mode, mu);
        assert_relative_eq!(v.number, expected, max_relative = 1e-6);
        assert_relative_eq!(v.mass, expected, max_relative = 1e-6);
    }
}
