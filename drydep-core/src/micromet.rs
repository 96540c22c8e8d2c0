//! Surface-layer micrometeorology
//!
//! Monin-Obukhov length from the surface sensible heat flux and the
//! stability correction used by the simplified resistance model.

use crate::constants::{AIR_SPECIFIC_HEAT, GRAVITY, VON_KARMAN};
use crate::FloatValue;
use serde::{Deserialize, Serialize};

/// Heat flux magnitude at or below which the surface layer is treated as neutral
/// unit: W/m^2
pub const NEUTRAL_HEAT_FLUX: FloatValue = 1.0e-5;

/// Obukhov length returned for a neutral surface layer
/// unit: m
pub const NEUTRAL_OBUKHOV_LENGTH: FloatValue = 1.0e5;

/// Compute the Monin-Obukhov length
///
/// $$L = -\frac{\rho_a c_p T_s u_*^3}{\kappa g H}$$
///
/// # Arguments
///
/// * `heat_flux` - Surface sensible heat flux (W/m^2)
/// * `air_density` - Air density (kg/m^3)
/// * `surface_temperature` - Surface air temperature (K)
/// * `friction_velocity` - Friction velocity (m/s)
///
/// Returns the length in metres; negative is unstable, positive is stable.
/// Near-zero heat fluxes return [`NEUTRAL_OBUKHOV_LENGTH`].
pub fn obukhov_length(
    heat_flux: FloatValue,
    air_density: FloatValue,
    surface_temperature: FloatValue,
    friction_velocity: FloatValue,
) -> FloatValue {
    if heat_flux.abs() <= NEUTRAL_HEAT_FLUX {
        return NEUTRAL_OBUKHOV_LENGTH;
    }
    -air_density * AIR_SPECIFIC_HEAT * surface_temperature * friction_velocity.powi(3)
        / (VON_KARMAN * GRAVITY * heat_flux)
}

/// Stability classification of the surface layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StabilityRegime {
    NearNeutral,
    Stable,
    Unstable,
}

impl StabilityRegime {
    /// Classify the ratio of a reference height to the Obukhov length
    ///
    /// Undefined ratios (NaN) are treated as near-neutral.
    pub fn classify(z_over_l: FloatValue) -> Self {
        if z_over_l > 0.0 {
            StabilityRegime::Stable
        } else if z_over_l < 0.0 {
            StabilityRegime::Unstable
        } else {
            StabilityRegime::NearNeutral
        }
    }
}

/// Stability correction for heat $\psi_h(z/L)$
///
/// - stable ($z/L > 0$): $\psi_h = -5 \min(1, z/L)$
/// - unstable ($z/L < 0$): $\psi_h = \exp(0.598 + 0.39 \ln\epsilon - 0.09 (\ln\epsilon)^2)$
///   with $\epsilon = \min(1, -z/L)$ (Balkanski)
/// - near-neutral ($z/L = 0$ or undefined): 0
pub fn psi_h(z_over_l: FloatValue) -> FloatValue {
    match StabilityRegime::classify(z_over_l) {
        StabilityRegime::Stable => -5.0 * z_over_l.min(1.0),
        StabilityRegime::Unstable => {
            let log_eps = (-z_over_l).min(1.0).ln();
            (0.598 + 0.39 * log_eps - 0.09 * log_eps.powi(2)).exp()
        }
        StabilityRegime::NearNeutral => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use is_close::is_close;

    #[test]
    fn test_obukhov_length_neutral_sentinel() {
        for &flux in &[0.0, 1.0e-5, -1.0e-5, 5.0e-6] {
            for &(rho, t, ustar) in &[(1.2, 298.0, 0.3), (0.9, 250.0, 1.5), (1.4, 310.0, 0.01)] {
                assert_eq!(obukhov_length(flux, rho, t, ustar), NEUTRAL_OBUKHOV_LENGTH);
            }
        }
    }

    #[test]
    fn test_obukhov_length_sign_convention() {
        // Upward heat flux (daytime heating) gives an unstable, negative length
        assert!(obukhov_length(100.0, 1.2, 298.0, 0.4) < 0.0);
        // Downward heat flux (nighttime cooling) gives a stable, positive length
        assert!(obukhov_length(-20.0, 1.2, 285.0, 0.2) > 0.0);
    }

    #[test]
    fn test_obukhov_length_value() {
        let l = obukhov_length(100.0, 1.2, 300.0, 0.5);
        let expected = -1.2 * 1000.0 * 300.0 * 0.125 / (0.4 * 9.81 * 100.0);
        assert!(is_close!(l, expected), "Expected {}, got {}", expected, l);
    }

    #[test]
    fn test_classify() {
        assert_eq!(StabilityRegime::classify(0.5), StabilityRegime::Stable);
        assert_eq!(StabilityRegime::classify(-0.5), StabilityRegime::Unstable);
        assert_eq!(StabilityRegime::classify(0.0), StabilityRegime::NearNeutral);
        assert_eq!(
            StabilityRegime::classify(FloatValue::NAN),
            StabilityRegime::NearNeutral
        );
    }

    #[test]
    fn test_psi_h_branches() {
        assert_eq!(psi_h(0.0), 0.0);
        assert!((psi_h(0.2) + 1.0).abs() < 1e-12);
        // Ratios above one are limited to one
        assert!((psi_h(7.0) + 5.0).abs() < 1e-12);
        // Strongly unstable saturates at exp(0.598)
        assert!((psi_h(-50.0) - 0.598_f64.exp()).abs() < 1e-12);
        assert!(psi_h(-0.1) > 0.0);
    }

    #[test]
    fn test_psi_h_undefined_ratio_is_neutral() {
        assert_eq!(psi_h(FloatValue::NAN), 0.0);
    }
}
