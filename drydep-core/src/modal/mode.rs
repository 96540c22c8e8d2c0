//! Log-normal aerosol modes
//!
//! A mode is described by its geometric mean diameter and geometric standard
//! deviation. Each mode kind carries a default width, a rebound correction
//! for particles bouncing off the collector and, for the coarse mode, a cap
//! on the interception efficiency.

use crate::errors::{DepositionError, DepositionResult};
use crate::FloatValue;
use serde::{Deserialize, Serialize};

/// Rebound correction applied to the surface collection efficiency
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ReboundCorrection {
    /// A constant factor independent of particle size
    Fixed(FloatValue),
    /// $R = \exp(-2\sqrt{St})$ (Slinn, 1982)
    Slinn,
}

impl ReboundCorrection {
    pub fn factor(&self, stokes_number: FloatValue) -> FloatValue {
        match self {
            ReboundCorrection::Fixed(value) => *value,
            ReboundCorrection::Slinn => (-2.0 * stokes_number.sqrt()).exp(),
        }
    }
}

/// The three log-normal modes of the aerosol distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeKind {
    Nucleation,
    Accumulation,
    Coarse,
}

impl ModeKind {
    pub const ALL: [ModeKind; 3] = [ModeKind::Nucleation, ModeKind::Accumulation, ModeKind::Coarse];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Rebound is only significant for coarse particles
    pub fn rebound(self) -> ReboundCorrection {
        match self {
            ModeKind::Nucleation | ModeKind::Accumulation => ReboundCorrection::Fixed(1.0),
            ModeKind::Coarse => ReboundCorrection::Slinn,
        }
    }

    /// Upper limit on the interception efficiency, if any
    pub fn interception_cap(self) -> Option<FloatValue> {
        match self {
            ModeKind::Coarse => Some(1.0),
            _ => None,
        }
    }

    /// Default geometric standard deviation of the mode
    pub fn default_geometric_std_dev(self) -> FloatValue {
        match self {
            ModeKind::Nucleation => 1.7,
            ModeKind::Accumulation => 2.0,
            ModeKind::Coarse => 2.5,
        }
    }
}

/// A single log-normal aerosol mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AerosolMode {
    pub kind: ModeKind,
    /// unit: m
    pub geometric_mean_diameter: FloatValue,
    pub geometric_std_dev: FloatValue,
    /// Average particle density of the mode
    /// unit: kg/m^3
    pub density: FloatValue,
    /// Knudsen number at the geometric mean diameter
    pub knudsen: FloatValue,
    pub rebound: ReboundCorrection,
    pub interception_cap: Option<FloatValue>,
}

impl AerosolMode {
    /// Build a mode, computing its Knudsen number from the mean free path
    pub fn new(
        kind: ModeKind,
        geometric_mean_diameter: FloatValue,
        geometric_std_dev: FloatValue,
        density: FloatValue,
        mean_free_path: FloatValue,
    ) -> DepositionResult<Self> {
        let positive = |value: FloatValue| value.is_finite() && value > 0.0;
        if !positive(geometric_mean_diameter) {
            return Err(DepositionError::Error(format!(
                "{:?} mode diameter must be positive, got {}",
                kind, geometric_mean_diameter
            )));
        }
        if !positive(geometric_std_dev - 1.0) {
            return Err(DepositionError::Error(format!(
                "{:?} mode geometric standard deviation must exceed 1, got {}",
                kind, geometric_std_dev
            )));
        }
        if !positive(density) {
            return Err(DepositionError::Error(format!(
                "{:?} mode density must be positive, got {}",
                kind, density
            )));
        }
        Ok(Self {
            kind,
            geometric_mean_diameter,
            geometric_std_dev,
            density,
            knudsen: 2.0 * mean_free_path / geometric_mean_diameter,
            rebound: kind.rebound(),
            interception_cap: kind.interception_cap(),
        })
    }

    /// Replace the rebound correction implied by the mode kind
    pub fn with_rebound(mut self, rebound: ReboundCorrection) -> Self {
        self.rebound = rebound;
        self
    }

    pub fn ln_sigma(&self) -> FloatValue {
        self.geometric_std_dev.ln()
    }

    /// Diameter at a Gauss-Hermite abscissa, $D_g \exp(\sqrt{2}\, y \ln\sigma_g)$
    pub fn diameter_at(&self, abscissa: FloatValue) -> FloatValue {
        self.geometric_mean_diameter * (abscissa * std::f64::consts::SQRT_2 * self.ln_sigma()).exp()
    }

    /// $\exp(k \ln^2\sigma_g / 8)$, the moment factors of the log-normal distribution
    pub fn moment_factor(&self, k: FloatValue) -> FloatValue {
        (k / 8.0 * self.ln_sigma().powi(2)).exp()
    }

    /// Ratio of the third moment to $D_g^3$
    pub fn third_moment_factor(&self) -> FloatValue {
        (1.5 * std::f64::consts::SQRT_2 * self.ln_sigma()).powi(2).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rebound() {
        assert_eq!(ModeKind::Accumulation.rebound().factor(10.0), 1.0);
        assert_eq!(ModeKind::Nucleation.rebound().factor(0.0), 1.0);
        assert_relative_eq!(ModeKind::Coarse.rebound().factor(4.0), (-4.0_f64).exp());
        assert_eq!(ModeKind::Coarse.rebound().factor(0.0), 1.0);
    }

    #[test]
    fn test_new_validates() {
        assert!(AerosolMode::new(ModeKind::Coarse, 0.0, 2.5, 1500.0, 6.5e-8).is_err());
        assert!(AerosolMode::new(ModeKind::Coarse, 1e-6, 1.0, 1500.0, 6.5e-8).is_err());
        assert!(AerosolMode::new(ModeKind::Coarse, 1e-6, 2.5, -1.0, 6.5e-8).is_err());
        assert!(AerosolMode::new(ModeKind::Coarse, FloatValue::NAN, 2.5, 1500.0, 6.5e-8).is_err());

        let mode = AerosolMode::new(ModeKind::Accumulation, 2.0e-7, 2.0, 1500.0, 6.5e-8).unwrap();
        assert_relative_eq!(mode.knudsen, 0.65);
        assert_eq!(mode.rebound, ReboundCorrection::Fixed(1.0));
        assert_eq!(mode.interception_cap, None);

        let coarse = AerosolMode::new(ModeKind::Coarse, 2.0e-6, 2.5, 1500.0, 6.5e-8).unwrap();
        assert_eq!(coarse.rebound, ReboundCorrection::Slinn);
        assert_eq!(coarse.interception_cap, Some(1.0));
        assert_eq!(
            coarse.with_rebound(ReboundCorrection::Fixed(1.0)).rebound,
            ReboundCorrection::Fixed(1.0)
        );
    }

    #[test]
    fn test_third_moment_factor() {
        let mode = AerosolMode::new(ModeKind::Accumulation, 2.0e-7, 2.0, 1500.0, 6.5e-8).unwrap();
        assert_relative_eq!(
            mode.third_moment_factor(),
            mode.moment_factor(36.0),
            max_relative = 1e-12
        );
        assert_eq!(mode.diameter_at(0.0), 2.0e-7);
    }

    #[test]
    fn test_rebound_deserialize() {
        let fixed: ReboundCorrection =
            serde_json::from_str(r#"{"type": "fixed", "value": 0.5}"#).unwrap();
        assert_eq!(fixed, ReboundCorrection::Fixed(0.5));
        let slinn: ReboundCorrection = serde_json::from_str(r#"{"type": "slinn"}"#).unwrap();
        assert_eq!(slinn, ReboundCorrection::Slinn);
    }
}
