//! Simplified resistance model
//!
//! Dry deposition for gases and particles as adopted from the WRF/Chem GOCART
//! modules (`module_gocart_drydep`, `module_gocart_settling`), following
//! Walcek et al. (1986).
//!
//! # What This Model Does
//!
//! 1. Aerodynamic resistance from a stability-corrected log wind profile at a
//!    fixed 2 m reference height. The surface is assumed aerodynamically rough
//!    (Reynolds number > 10) everywhere.
//! 2. Quasi-laminar resistance from the ratio of water vapour to gas
//!    diffusivity (gases only).
//! 3. A bulk surface resistance parameterised through a surface deposition
//!    velocity that depends on friction velocity and convective stability.
//!
//! Particle deposition additionally includes gravitational settling as in
//! Seinfeld & Pandis (2006) eq. 19.7.
//!
//! # Differences from WRF/Chem
//!
//! - **Settling**: the WRF/Chem GOCART particle scheme has no settling term in
//!   the deposition velocity.
//! - **Pressure units**: the settling velocity takes pressure in Pa and
//!   converts to hPa for the mean free path fit.

use crate::constants::{CLOSED_RESISTANCE, GRAVITY, VON_KARMAN};
use crate::errors::DepositionError;
use crate::micromet::psi_h;
use crate::FloatValue;
use log::debug;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Reference height for the aerodynamic resistance
/// unit: m
pub const REFERENCE_HEIGHT: FloatValue = 2.0;

/// Minimum particle deposition velocity
/// unit: m/s
pub const PARTICLE_VELOCITY_FLOOR: FloatValue = 1.0e-4;

/// Maximum surface deposition velocity (Walcek et al., 1986, Table 2)
/// unit: m/s
const MAX_SURFACE_VELOCITY: FloatValue = 2.0e-3;

/// Minimum bulk surface resistance
/// unit: s/m
const MIN_SURFACE_RESISTANCE: FloatValue = 1.0;

/// Ratios of H2O to gas diffusivity, Seinfeld & Pandis (2006) Table 19.4
pub const DIFFUSIVITY_RATIOS: [(&str, FloatValue); 7] = [
    ("SO2", 1.89),
    ("O3", 1.63),
    ("NO2", 1.6),
    ("NO", 1.29),
    ("H2O2", 1.37),
    ("NH3", 0.97),
    ("HCHO", 1.29),
];

/// Look up the H2O-to-gas diffusivity ratio of a tabulated species
pub fn diffusivity_ratio(species: &str) -> Option<FloatValue> {
    DIFFUSIVITY_RATIOS
        .iter()
        .find(|(name, _)| *name == species)
        .map(|(_, ratio)| *ratio)
}

/// Surface type selecting the minimum gas deposition velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepositionSurface {
    #[default]
    Land,
    Ice,
}

impl DepositionSurface {
    /// Minimum gas deposition velocity (m/s) below which the resistance sum
    /// is not trusted
    pub fn gas_velocity_floor(self) -> FloatValue {
        match self {
            DepositionSurface::Land => 3.0e-3,
            DepositionSurface::Ice => 2.0e-3,
        }
    }
}

impl FromStr for DepositionSurface {
    type Err = DepositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "land" => Ok(DepositionSurface::Land),
            "ice" => Ok(DepositionSurface::Ice),
            _ => Err(DepositionError::UnknownCategory {
                kind: "deposition surface",
                name: s.to_string(),
            }),
        }
    }
}

/// Aerodynamic resistance $R_a$ (s/m)
///
/// $$R_a = \frac{\ln(z_1/z_0) - \psi_h(z_1/L)}{\kappa u_*}$$
///
/// with $z_1$ = [`REFERENCE_HEIGHT`]. Requires $z_0 > 0$ and $u_* > 0$.
pub fn aerodynamic_resistance(
    obukhov_length: FloatValue,
    roughness_length: FloatValue,
    friction_velocity: FloatValue,
) -> FloatValue {
    let z_over_l = REFERENCE_HEIGHT / obukhov_length;
    ((REFERENCE_HEIGHT / roughness_length).ln() - psi_h(z_over_l))
        / (VON_KARMAN * friction_velocity)
}

/// Quasi-laminar resistance $R_b$ for gases (s/m)
///
/// $$R_b = \frac{2}{\kappa u_*} \left(\frac{D_{H_2O}}{D_g}\right)^{2/3}$$
pub fn quasi_laminar_resistance(
    friction_velocity: FloatValue,
    diffusivity_ratio: FloatValue,
) -> FloatValue {
    2.0 / VON_KARMAN / friction_velocity * diffusivity_ratio.powf(0.666_666_67)
}

/// Bulk surface resistance $R_s$ (s/m)
///
/// The surface deposition velocity is $0.002 u_*$, enhanced under unstable
/// conditions by $1 + (-300/L)^{2/3}$, and replaced by
/// $0.0009 u_* (-z_i/L)^{2/3}$ in strongly convective boundary layers
/// ($z_i/L < -30$). The velocity is limited to 2 mm/s before inversion and
/// the resistance is clamped to $[1, 9999]$.
pub fn surface_layer_resistance(
    obukhov_length: FloatValue,
    friction_velocity: FloatValue,
    boundary_layer_height: FloatValue,
) -> FloatValue {
    let mut vds = 0.002 * friction_velocity;
    if obukhov_length < 0.0 {
        vds *= 1.0 + (-300.0 / obukhov_length).powf(0.6667);
    }

    let czh = boundary_layer_height / obukhov_length;
    if czh < -30.0 {
        vds = 0.0009 * friction_velocity * (-czh).powf(0.6667);
    }

    let rs = 1.0 / vds.min(MAX_SURFACE_VELOCITY);
    let clamped = rs.min(CLOSED_RESISTANCE).max(MIN_SURFACE_RESISTANCE);
    if clamped != rs {
        debug!(
            "Surface resistance {:.3e} s/m saturated at {} s/m",
            rs, clamped
        );
    }
    clamped
}

/// Gas dry deposition velocity (m/s)
///
/// $$v_d = \max\left(\frac{1}{R_a + R_b + R_s}, v_{min}\right)$$
///
/// # Arguments
///
/// * `obukhov_length` - Monin-Obukhov length (m)
/// * `friction_velocity` - Friction velocity (m/s)
/// * `boundary_layer_height` - Planetary boundary layer height (m)
/// * `roughness_length` - Surface roughness length (m)
/// * `diffusivity_ratio` - Ratio of H2O to gas diffusivity
/// * `surface` - Surface type selecting the velocity floor
pub fn gas_deposition_velocity(
    obukhov_length: FloatValue,
    friction_velocity: FloatValue,
    boundary_layer_height: FloatValue,
    roughness_length: FloatValue,
    diffusivity_ratio: FloatValue,
    surface: DepositionSurface,
) -> FloatValue {
    let ra = aerodynamic_resistance(obukhov_length, roughness_length, friction_velocity);
    let rb = quasi_laminar_resistance(friction_velocity, diffusivity_ratio);
    let rs = surface_layer_resistance(obukhov_length, friction_velocity, boundary_layer_height);

    (1.0 / (ra + rb + rs)).max(surface.gas_velocity_floor())
}

/// Particle dry deposition velocity (m/s)
///
/// Settling acts as a pathway in parallel with the turbulent resistances:
///
/// $$v_d = \max\left(\frac{1}{R_a + R_s + R_a R_s v_s} + v_s, 10^{-4}\right)$$
///
/// # Arguments
///
/// * `obukhov_length` - Monin-Obukhov length (m)
/// * `friction_velocity` - Friction velocity (m/s)
/// * `temperature` - Air temperature (K)
/// * `boundary_layer_height` - Planetary boundary layer height (m)
/// * `roughness_length` - Surface roughness length (m)
/// * `radius` - Effective particle radius (m)
/// * `density` - Particle density (kg/m^3)
/// * `pressure` - Air pressure (Pa)
#[allow(clippy::too_many_arguments)]
pub fn particle_deposition_velocity(
    obukhov_length: FloatValue,
    friction_velocity: FloatValue,
    temperature: FloatValue,
    boundary_layer_height: FloatValue,
    roughness_length: FloatValue,
    radius: FloatValue,
    density: FloatValue,
    pressure: FloatValue,
) -> FloatValue {
    let vs = settling_velocity(radius, density, temperature, pressure);
    particle_deposition_velocity_with_settling(
        obukhov_length,
        friction_velocity,
        boundary_layer_height,
        roughness_length,
        vs,
    )
}

/// Particle dry deposition velocity for a known settling velocity (m/s)
pub fn particle_deposition_velocity_with_settling(
    obukhov_length: FloatValue,
    friction_velocity: FloatValue,
    boundary_layer_height: FloatValue,
    roughness_length: FloatValue,
    settling_velocity: FloatValue,
) -> FloatValue {
    let ra = aerodynamic_resistance(obukhov_length, roughness_length, friction_velocity);
    let rs = surface_layer_resistance(obukhov_length, friction_velocity, boundary_layer_height);
    let vs = settling_velocity;

    (1.0 / (ra + rs + ra * rs * vs) + vs).max(PARTICLE_VELOCITY_FLOOR)
}

/// Particle terminal settling velocity (m/s)
///
/// $$v_s = \frac{2}{9} \frac{g \rho_p r^2}{\mu / C_c}$$
///
/// with $\mu = 1.458 \times 10^{-6} T^{3/2} / (T + 110.4)$ and a mean free
/// path of $1.1 \times 10^{-3} / P_{hPa} / \sqrt{T}$.
///
/// # Arguments
///
/// * `radius` - Effective particle radius (m)
/// * `density` - Particle density (kg/m^3)
/// * `temperature` - Air temperature (K)
/// * `pressure` - Air pressure (Pa)
pub fn settling_velocity(
    radius: FloatValue,
    density: FloatValue,
    temperature: FloatValue,
    pressure: FloatValue,
) -> FloatValue {
    let c_stokes = 1.458e-6 * temperature.powf(1.5) / (temperature + 110.4);

    let pressure_hpa = pressure / 100.0;
    let free_path = 1.1e-3 / pressure_hpa / temperature.sqrt();

    let c_cun = 1.0 + free_path / radius * (1.257 + 0.4 * (-1.1 * radius / free_path).exp());

    // Slip-corrected viscosity
    let viscosity = c_stokes / c_cun;

    2.0 / 9.0 * GRAVITY * density * radius.powi(2) / viscosity
}
