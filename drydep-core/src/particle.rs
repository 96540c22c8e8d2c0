//! Continuous-regime particle physics
//!
//! Air viscosity, mean free path, Cunningham slip correction and Stokes
//! settling following Seinfeld & Pandis (2006), chapter 9.
//!
//! All diameters are in metres, temperatures in kelvin and pressures in
//! pascal.

use crate::constants::{AIR_MOLAR_MASS, BOLTZMANN, GAS_CONSTANT, GRAVITY};
use crate::FloatValue;
use std::f64::consts::PI;

/// Dynamic viscosity of air at the reference temperature
/// unit: kg/(m s)
const REFERENCE_VISCOSITY: FloatValue = 1.8e-5;

/// Reference temperature for [`REFERENCE_VISCOSITY`]
/// unit: K
const REFERENCE_TEMPERATURE: FloatValue = 298.0;

/// Sutherland constant for air
/// unit: K
const SUTHERLAND_CONSTANT: FloatValue = 110.4;

/// Slip correction coefficients, Seinfeld & Pandis (2006) eq. 9.34
const SLIP_A: FloatValue = 1.257;
const SLIP_B: FloatValue = 0.4;
const SLIP_C: FloatValue = 1.1;

/// Dynamic viscosity of air
///
/// Sutherland's law referenced to $\mu_0 = 1.8 \times 10^{-5}$ kg/(m s) at
/// $T_0 = 298$ K:
///
/// $$\mu = \mu_0 \frac{T_0 + S}{T + S} \left(\frac{T}{T_0}\right)^{3/2}$$
///
/// No range check is made; the caller supplies a physical temperature.
pub fn dynamic_viscosity(temperature: FloatValue) -> FloatValue {
    REFERENCE_VISCOSITY * (REFERENCE_TEMPERATURE + SUTHERLAND_CONSTANT)
        / (temperature + SUTHERLAND_CONSTANT)
        * (temperature / REFERENCE_TEMPERATURE).powf(1.5)
}

/// Mean free path of air molecules (m)
///
/// $$\lambda = \frac{2\mu}{P \sqrt{8 M_{air} / (\pi R T)}}$$
///
/// Pressure is in pascal.
pub fn mean_free_path(temperature: FloatValue, pressure: FloatValue) -> FloatValue {
    let mu = dynamic_viscosity(temperature);
    2.0 * mu / (pressure * (8.0 * AIR_MOLAR_MASS / (PI * GAS_CONSTANT * temperature)).sqrt())
}

/// Knudsen number of a particle, $Kn = 2\lambda / D_p$
pub fn knudsen_number(diameter: FloatValue, mean_free_path: FloatValue) -> FloatValue {
    2.0 * mean_free_path / diameter
}

/// Cunningham slip correction factor
///
/// $$C_c = 1 + \frac{2\lambda}{D_p}\left(1.257 + 0.4 \exp\left(-\frac{1.1 D_p}{2\lambda}\right)\right)$$
///
/// Tends to 1 for particles much larger than the mean free path and grows
/// without bound as the diameter shrinks.
pub fn slip_correction(diameter: FloatValue, mean_free_path: FloatValue) -> FloatValue {
    let kn = knudsen_number(diameter, mean_free_path);
    1.0 + kn * (SLIP_A + SLIP_B * (-SLIP_C / kn).exp())
}

/// Stokes settling velocity with slip correction (m/s)
///
/// $$v_s = \frac{C_c \rho_p g D_p^2}{18 \mu}$$
pub fn settling_velocity(
    diameter: FloatValue,
    density: FloatValue,
    slip: FloatValue,
    viscosity: FloatValue,
) -> FloatValue {
    slip * density * GRAVITY * diameter.powi(2) / (18.0 * viscosity)
}

/// Brownian diffusivity of a particle (m^2/s)
///
/// $$D = \frac{k T C_c}{3 \pi \mu D_p}$$
pub fn brownian_diffusivity(
    diameter: FloatValue,
    temperature: FloatValue,
    slip: FloatValue,
    viscosity: FloatValue,
) -> FloatValue {
    BOLTZMANN * temperature * slip / (3.0 * PI * viscosity * diameter)
}
