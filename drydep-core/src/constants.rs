//! Physical constants shared by the deposition parameterizations
//!
//! Each parameterization was validated against its source literature with
//! slightly different constants. Where a family needs its own value (for
//! example the WRF gravitational acceleration used by the modal model) the
//! constant lives next to that family instead of here.

use crate::FloatValue;

/// Gravitational acceleration
/// unit: m/s^2
pub const GRAVITY: FloatValue = 9.81;

/// von Kármán constant
/// unit: dimensionless
pub const VON_KARMAN: FloatValue = 0.4;

/// Boltzmann constant
/// unit: J/K
pub const BOLTZMANN: FloatValue = 1.380_648_8e-23;

/// Universal gas constant
/// unit: J/(mol K)
pub const GAS_CONSTANT: FloatValue = 8.314_462_1;

/// Molar mass of dry air
/// unit: kg/mol
pub const AIR_MOLAR_MASS: FloatValue = 28.97e-3;

/// Specific heat of air at constant pressure used in the Obukhov length
/// unit: J/(kg K)
pub const AIR_SPECIFIC_HEAT: FloatValue = 1000.0;

/// Standard sea-level pressure
/// unit: Pa
pub const STANDARD_PRESSURE: FloatValue = 101_325.0;

/// Offset between the Kelvin and Celsius scales
pub const ZERO_CELSIUS: FloatValue = 273.15;

/// Resistance used to mark a closed pathway
///
/// Table entries equal to this value carry no conductance, and combined
/// resistances are never reported above it.
/// unit: s/m
pub const CLOSED_RESISTANCE: FloatValue = 9999.0;
