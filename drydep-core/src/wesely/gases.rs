//! Gas properties used by the resistance network
//!
//! Values from Wesely (1989) Table 2.

use crate::errors::{DepositionError, DepositionResult};
use crate::FloatValue;
use serde::{Deserialize, Serialize};

/// Reactivity of a gas towards biological surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reactivity {
    None,
    Slight,
    High,
}

impl Reactivity {
    /// Reactivity factor $f_0$
    pub const fn factor(self) -> FloatValue {
        match self {
            Reactivity::None => 0.0,
            Reactivity::Slight => 0.1,
            Reactivity::High => 1.0,
        }
    }
}

/// Physical properties of a gas-phase species
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasProperty {
    /// Ratio of the molecular diffusivity of water vapour to that of the gas
    pub diffusivity_ratio: FloatValue,
    /// Effective Henry's law coefficient
    /// unit: M/atm
    pub henry: FloatValue,
    pub reactivity: Reactivity,
}

impl GasProperty {
    pub const fn new(
        diffusivity_ratio: FloatValue,
        henry: FloatValue,
        reactivity: Reactivity,
    ) -> Self {
        Self {
            diffusivity_ratio,
            henry,
            reactivity,
        }
    }

    /// Reactivity factor $f_0$
    pub fn reactivity_factor(&self) -> FloatValue {
        self.reactivity.factor()
    }

    /// Look up a catalogued gas by its chemical name (case-insensitive)
    pub fn from_name(name: &str) -> DepositionResult<Self> {
        let upper = name.trim().to_ascii_uppercase();
        CATALOGUE
            .iter()
            .find(|(key, _)| *key == upper)
            .map(|(_, gas)| *gas)
            .ok_or_else(|| DepositionError::UnknownCategory {
                kind: "gas",
                name: name.to_string(),
            })
    }
}

pub const SO2: GasProperty = GasProperty::new(1.9, 1.0e5, Reactivity::None);
pub const O3: GasProperty = GasProperty::new(1.6, 0.01, Reactivity::High);
pub const NO2: GasProperty = GasProperty::new(1.6, 0.01, Reactivity::Slight);
pub const NO: GasProperty = GasProperty::new(1.3, 2.0e-3, Reactivity::None);
pub const HNO3: GasProperty = GasProperty::new(1.9, 1.0e14, Reactivity::None);
pub const H2O2: GasProperty = GasProperty::new(1.4, 1.0e5, Reactivity::High);
/// Acetaldehyde
pub const ALD: GasProperty = GasProperty::new(1.6, 15.0, Reactivity::None);
pub const HCHO: GasProperty = GasProperty::new(1.3, 6.0e3, Reactivity::None);
/// Methyl hydroperoxide
pub const OP: GasProperty = GasProperty::new(1.6, 240.0, Reactivity::Slight);
/// Peroxyacetyl acid
pub const PAA: GasProperty = GasProperty::new(2.0, 540.0, Reactivity::Slight);
/// Formic acid
pub const ORA: GasProperty = GasProperty::new(1.6, 4.0e6, Reactivity::None);
pub const NH3: GasProperty = GasProperty::new(1.0, 2.0e4, Reactivity::None);
pub const PAN: GasProperty = GasProperty::new(2.6, 3.6, Reactivity::Slight);
pub const HNO2: GasProperty = GasProperty::new(1.6, 1.0e5, Reactivity::Slight);

/// Catalogued gases keyed by name
pub const CATALOGUE: [(&str, GasProperty); 14] = [
    ("SO2", SO2),
    ("O3", O3),
    ("NO2", NO2),
    ("NO", NO),
    ("HNO3", HNO3),
    ("H2O2", H2O2),
    ("ALD", ALD),
    ("HCHO", HCHO),
    ("OP", OP),
    ("PAA", PAA),
    ("ORA", ORA),
    ("NH3", NH3),
    ("PAN", PAN),
    ("HNO2", HNO2),
];
