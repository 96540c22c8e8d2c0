//! Collector parameters for particle surface resistance
//!
//! Land-use categories and collector properties from Zhang et al. (2001),
//! Table 3. Seasons follow the same five categories as Wesely (1989).
//!
//! Zhang, L., Gong, S., Padro, J. and Barrie, L. (2001). A size-segregated
//! particle dry deposition scheme for an atmospheric aerosol module.
//! Atmos. Environ. 35, 549-560.

use crate::categories::{LandUse, Season};
use crate::errors::DepositionError;
use crate::FloatValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Land-use category of Zhang et al. (2001)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZhangLandUse {
    EvergreenNeedleleaf,
    EvergreenBroadleaf,
    DeciduousNeedleleaf,
    DeciduousBroadleaf,
    MixedBroadleafNeedleleaf,
    Grass,
    Crops,
    Desert,
    Tundra,
    Shrubs,
    /// Wetland with plants
    Wetland,
    IceCap,
    InlandWater,
    Ocean,
    Urban,
}

/// Collector properties of a land-use category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollectorParameters {
    /// Impaction parameter $\alpha$
    pub alpha: FloatValue,
    /// Brownian diffusion exponent $\gamma$
    pub gamma: FloatValue,
    /// Characteristic collector radius per season, none for smooth surfaces
    /// unit: mm
    pub radius_mm: [Option<FloatValue>; 5],
}

const fn vegetated(
    alpha: FloatValue,
    gamma: FloatValue,
    radius_mm: [FloatValue; 5],
) -> CollectorParameters {
    CollectorParameters {
        alpha,
        gamma,
        radius_mm: [
            Some(radius_mm[0]),
            Some(radius_mm[1]),
            Some(radius_mm[2]),
            Some(radius_mm[3]),
            Some(radius_mm[4]),
        ],
    }
}

const fn smooth(alpha: FloatValue, gamma: FloatValue) -> CollectorParameters {
    CollectorParameters {
        alpha,
        gamma,
        radius_mm: [None; 5],
    }
}

const COLLECTORS: [CollectorParameters; 15] = [
    vegetated(1.0, 0.56, [2.0, 2.0, 2.0, 2.0, 2.0]),
    vegetated(0.6, 0.58, [5.0, 5.0, 5.0, 5.0, 5.0]),
    vegetated(1.1, 0.56, [2.0, 2.0, 5.0, 5.0, 2.0]),
    vegetated(0.8, 0.56, [5.0, 5.0, 10.0, 10.0, 5.0]),
    vegetated(0.8, 0.56, [5.0, 5.0, 5.0, 5.0, 5.0]),
    vegetated(1.2, 0.54, [2.0, 2.0, 5.0, 5.0, 2.0]),
    vegetated(1.2, 0.54, [2.0, 2.0, 5.0, 5.0, 2.0]),
    smooth(50.0, 0.54),
    smooth(50.0, 0.54),
    vegetated(1.3, 0.54, [10.0, 10.0, 10.0, 10.0, 10.0]),
    vegetated(2.0, 0.54, [10.0, 10.0, 10.0, 10.0, 10.0]),
    smooth(50.0, 0.54),
    smooth(100.0, 0.50),
    smooth(100.0, 0.50),
    vegetated(1.5, 0.56, [10.0, 10.0, 10.0, 10.0, 10.0]),
];

impl ZhangLandUse {
    pub const ALL: [ZhangLandUse; 15] = [
        ZhangLandUse::EvergreenNeedleleaf,
        ZhangLandUse::EvergreenBroadleaf,
        ZhangLandUse::DeciduousNeedleleaf,
        ZhangLandUse::DeciduousBroadleaf,
        ZhangLandUse::MixedBroadleafNeedleleaf,
        ZhangLandUse::Grass,
        ZhangLandUse::Crops,
        ZhangLandUse::Desert,
        ZhangLandUse::Tundra,
        ZhangLandUse::Shrubs,
        ZhangLandUse::Wetland,
        ZhangLandUse::IceCap,
        ZhangLandUse::InlandWater,
        ZhangLandUse::Ocean,
        ZhangLandUse::Urban,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            ZhangLandUse::EvergreenNeedleleaf => "evergreen_needleleaf",
            ZhangLandUse::EvergreenBroadleaf => "evergreen_broadleaf",
            ZhangLandUse::DeciduousNeedleleaf => "deciduous_needleleaf",
            ZhangLandUse::DeciduousBroadleaf => "deciduous_broadleaf",
            ZhangLandUse::MixedBroadleafNeedleleaf => "mixed_broadleaf_needleleaf",
            ZhangLandUse::Grass => "grass",
            ZhangLandUse::Crops => "crops",
            ZhangLandUse::Desert => "desert",
            ZhangLandUse::Tundra => "tundra",
            ZhangLandUse::Shrubs => "shrubs",
            ZhangLandUse::Wetland => "wetland",
            ZhangLandUse::IceCap => "ice_cap",
            ZhangLandUse::InlandWater => "inland_water",
            ZhangLandUse::Ocean => "ocean",
            ZhangLandUse::Urban => "urban",
        }
    }

    pub fn collector(self) -> &'static CollectorParameters {
        &COLLECTORS[self.index()]
    }

    /// Characteristic collector radius in metres, none for smooth surfaces
    pub fn collector_radius(self, season: Season) -> Option<FloatValue> {
        self.collector().radius_mm[season.index()].map(|mm| mm * 1.0e-3)
    }
}

impl From<LandUse> for ZhangLandUse {
    fn from(land_use: LandUse) -> Self {
        match land_use {
            LandUse::Urban => ZhangLandUse::Urban,
            LandUse::Agricultural => ZhangLandUse::Crops,
            LandUse::Range => ZhangLandUse::Grass,
            LandUse::DeciduousForest => ZhangLandUse::DeciduousBroadleaf,
            LandUse::ConiferousForest => ZhangLandUse::EvergreenNeedleleaf,
            LandUse::MixedForest => ZhangLandUse::MixedBroadleafNeedleleaf,
            LandUse::Water => ZhangLandUse::InlandWater,
            LandUse::Barren => ZhangLandUse::Desert,
            LandUse::Wetland => ZhangLandUse::Wetland,
            LandUse::MixedAgriculturalRange => ZhangLandUse::Grass,
            LandUse::RockyShrubland => ZhangLandUse::Shrubs,
        }
    }
}

impl fmt::Display for ZhangLandUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ZhangLandUse {
    type Err = DepositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ZhangLandUse::ALL
            .into_iter()
            .find(|land_use| land_use.name() == s)
            .ok_or_else(|| DepositionError::UnknownCategory {
                kind: "Zhang land use",
                name: s.to_string(),
            })
    }
}
