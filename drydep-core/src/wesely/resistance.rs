//! Bulk surface resistance network
//!
//! Combines the stomatal, mesophyll, cuticular, lower-canopy and ground
//! pathways into a single surface resistance $R_c$:
//!
//! $$\frac{1}{R_c} = \frac{1}{r_{sx} + r_{mx}} + \frac{1}{r_{lux}} + \frac{1}{r_{dc} + r_{clx}} + \frac{1}{r_{ac} + r_{gsx}}$$
//!
//! Closed pathways carry an infinite resistance and so contribute no
//! conductance. The result is limited to [`CLOSED_RESISTANCE`].

use super::gases::{self, GasProperty};
use super::tables::BaseResistances;
use crate::categories::{LandUse, Season};
use crate::constants::CLOSED_RESISTANCE;
use crate::errors::{DepositionError, DepositionResult};
use crate::FloatValue;
use log::debug;
use serde::{Deserialize, Serialize};

/// Wetness of the exposed surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceWetness {
    #[default]
    Dry,
    Dew,
    Rain,
}

impl SurfaceWetness {
    /// Build from the pair of flags used by host models
    ///
    /// Dew and rain at the same time is rejected.
    pub fn from_flags(is_raining: bool, is_dew: bool) -> DepositionResult<Self> {
        match (is_raining, is_dew) {
            (true, true) => Err(DepositionError::ConflictingSurfaceWetness),
            (true, false) => Ok(SurfaceWetness::Rain),
            (false, true) => Ok(SurfaceWetness::Dew),
            (false, false) => Ok(SurfaceWetness::Dry),
        }
    }
}

/// Which table pair a species reads its lower canopy and ground resistances from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeciesClass {
    SulfurDioxide,
    Ozone,
    /// Interpolated between the SO2 and O3 tables
    #[default]
    Other,
}

impl SpeciesClass {
    /// Classify a gas by comparing it with the catalogued SO2 and O3 properties
    pub fn for_gas(gas: &GasProperty) -> Self {
        if *gas == gases::SO2 {
            SpeciesClass::SulfurDioxide
        } else if *gas == gases::O3 {
            SpeciesClass::Ozone
        } else {
            SpeciesClass::Other
        }
    }
}

/// Interpolate a resistance between the SO2 and O3 endpoint values
///
/// $$r_x = \left(\frac{10^{-5} H^*}{r_{SO_2}} + \frac{f_0}{r_{O_3}}\right)^{-1}$$
///
/// A zero weight contributes nothing even when its endpoint is zero; if no
/// pathway contributes the result is infinite.
pub fn interpolate_resistance(
    henry: FloatValue,
    reactivity_factor: FloatValue,
    r_so2: FloatValue,
    r_o3: FloatValue,
) -> FloatValue {
    let conductance =
        weighted_conductance(1.0e-5 * henry, r_so2) + weighted_conductance(reactivity_factor, r_o3);
    if conductance == 0.0 {
        FloatValue::INFINITY
    } else {
        1.0 / conductance
    }
}

fn weighted_conductance(weight: FloatValue, resistance: FloatValue) -> FloatValue {
    if weight == 0.0 {
        0.0
    } else {
        weight / resistance
    }
}

/// Low temperature increase of the cuticular and ground resistances
fn cold_surface_increment(surface_temperature: FloatValue) -> FloatValue {
    if surface_temperature < -2.0 {
        1000.0 * (-surface_temperature - 4.0).exp()
    } else {
        0.0
    }
}

/// Bulk canopy stomatal resistance for water vapour
///
/// Closed (infinite) at night, below -1 C, at or above 45 C and where the
/// land use has no stomatal pathway.
pub fn stomatal_resistance(
    minimum_resistance: FloatValue,
    solar_radiation: FloatValue,
    surface_temperature: FloatValue,
    slope: FloatValue,
) -> FloatValue {
    let irradiance = solar_radiation * slope.cos();
    if surface_temperature <= -1.0
        || surface_temperature >= 45.0
        || irradiance <= 0.0
        || minimum_resistance.is_infinite()
    {
        return FloatValue::INFINITY;
    }
    let tc = surface_temperature.clamp(0.1, 39.9);
    minimum_resistance * (1.0 + (200.0 / (irradiance + 0.1)).powi(2)) * (400.0 / (tc * (40.0 - tc)))
}

/// Upper canopy cuticular resistance of a species
fn cuticular_resistance(
    gas: &GasProperty,
    r_lu: FloatValue,
    wetness: SurfaceWetness,
    class: SpeciesClass,
) -> FloatValue {
    if r_lu.is_infinite() {
        return FloatValue::INFINITY;
    }
    let f0 = gas.reactivity_factor();
    let (so2, o3) = match wetness {
        SurfaceWetness::Dry => return r_lu / (1.0e-5 * gas.henry + f0),
        SurfaceWetness::Dew => (100.0, 1.0 / (1.0 / 3000.0 + 1.0 / (3.0 * r_lu))),
        SurfaceWetness::Rain => (
            1.0 / (1.0 / 5000.0 + 1.0 / (3.0 * r_lu)),
            1.0 / (1.0 / 1000.0 + 1.0 / (3.0 * r_lu)),
        ),
    };
    match class {
        SpeciesClass::SulfurDioxide => so2,
        SpeciesClass::Ozone => o3,
        SpeciesClass::Other => 1.0 / (1.0e-7 * gas.henry + f0 / o3),
    }
}

/// Compute the bulk surface resistance $R_c$ (s/m)
///
/// # Arguments
///
/// * `gas` - Properties of the depositing gas
/// * `solar_radiation` - Incoming solar radiation (W/m^2)
/// * `surface_temperature` - Surface air temperature (C)
/// * `slope` - Local terrain slope (radians)
/// * `season` - Seasonal category
/// * `land_use` - Land-use category
/// * `wetness` - Dew or rain on exposed surfaces
/// * `class` - Whether the species uses the SO2 or O3 tables directly
#[allow(clippy::too_many_arguments)]
pub fn surface_resistance(
    gas: &GasProperty,
    solar_radiation: FloatValue,
    surface_temperature: FloatValue,
    slope: FloatValue,
    season: Season,
    land_use: LandUse,
    wetness: SurfaceWetness,
    class: SpeciesClass,
) -> FloatValue {
    let base = BaseResistances::lookup(season, land_use);

    let increment = cold_surface_increment(surface_temperature);
    let r_lu = base.cuticular + increment;
    let r_gs_so2 = base.ground_so2 + increment;
    let r_gs_o3 = base.ground_o3 + increment;
    let r_cl_so2 = base.lower_canopy_so2 + increment;
    let r_cl_o3 = base.lower_canopy_o3 + increment;

    let f0 = gas.reactivity_factor();

    let r_sx = stomatal_resistance(base.stomatal, solar_radiation, surface_temperature, slope)
        * gas.diffusivity_ratio;
    let r_mx = 1.0 / (gas.henry / 3000.0 + 100.0 * f0);
    let r_lux = cuticular_resistance(gas, r_lu, wetness, class);
    let r_dc = 100.0 * (1.0 + 1000.0 / (solar_radiation + 10.0)) * (1.0 + 1000.0 * slope);

    let (r_clx, r_gsx) = match class {
        SpeciesClass::SulfurDioxide => (r_cl_so2, r_gs_so2),
        SpeciesClass::Ozone => (r_cl_o3, r_gs_o3),
        SpeciesClass::Other => (
            interpolate_resistance(gas.henry, f0, r_cl_so2, r_cl_o3),
            interpolate_resistance(gas.henry, f0, r_gs_so2, r_gs_o3),
        ),
    };

    let conductance =
        1.0 / (r_sx + r_mx) + 1.0 / r_lux + 1.0 / (r_dc + r_clx) + 1.0 / (base.in_canopy + r_gsx);

    let resistance = 1.0 / conductance;
    if resistance >= CLOSED_RESISTANCE {
        debug!(
            "surface resistance closed for {} {} ({:?})",
            season, land_use, wetness
        );
        CLOSED_RESISTANCE
    } else {
        resistance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wesely::gases::{HNO3, NO, NO2, O3, SO2};
    use approx::assert_relative_eq;

    #[test]
    fn test_wetness_from_flags() {
        assert_eq!(
            SurfaceWetness::from_flags(false, false).unwrap(),
            SurfaceWetness::Dry
        );
        assert_eq!(
            SurfaceWetness::from_flags(true, false).unwrap(),
            SurfaceWetness::Rain
        );
        assert_eq!(
            SurfaceWetness::from_flags(false, true).unwrap(),
            SurfaceWetness::Dew
        );
        assert!(matches!(
            SurfaceWetness::from_flags(true, true),
            Err(DepositionError::ConflictingSurfaceWetness)
        ));
    }

    #[test]
    fn test_species_class_for_gas() {
        assert_eq!(SpeciesClass::for_gas(&SO2), SpeciesClass::SulfurDioxide);
        assert_eq!(SpeciesClass::for_gas(&O3), SpeciesClass::Ozone);
        assert_eq!(SpeciesClass::for_gas(&NO), SpeciesClass::Other);
    }

    #[test]
    fn test_interpolate_resistance_endpoints() {
        // A species with only SO2-like solubility takes the scaled SO2 value
        assert_relative_eq!(interpolate_resistance(1.0e5, 0.0, 500.0, 200.0), 500.0);
        // A species with only O3-like reactivity takes the O3 value
        assert_relative_eq!(interpolate_resistance(0.0, 1.0, 500.0, 200.0), 200.0);
        // Parallel combination of both
        assert_relative_eq!(
            interpolate_resistance(1.0e5, 1.0, 500.0, 200.0),
            1.0 / (1.0 / 500.0 + 1.0 / 200.0)
        );
    }

    #[test]
    fn test_interpolate_resistance_degenerate() {
        assert!(interpolate_resistance(0.0, 0.0, 100.0, 100.0).is_infinite());
        // A perfect sink in an unweighted endpoint is ignored
        assert_relative_eq!(interpolate_resistance(0.0, 1.0, 0.0, 300.0), 300.0);
        assert_eq!(interpolate_resistance(1.0e5, 0.0, 0.0, 300.0), 0.0);
        assert!(
            interpolate_resistance(0.0, 0.1, FloatValue::INFINITY, FloatValue::INFINITY)
                .is_infinite()
        );
    }

    #[test]
    fn test_stomata_closed() {
        assert!(stomatal_resistance(70.0, 0.0, 25.0, 0.0).is_infinite());
        assert!(stomatal_resistance(70.0, 800.0, -1.0, 0.0).is_infinite());
        assert!(stomatal_resistance(70.0, 800.0, 45.0, 0.0).is_infinite());
        assert!(stomatal_resistance(FloatValue::INFINITY, 800.0, 25.0, 0.0).is_infinite());
        // Facing away from the sun
        assert!(stomatal_resistance(70.0, 800.0, 25.0, std::f64::consts::PI).is_infinite());
        assert!(stomatal_resistance(70.0, 800.0, 25.0, 0.0).is_finite());
    }

    #[test]
    fn test_stomata_open_more_with_light() {
        let dim = stomatal_resistance(70.0, 100.0, 25.0, 0.0);
        let bright = stomatal_resistance(70.0, 800.0, 25.0, 0.0);
        assert!(bright < dim);
    }

    #[test]
    fn test_surface_resistance_bounds() {
        for season in Season::ALL {
            for land_use in LandUse::ALL {
                for wetness in [SurfaceWetness::Dry, SurfaceWetness::Dew, SurfaceWetness::Rain] {
                    for (gas, class) in [
                        (SO2, SpeciesClass::SulfurDioxide),
                        (O3, SpeciesClass::Ozone),
                        (NO, SpeciesClass::Other),
                        (HNO3, SpeciesClass::Other),
                    ] {
                        for &(g, ts) in &[(800.0, 25.0), (0.0, 5.0), (300.0, -10.0), (500.0, 50.0)]
                        {
                            let rc = surface_resistance(
                                &gas, g, ts, 0.0, season, land_use, wetness, class,
                            );
                            assert!(
                                (0.0..=CLOSED_RESISTANCE).contains(&rc),
                                "{} {} {:?} {:?}: {}",
                                season,
                                land_use,
                                wetness,
                                class,
                                rc
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_slope_raises_lower_canopy_resistance_at_night() {
        let rc = |slope| {
            surface_resistance(
                &NO2,
                0.0,
                20.0,
                slope,
                Season::Midsummer,
                LandUse::DeciduousForest,
                SurfaceWetness::Dry,
                SpeciesClass::Other,
            )
        };
        let flat = rc(0.0);
        let sloped = rc(0.1);
        assert!(flat < CLOSED_RESISTANCE);
        assert!(sloped > flat, "flat {}, sloped {}", flat, sloped);
    }

    #[test]
    fn test_insoluble_unreactive_gas_over_water_is_closed() {
        // No solubility and no reactivity leaves only the stomatal pathway,
        // which water does not have.
        let inert = GasProperty::new(1.0, 0.0, crate::wesely::gases::Reactivity::None);
        let rc = surface_resistance(
            &inert,
            800.0,
            25.0,
            0.0,
            Season::Midsummer,
            LandUse::Water,
            SurfaceWetness::Dry,
            SpeciesClass::Other,
        );
        assert_eq!(rc, CLOSED_RESISTANCE);
    }

    #[test]
    fn test_so2_over_water_is_perfect_sink() {
        let rc = surface_resistance(
            &SO2,
            0.0,
            15.0,
            0.0,
            Season::Midsummer,
            LandUse::Water,
            SurfaceWetness::Dry,
            SpeciesClass::SulfurDioxide,
        );
        assert_eq!(rc, 0.0);
    }
}
