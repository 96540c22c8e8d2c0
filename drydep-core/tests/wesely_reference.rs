//! Reference surface resistances for deciduous forest.
//!
//! Values from Wesely (1989) Table 3, updated to Walmsley & Wesely (1996)
//! Table 1. Each row is a season; the columns are solar radiation of
//! 800, 500, 300, 100 and 0 W/m^2 on a dry surface, then dew and rain at
//! night.

use drydep_core::categories::{LandUse, Season};
use drydep_core::wesely::gases::{
    GasProperty, ALD, H2O2, HCHO, HNO2, NH3, NO2, O3, OP, ORA, PAA, PAN, SO2,
};
use drydep_core::wesely::{surface_resistance, SpeciesClass, SurfaceWetness};

type ReferenceTable = [[f64; 7]; 5];

const SO2_RC: ReferenceTable = [
    [130., 140., 160., 380., 1000., 100., 1200.],
    [1400., 1400., 1400., 1400., 1500., 100., 1300.],
    [1100., 1100., 1100., 1100., 1200., 90., 1000.],
    [1000., 1000., 1000., 1000., 1100., 1100., 1100.],
    [270., 290., 330., 620., 1100., 90., 1000.],
];

const O3_RC: ReferenceTable = [
    [100., 110., 130., 320., 960., 960., 580.],
    [430., 470., 520., 710., 1300., 950., 580.],
    [390., 420., 460., 610., 960., 770., 510.],
    [560., 620., 710., 1100., 3200., 3200., 3200.],
    [180., 200., 230., 440., 950., 820., 530.],
];

const NO2_RC: ReferenceTable = [
    [120., 130., 160., 480., 2900., 2700., 2300.],
    [1900., 1900., 1900., 2000., 2700., 2500., 2200.],
    [1700., 1700., 1800., 1900., 2400., 2300., 2000.],
    [3900., 4000., 4100., 4500., 9999., 9999., 9999.],
    [270., 290., 350., 850., 2500., 2300., 2000.],
];

const H2O2_RC: ReferenceTable = [
    [90., 90., 110., 250., 640., 90., 80.],
    [400., 430., 480., 650., 1100., 90., 90.],
    [370., 390., 430., 550., 840., 90., 80.],
    [400., 430., 470., 620., 1000., 1000., 1000.],
    [160., 170., 200., 370., 750., 90., 80.],
];

const ALD_RC: ReferenceTable = [
    [330., 340., 370., 800., 9999., 9999., 9999.],
    [9999., 9999., 9999., 9999., 9999., 9999., 9999.],
    [9999., 9999., 9999., 9999., 9999., 9999., 9999.],
    [9999., 9999., 9999., 9999., 9999., 9999., 9999.],
    [520., 550., 630., 1700., 9999., 9999., 9999.],
];

const HCHO_RC: ReferenceTable = [
    [100., 110., 140., 450., 6700., 1400., 1400.],
    [8700., 8700., 8700., 8700., 8700., 1400., 1400.],
    [8300., 8300., 8300., 8300., 8400., 1400., 1400.],
    [2900., 2900., 2900., 2900., 2900., 2900., 2900.],
    [250., 270., 340., 1000., 7500., 1400., 1400.],
];

const OP_RC: ReferenceTable = [
    [120., 130., 160., 480., 2800., 2500., 2200.],
    [1900., 1900., 1900., 2000., 2700., 2400., 2000.],
    [1700., 1700., 1800., 1800., 2400., 2100., 1900.],
    [3700., 3700., 3800., 4200., 8600., 8600., 8600.],
    [270., 290., 350., 850., 2500., 2200., 1900.],
];

const PAA_RC: ReferenceTable = [
    [150., 160., 200., 580., 2800., 2400., 2000.],
    [1900., 1900., 1900., 2000., 2700., 2200., 1900.],
    [1700., 1700., 1700., 1800., 2400., 2000., 1800.],
    [3400., 3400., 3500., 3800., 7200., 7200., 7200.],
    [330., 350., 420., 960., 2400., 2100., 1800.],
];

const ORA_RC: ReferenceTable = [
    [30., 30., 30., 40., 50., 10., 10.],
    [140., 140., 150., 170., 190., 10., 10.],
    [130., 140., 140., 160., 180., 10., 10.],
    [310., 340., 390., 550., 910., 910., 910.],
    [60., 60., 70., 80., 90., 10., 10.],
];

const NH3_RC: ReferenceTable = [
    [80., 80., 100., 320., 2700., 430., 430.],
    [3400., 3400., 3400., 3400., 3400., 440., 440.],
    [3000., 3000., 3000., 3000., 3100., 430., 430.],
    [1500., 1500., 1500., 1500., 1500., 1500., 1500.],
    [180., 200., 240., 680., 2800., 430., 430.],
];

const PAN_RC: ReferenceTable = [
    [190., 210., 250., 700., 2900., 2700., 2300.],
    [1900., 1900., 1900., 2000., 2700., 2500., 2200.],
    [1700., 1700., 1800., 1900., 2400., 2300., 2000.],
    [3900., 4000., 4100., 4500., 9999., 9999., 9999.],
    [410., 430., 510., 1100., 2500., 2300., 2000.],
];

const HNO2_RC: ReferenceTable = [
    [110., 120., 140., 330., 950., 90., 90.],
    [1000., 1000., 1000., 1100., 1400., 90., 90.],
    [860., 860., 870., 910., 1100., 90., 90.],
    [820., 830., 830., 870., 1000., 1000., 1000.],
    [220., 240., 280., 530., 1000., 90., 90.],
];

/// Surface temperature per season (C)
const SURFACE_TEMPERATURE: [f64; 5] = [25.0, 10.0, 2.0, 0.0, 10.0];
/// Solar radiation for the dry cases (W/m^2)
const SOLAR_RADIATION: [f64; 5] = [800.0, 500.0, 300.0, 100.0, 0.0];

/// Published values are rounded to two significant figures
fn different(computed: f64, expected: f64) -> bool {
    let c = (computed - expected).abs();
    c / expected > 0.1 && c >= 11.0
}

fn check_species(name: &str, gas: GasProperty, class: SpeciesClass, expected: &ReferenceTable) {
    let mut failures = Vec::new();
    for season in Season::ALL {
        let row = &expected[season.index()];
        let ts = SURFACE_TEMPERATURE[season.index()];

        let mut cases: Vec<(String, f64, SurfaceWetness)> = SOLAR_RADIATION
            .iter()
            .map(|&g| (format!("G={}", g), g, SurfaceWetness::Dry))
            .collect();
        cases.push(("dew".to_string(), 0.0, SurfaceWetness::Dew));
        cases.push(("rain".to_string(), 0.0, SurfaceWetness::Rain));

        for ((label, g, wetness), &reference) in cases.into_iter().zip(row.iter()) {
            let rc = surface_resistance(
                &gas,
                g,
                ts,
                0.0,
                season,
                LandUse::DeciduousForest,
                wetness,
                class,
            );
            if different(rc, reference) {
                failures.push(format!(
                    "{} {} {}: {:.0} vs {}",
                    name, season, label, rc, reference
                ));
            }
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn test_so2() {
    check_species("SO2", SO2, SpeciesClass::SulfurDioxide, &SO2_RC);
}

#[test]
fn test_o3() {
    check_species("O3", O3, SpeciesClass::Ozone, &O3_RC);
}

#[test]
fn test_interpolated_species() {
    let species = [
        ("NO2", NO2, &NO2_RC),
        ("H2O2", H2O2, &H2O2_RC),
        ("ALD", ALD, &ALD_RC),
        ("HCHO", HCHO, &HCHO_RC),
        ("OP", OP, &OP_RC),
        ("PAA", PAA, &PAA_RC),
        ("ORA", ORA, &ORA_RC),
        ("NH3", NH3, &NH3_RC),
        ("PAN", PAN, &PAN_RC),
        ("HNO2", HNO2, &HNO2_RC),
    ];
    for (name, gas, expected) in species {
        check_species(name, gas, SpeciesClass::Other, expected);
    }
}
