//! Resistance lookup tables of Wesely (1989) Table 3
//!
//! Rows are indexed by [`Season`], columns by [`LandUse`]. Entries equal to
//! [`CLOSED_RESISTANCE`] mark pathways that do not exist for that surface.
//! Zero entries are perfect sinks (ground uptake of SO2 by water) or a
//! missing in-canopy transfer step (water and barren land).
//!
//! All values in s/m.

use crate::categories::{LandUse, Season};
use crate::constants::CLOSED_RESISTANCE;
use crate::FloatValue;

/// A seasonal land-use resistance table
pub type ResistanceTable = [[FloatValue; 11]; 5];

/// Minimum bulk canopy stomatal resistance for water vapour, $r_i$
pub const R_I: ResistanceTable = [
    [9999., 60., 120., 70., 130., 100., 9999., 9999., 80., 100., 150.],
    [9999., 9999., 9999., 9999., 250., 500., 9999., 9999., 9999., 9999., 9999.],
    [9999., 9999., 9999., 9999., 250., 500., 9999., 9999., 9999., 9999., 9999.],
    [9999., 9999., 9999., 9999., 400., 800., 9999., 9999., 9999., 9999., 9999.],
    [9999., 120., 240., 140., 250., 190., 9999., 9999., 160., 200., 300.],
];

/// Leaf cuticle resistance in healthy vegetation, otherwise the outer
/// surfaces of the upper canopy, $r_{lu}$
pub const R_LU: ResistanceTable = [
    [9999., 2000., 2000., 2000., 2000., 2000., 9999., 9999., 2500., 2000., 4000.],
    [9999., 9000., 9000., 9000., 4000., 8000., 9999., 9999., 9000., 9000., 9000.],
    [9999., 9999., 9000., 9000., 4000., 8000., 9999., 9999., 9000., 9000., 9000.],
    [9999., 9999., 9999., 9999., 6000., 9000., 9999., 9999., 9000., 9000., 9000.],
    [9999., 4000., 4000., 4000., 2000., 3000., 9999., 9999., 4000., 4000., 8000.],
];

/// In-canopy transfer depending only on canopy height and density, $r_{ac}$
pub const R_AC: ResistanceTable = [
    [100., 200., 100., 2000., 2000., 2000., 0., 0., 300., 150., 200.],
    [100., 150., 100., 1500., 2000., 1700., 0., 0., 200., 120., 140.],
    [100., 10., 100., 1000., 2000., 1500., 0., 0., 100., 50., 120.],
    [100., 10., 10., 1000., 2000., 1500., 0., 0., 50., 10., 50.],
    [100., 50., 80., 1200., 2000., 1500., 0., 0., 200., 60., 120.],
];

/// SO2 uptake at the ground by soil, leaf litter, snow, water, $r_{gsS}$
pub const R_GS_SO2: ResistanceTable = [
    [400., 150., 350., 500., 500., 100., 0., 1000., 0., 220., 400.],
    [400., 200., 350., 500., 500., 100., 0., 1000., 0., 300., 400.],
    [400., 150., 350., 500., 500., 200., 0., 1000., 0., 200., 400.],
    [100., 100., 100., 100., 100., 100., 0., 1000., 100., 100., 50.],
    [500., 150., 350., 500., 500., 200., 0., 1000., 0., 250., 400.],
];

/// O3 uptake at the ground, $r_{gsO}$
pub const R_GS_O3: ResistanceTable = [
    [300., 150., 200., 200., 200., 300., 2000., 400., 1000., 180., 200.],
    [300., 150., 200., 200., 200., 300., 2000., 400., 800., 180., 200.],
    [300., 150., 200., 200., 200., 300., 2000., 400., 1000., 180., 200.],
    [600., 3500., 3500., 3500., 3500., 3500., 2000., 400., 3500., 3500., 3500.],
    [300., 150., 200., 200., 200., 300., 2000., 400., 1000., 180., 200.],
];

/// SO2 uptake by leaves, twigs and bark in the lower canopy, $r_{clS}$
pub const R_CL_SO2: ResistanceTable = [
    [9999., 2000., 2000., 2000., 2000., 2000., 9999., 9999., 2500., 2000., 4000.],
    [9999., 9000., 9000., 9000., 2000., 4000., 9999., 9999., 9000., 9000., 9000.],
    [9999., 9999., 9000., 9000., 3000., 6000., 9999., 9999., 9000., 9000., 9000.],
    [9999., 9999., 9999., 9000., 200., 400., 9999., 9999., 9000., 9999., 9000.],
    [9999., 4000., 4000., 4000., 2000., 3000., 9999., 9999., 4000., 4000., 8000.],
];

/// O3 uptake in the lower canopy, $r_{clO}$
pub const R_CL_O3: ResistanceTable = [
    [9999., 1000., 1000., 1000., 1000., 1000., 9999., 9999., 1000., 1000., 1000.],
    [9999., 400., 400., 400., 1000., 600., 9999., 9999., 400., 400., 400.],
    [9999., 1000., 400., 400., 1000., 600., 9999., 9999., 800., 600., 600.],
    [9999., 1000., 1000., 400., 1500., 600., 9999., 9999., 800., 1000., 800.],
    [9999., 1000., 500., 500., 1500., 700., 9999., 9999., 600., 800., 800.],
];

/// All base resistances for a single season and land use
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseResistances {
    pub stomatal: FloatValue,
    pub cuticular: FloatValue,
    pub in_canopy: FloatValue,
    pub ground_so2: FloatValue,
    pub ground_o3: FloatValue,
    pub lower_canopy_so2: FloatValue,
    pub lower_canopy_o3: FloatValue,
}

impl BaseResistances {
    /// Look up the base resistances, converting closed pathways to infinity
    pub fn lookup(season: Season, land_use: LandUse) -> Self {
        let (i, j) = (season.index(), land_use.index());
        Self {
            stomatal: open_or_infinite(R_I[i][j]),
            cuticular: open_or_infinite(R_LU[i][j]),
            in_canopy: open_or_infinite(R_AC[i][j]),
            ground_so2: open_or_infinite(R_GS_SO2[i][j]),
            ground_o3: open_or_infinite(R_GS_O3[i][j]),
            lower_canopy_so2: open_or_infinite(R_CL_SO2[i][j]),
            lower_canopy_o3: open_or_infinite(R_CL_O3[i][j]),
        }
    }
}

/// Map the closed-pathway sentinel to an infinite resistance
pub fn open_or_infinite(resistance: FloatValue) -> FloatValue {
    if resistance >= CLOSED_RESISTANCE {
        FloatValue::INFINITY
    } else {
        resistance
    }
}
