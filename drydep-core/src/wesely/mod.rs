//! Land-use and season dependent surface resistance
//!
//! # What This Module Does
//!
//! Implements the bulk surface resistance $R_c$ of Wesely (1989) with the
//! corrections of Walmsley & Wesely (1996). Seven resistance tables indexed
//! by season and land use provide the stomatal, cuticular, in-canopy, ground
//! and lower canopy resistances for SO2 and O3. Any other gas is handled by
//! scaling the stomatal path with its diffusivity ratio and interpolating
//! between the SO2 and O3 tables using its Henry's law coefficient and
//! reactivity factor.
//!
//! # References
//!
//! - Wesely, M. L. (1989). Parameterization of surface resistances to gaseous
//!   dry deposition in regional-scale numerical models. Atmos. Environ. 23,
//!   1293-1304.
//! - Walmsley, J. L. and Wesely, M. L. (1996). Modification of coded
//!   parametrizations of surface resistances to gaseous dry deposition.
//!   Atmos. Environ. 30, 1181-1188.

pub mod gases;
pub mod resistance;
pub mod tables;

pub use gases::{GasProperty, Reactivity};
pub use resistance::{interpolate_resistance, surface_resistance, SpeciesClass, SurfaceWetness};
