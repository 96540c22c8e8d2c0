//! Dry deposition kernels for chemical-transport models
//!
//! This crate maps meteorological and surface properties to dry deposition
//! and gravitational settling velocities. Every routine is a pure function of
//! its inputs; lookup tables are compile-time constants.
//!
//! # Module Organisation
//!
//! - `micromet`: Monin-Obukhov length and stability corrections
//! - `particle`: Continuous-regime particle physics (viscosity, slip, settling)
//! - `gocart`: Simplified resistance model as adopted from WRF/Chem GOCART
//! - `wesely`: Land-use/season surface resistance network (Wesely, 1989)
//! - `seinfeld`: Kinetic-theory resistance model (Seinfeld & Pandis, 2006)
//! - `zhang`: Particle collector parameters by land use (Zhang et al., 2001)
//! - `modal`: Size-resolved deposition for log-normal aerosol modes
//! - `scheme`: Serialisable trait objects selecting a parameterization
//! - `grid`: Element-wise evaluation over gridded fields

pub mod categories;
pub mod constants;
pub mod errors;
pub mod gocart;
pub mod grid;
pub mod micromet;
pub mod modal;
pub mod particle;
pub mod python;
pub mod scheme;
pub mod seinfeld;
pub mod wesely;
pub mod zhang;

/// Floating point type used for all physical quantities
pub type FloatValue = f64;
