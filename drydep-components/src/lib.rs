//! Configurable dry deposition schemes
//!
//! Each scheme wraps one family of kernels from `drydep-core` behind the
//! [`drydep_core::scheme::DepositionScheme`] trait, with a serialisable
//! parameter struct so that schemes can be selected from TOML or Python.

pub mod components;
pub mod config;
pub mod python;
