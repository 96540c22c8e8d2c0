//! Python bindings for the deposition kernels
//!
//! Category arguments (season, land use, surface) are passed as their
//! snake_case names.

use crate::categories::{LandUse, Season};
use crate::errors::DepositionError;
use crate::gocart::{self, DepositionSurface};
use crate::modal::{self, AerosolMode, ConvectiveCorrection, ModalEnvironment, ModeKind};
use crate::wesely::{self, GasProperty, SpeciesClass, SurfaceWetness};
use crate::zhang::ZhangLandUse;
use crate::{grid, micromet, seinfeld, FloatValue};
use numpy::{PyArrayDyn, PyReadonlyArrayDyn};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

pub mod scheme;

pub use scheme::PyRustScheme;

impl From<DepositionError> for PyErr {
    fn from(err: DepositionError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

fn parse_surface(surface: Option<String>) -> PyResult<DepositionSurface> {
    Ok(surface
        .as_deref()
        .map(str::parse::<DepositionSurface>)
        .transpose()?
        .unwrap_or_default())
}

/// Monin-Obukhov length (m) from the surface sensible heat flux
#[pyfunction]
pub fn obukhov_length(
    heat_flux: FloatValue,
    air_density: FloatValue,
    surface_temperature: FloatValue,
    friction_velocity: FloatValue,
) -> FloatValue {
    micromet::obukhov_length(
        heat_flux,
        air_density,
        surface_temperature,
        friction_velocity,
    )
}

/// H2O-to-gas diffusivity ratio of a species tabulated by GOCART
#[pyfunction]
pub fn diffusivity_ratio(species: String) -> Option<FloatValue> {
    gocart::diffusivity_ratio(&species)
}

/// GOCART gas dry deposition velocity (m/s)
#[pyfunction]
#[pyo3(signature = (obukhov_length, friction_velocity, boundary_layer_height, roughness_length, diffusivity_ratio, surface=None))]
pub fn gocart_gas_deposition_velocity(
    obukhov_length: FloatValue,
    friction_velocity: FloatValue,
    boundary_layer_height: FloatValue,
    roughness_length: FloatValue,
    diffusivity_ratio: FloatValue,
    surface: Option<String>,
) -> PyResult<FloatValue> {
    let surface = parse_surface(surface)?;
    Ok(gocart::gas_deposition_velocity(
        obukhov_length,
        friction_velocity,
        boundary_layer_height,
        roughness_length,
        diffusivity_ratio,
        surface,
    ))
}

/// GOCART particle dry deposition velocity including settling (m/s)
#[pyfunction]
#[allow(clippy::too_many_arguments)]
pub fn gocart_particle_deposition_velocity(
    obukhov_length: FloatValue,
    friction_velocity: FloatValue,
    temperature: FloatValue,
    boundary_layer_height: FloatValue,
    roughness_length: FloatValue,
    radius: FloatValue,
    density: FloatValue,
    pressure: FloatValue,
) -> FloatValue {
    gocart::particle_deposition_velocity(
        obukhov_length,
        friction_velocity,
        temperature,
        boundary_layer_height,
        roughness_length,
        radius,
        density,
        pressure,
    )
}

/// GOCART gravitational settling velocity (m/s)
#[pyfunction]
pub fn gocart_settling_velocity(
    radius: FloatValue,
    density: FloatValue,
    temperature: FloatValue,
    pressure: FloatValue,
) -> FloatValue {
    gocart::settling_velocity(radius, density, temperature, pressure)
}

/// Wesely (1989) bulk surface resistance (s/m) of a named gas
///
/// `surface_temperature` is in degrees Celsius.
#[pyfunction]
#[pyo3(signature = (gas, solar_radiation, surface_temperature, slope, season, land_use, is_raining=false, is_dew=false))]
#[allow(clippy::too_many_arguments)]
pub fn surface_resistance(
    gas: String,
    solar_radiation: FloatValue,
    surface_temperature: FloatValue,
    slope: FloatValue,
    season: String,
    land_use: String,
    is_raining: bool,
    is_dew: bool,
) -> PyResult<FloatValue> {
    let gas = GasProperty::from_name(&gas)?;
    Ok(wesely::surface_resistance(
        &gas,
        solar_radiation,
        surface_temperature,
        slope,
        season.parse::<Season>()?,
        land_use.parse::<LandUse>()?,
        SurfaceWetness::from_flags(is_raining, is_dew)?,
        SpeciesClass::for_gas(&gas),
    ))
}

/// Seinfeld & Pandis gas dry deposition velocity (m/s)
#[pyfunction]
#[pyo3(signature = (gas, reference_height, roughness_length, friction_velocity, obukhov_length, temperature, air_density, solar_radiation, slope, season, land_use, is_raining=false, is_dew=false))]
#[allow(clippy::too_many_arguments)]
pub fn seinfeld_gas_deposition_velocity(
    gas: String,
    reference_height: FloatValue,
    roughness_length: FloatValue,
    friction_velocity: FloatValue,
    obukhov_length: FloatValue,
    temperature: FloatValue,
    air_density: FloatValue,
    solar_radiation: FloatValue,
    slope: FloatValue,
    season: String,
    land_use: String,
    is_raining: bool,
    is_dew: bool,
) -> PyResult<FloatValue> {
    let gas = GasProperty::from_name(&gas)?;
    Ok(seinfeld::dry_dep_gas(
        reference_height,
        roughness_length,
        friction_velocity,
        obukhov_length,
        temperature,
        air_density,
        solar_radiation,
        slope,
        &gas,
        season.parse::<Season>()?,
        land_use.parse::<LandUse>()?,
        SurfaceWetness::from_flags(is_raining, is_dew)?,
        SpeciesClass::for_gas(&gas),
    ))
}

/// Seinfeld & Pandis particle dry deposition velocity (m/s)
///
/// `land_use` names a Zhang et al. (2001) category.
#[pyfunction]
#[allow(clippy::too_many_arguments)]
pub fn seinfeld_particle_deposition_velocity(
    reference_height: FloatValue,
    roughness_length: FloatValue,
    friction_velocity: FloatValue,
    obukhov_length: FloatValue,
    diameter: FloatValue,
    temperature: FloatValue,
    pressure: FloatValue,
    particle_density: FloatValue,
    air_density: FloatValue,
    season: String,
    land_use: String,
) -> PyResult<FloatValue> {
    let season: Season = season.parse()?;
    let land_use: ZhangLandUse = land_use.parse()?;
    Ok(seinfeld::dry_dep_particle(
        reference_height,
        roughness_length,
        friction_velocity,
        obukhov_length,
        diameter,
        temperature,
        pressure,
        particle_density,
        air_density,
        season,
        land_use,
    ))
}

/// Number and mass weighted velocities for each of the three aerosol modes
///
/// Returns `(deposition, sedimentation)`, each a list of `(number, mass)`
/// pairs ordered nucleation, accumulation, coarse.
#[pyfunction]
#[pyo3(signature = (temperature, pressure, air_density, friction_velocity, roughness_length, aerodynamic_resistance, diameters, geometric_std_devs, density, boundary_layer_height=None, obukhov_length=None))]
#[allow(clippy::too_many_arguments)]
pub fn modal_velocities(
    temperature: FloatValue,
    pressure: FloatValue,
    air_density: FloatValue,
    friction_velocity: FloatValue,
    roughness_length: FloatValue,
    aerodynamic_resistance: FloatValue,
    diameters: [FloatValue; 3],
    geometric_std_devs: [FloatValue; 3],
    density: FloatValue,
    boundary_layer_height: Option<FloatValue>,
    obukhov_length: Option<FloatValue>,
) -> PyResult<(Vec<(FloatValue, FloatValue)>, Vec<(FloatValue, FloatValue)>)> {
    let mut environment = ModalEnvironment::new(
        temperature,
        pressure,
        air_density,
        friction_velocity,
        roughness_length,
        aerodynamic_resistance,
    );
    if let (Some(pblh), Some(obk)) = (boundary_layer_height, obukhov_length) {
        environment = environment.with_convective_correction(
            ConvectiveCorrection::Wesely1985,
            pblh,
            1.0 / obk,
        );
    }

    let mode = |i: usize| {
        AerosolMode::new(
            ModeKind::ALL[i],
            diameters[i],
            geometric_std_devs[i],
            density,
            environment.mean_free_path,
        )
    };
    let modes = [mode(0)?, mode(1)?, mode(2)?];

    let result = modal::modal_velocities(&modes, &environment);
    let pairs = |v: &[modal::ModeVelocities; 3]| -> Vec<(FloatValue, FloatValue)> {
        v.iter().map(|m| (m.number, m.mass)).collect()
    };
    Ok((pairs(&result.deposition), pairs(&result.sedimentation)))
}

/// GOCART gas deposition velocity over arrays of any shape
#[pyfunction]
#[pyo3(signature = (obukhov_length, friction_velocity, boundary_layer_height, roughness_length, diffusivity_ratio, surface=None))]
pub fn gocart_gas_deposition_velocity_grid<'py>(
    py: Python<'py>,
    obukhov_length: PyReadonlyArrayDyn<'py, FloatValue>,
    friction_velocity: PyReadonlyArrayDyn<'py, FloatValue>,
    boundary_layer_height: PyReadonlyArrayDyn<'py, FloatValue>,
    roughness_length: PyReadonlyArrayDyn<'py, FloatValue>,
    diffusivity_ratio: FloatValue,
    surface: Option<String>,
) -> PyResult<Bound<'py, PyArrayDyn<FloatValue>>> {
    let velocity = grid::gocart_gas_deposition_velocity(
        obukhov_length.as_array(),
        friction_velocity.as_array(),
        boundary_layer_height.as_array(),
        roughness_length.as_array(),
        diffusivity_ratio,
        parse_surface(surface)?,
    )?;
    Ok(PyArrayDyn::from_owned_array_bound(py, velocity))
}

/// GOCART particle deposition velocity over arrays of any shape
#[pyfunction]
#[allow(clippy::too_many_arguments)]
pub fn gocart_particle_deposition_velocity_grid<'py>(
    py: Python<'py>,
    obukhov_length: PyReadonlyArrayDyn<'py, FloatValue>,
    friction_velocity: PyReadonlyArrayDyn<'py, FloatValue>,
    temperature: PyReadonlyArrayDyn<'py, FloatValue>,
    boundary_layer_height: PyReadonlyArrayDyn<'py, FloatValue>,
    roughness_length: PyReadonlyArrayDyn<'py, FloatValue>,
    pressure: PyReadonlyArrayDyn<'py, FloatValue>,
    radius: FloatValue,
    density: FloatValue,
) -> PyResult<Bound<'py, PyArrayDyn<FloatValue>>> {
    let velocity = grid::gocart_particle_deposition_velocity(
        obukhov_length.as_array(),
        friction_velocity.as_array(),
        temperature.as_array(),
        boundary_layer_height.as_array(),
        roughness_length.as_array(),
        pressure.as_array(),
        radius,
        density,
    )?;
    Ok(PyArrayDyn::from_owned_array_bound(py, velocity))
}

/// GOCART settling velocity over arrays of any shape
#[pyfunction]
pub fn gocart_settling_velocity_grid<'py>(
    py: Python<'py>,
    temperature: PyReadonlyArrayDyn<'py, FloatValue>,
    pressure: PyReadonlyArrayDyn<'py, FloatValue>,
    radius: FloatValue,
    density: FloatValue,
) -> PyResult<Bound<'py, PyArrayDyn<FloatValue>>> {
    let velocity = grid::gocart_settling_velocity(
        temperature.as_array(),
        pressure.as_array(),
        radius,
        density,
    )?;
    Ok(PyArrayDyn::from_owned_array_bound(py, velocity))
}

/// Names of the seasonal categories
#[pyfunction]
pub fn seasons() -> Vec<&'static str> {
    Season::ALL.iter().map(|s| s.name()).collect()
}

/// Names of the Wesely land-use categories
#[pyfunction]
pub fn land_uses() -> Vec<&'static str> {
    LandUse::ALL.iter().map(|l| l.name()).collect()
}

#[pymodule]
pub fn core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyRustScheme>()?;
    m.add_function(wrap_pyfunction!(obukhov_length, m)?)?;
    m.add_function(wrap_pyfunction!(diffusivity_ratio, m)?)?;
    m.add_function(wrap_pyfunction!(gocart_gas_deposition_velocity, m)?)?;
    m.add_function(wrap_pyfunction!(gocart_particle_deposition_velocity, m)?)?;
    m.add_function(wrap_pyfunction!(gocart_settling_velocity, m)?)?;
    m.add_function(wrap_pyfunction!(surface_resistance, m)?)?;
    m.add_function(wrap_pyfunction!(seinfeld_gas_deposition_velocity, m)?)?;
    m.add_function(wrap_pyfunction!(seinfeld_particle_deposition_velocity, m)?)?;
    m.add_function(wrap_pyfunction!(modal_velocities, m)?)?;
    m.add_function(wrap_pyfunction!(gocart_gas_deposition_velocity_grid, m)?)?;
    m.add_function(wrap_pyfunction!(
        gocart_particle_deposition_velocity_grid,
        m
    )?)?;
    m.add_function(wrap_pyfunction!(gocart_settling_velocity_grid, m)?)?;
    m.add_function(wrap_pyfunction!(seasons, m)?)?;
    m.add_function(wrap_pyfunction!(land_uses, m)?)?;
    Ok(())
}
