//! Element-wise evaluation over gridded fields
//!
//! Host models hold meteorology as arrays of any dimension (columns,
//! lat/lon surfaces, tiles). The functions here evaluate a kernel at every
//! element of a set of equally shaped fields and return a field of the same
//! shape. Fields with differing shapes are rejected rather than broadcast.

use crate::errors::{DepositionError, DepositionResult};
use crate::gocart::{self, DepositionSurface};
use crate::scheme::{DepositionScheme, Particle, SurfaceConditions};
use crate::wesely::GasProperty;
use crate::FloatValue;
use log::warn;
use ndarray::{Array, ArrayView, Dimension, Zip};

fn check_shape<D: Dimension>(
    field: &'static str,
    expected: &[usize],
    array: &ArrayView<'_, FloatValue, D>,
) -> DepositionResult<()> {
    if array.shape() != expected {
        return Err(DepositionError::ShapeMismatch {
            field,
            expected: expected.to_vec(),
            found: array.shape().to_vec(),
        });
    }
    Ok(())
}

fn warn_non_finite<D: Dimension>(quantity: &str, values: &Array<FloatValue, D>) {
    let count = values.iter().filter(|v| !v.is_finite()).count();
    if count > 0 {
        warn!(
            "{} of {} {} values are not finite",
            count,
            values.len(),
            quantity
        );
    }
}

/// GOCART gas deposition velocity at every grid point
pub fn gocart_gas_deposition_velocity<D: Dimension>(
    obukhov_length: ArrayView<'_, FloatValue, D>,
    friction_velocity: ArrayView<'_, FloatValue, D>,
    boundary_layer_height: ArrayView<'_, FloatValue, D>,
    roughness_length: ArrayView<'_, FloatValue, D>,
    diffusivity_ratio: FloatValue,
    surface: DepositionSurface,
) -> DepositionResult<Array<FloatValue, D>> {
    let shape = obukhov_length.shape().to_vec();
    check_shape("friction_velocity", &shape, &friction_velocity)?;
    check_shape("boundary_layer_height", &shape, &boundary_layer_height)?;
    check_shape("roughness_length", &shape, &roughness_length)?;

    let velocity = Zip::from(&obukhov_length)
        .and(&friction_velocity)
        .and(&boundary_layer_height)
        .and(&roughness_length)
        .map_collect(|&obk, &ustar, &pblh, &z0| {
            gocart::gas_deposition_velocity(obk, ustar, pblh, z0, diffusivity_ratio, surface)
        });
    warn_non_finite("gas deposition velocity", &velocity);
    Ok(velocity)
}

/// GOCART gravitational settling velocity at every grid point
pub fn gocart_settling_velocity<D: Dimension>(
    temperature: ArrayView<'_, FloatValue, D>,
    pressure: ArrayView<'_, FloatValue, D>,
    radius: FloatValue,
    density: FloatValue,
) -> DepositionResult<Array<FloatValue, D>> {
    check_shape("pressure", temperature.shape(), &pressure)?;

    let velocity = Zip::from(&temperature)
        .and(&pressure)
        .map_collect(|&t, &p| gocart::settling_velocity(radius, density, t, p));
    warn_non_finite("settling velocity", &velocity);
    Ok(velocity)
}

/// GOCART particle deposition velocity at every grid point
#[allow(clippy::too_many_arguments)]
pub fn gocart_particle_deposition_velocity<D: Dimension>(
    obukhov_length: ArrayView<'_, FloatValue, D>,
    friction_velocity: ArrayView<'_, FloatValue, D>,
    temperature: ArrayView<'_, FloatValue, D>,
    boundary_layer_height: ArrayView<'_, FloatValue, D>,
    roughness_length: ArrayView<'_, FloatValue, D>,
    pressure: ArrayView<'_, FloatValue, D>,
    radius: FloatValue,
    density: FloatValue,
) -> DepositionResult<Array<FloatValue, D>> {
    let shape = obukhov_length.shape().to_vec();
    check_shape("friction_velocity", &shape, &friction_velocity)?;
    check_shape("temperature", &shape, &temperature)?;
    check_shape("boundary_layer_height", &shape, &boundary_layer_height)?;
    check_shape("roughness_length", &shape, &roughness_length)?;
    check_shape("pressure", &shape, &pressure)?;

    let settling = gocart_settling_velocity(temperature, pressure, radius, density)?;
    let velocity = Zip::from(&obukhov_length)
        .and(&friction_velocity)
        .and(&boundary_layer_height)
        .and(&roughness_length)
        .and(&settling)
        .map_collect(|&obk, &ustar, &pblh, &z0, &vs| {
            gocart::particle_deposition_velocity_with_settling(obk, ustar, pblh, z0, vs)
        });
    warn_non_finite("particle deposition velocity", &velocity);
    Ok(velocity)
}

fn map_conditions<D, F>(
    conditions: ArrayView<'_, SurfaceConditions, D>,
    quantity: &str,
    kernel: F,
) -> DepositionResult<Array<FloatValue, D>>
where
    D: Dimension,
    F: Fn(&SurfaceConditions) -> DepositionResult<FloatValue>,
{
    let values = conditions
        .iter()
        .map(kernel)
        .collect::<DepositionResult<Vec<_>>>()?;
    let velocity = Array::from_shape_vec(conditions.raw_dim(), values)
        .map_err(|e| DepositionError::Error(e.to_string()))?;
    warn_non_finite(quantity, &velocity);
    Ok(velocity)
}

/// Gas deposition velocity of any scheme over a field of surface conditions
pub fn scheme_gas_deposition_velocity<D: Dimension>(
    scheme: &dyn DepositionScheme,
    conditions: ArrayView<'_, SurfaceConditions, D>,
    gas: &GasProperty,
) -> DepositionResult<Array<FloatValue, D>> {
    map_conditions(conditions, "gas deposition velocity", |c| {
        scheme.gas_deposition_velocity(c, gas)
    })
}

/// Particle deposition velocity of any scheme over a field of surface conditions
pub fn scheme_particle_deposition_velocity<D: Dimension>(
    scheme: &dyn DepositionScheme,
    conditions: ArrayView<'_, SurfaceConditions, D>,
    particle: &Particle,
) -> DepositionResult<Array<FloatValue, D>> {
    map_conditions(conditions, "particle deposition velocity", |c| {
        scheme.particle_deposition_velocity(c, particle)
    })
}

/// Settling velocity of any scheme over a field of surface conditions
pub fn scheme_settling_velocity<D: Dimension>(
    scheme: &dyn DepositionScheme,
    conditions: ArrayView<'_, SurfaceConditions, D>,
    particle: &Particle,
) -> DepositionResult<Array<FloatValue, D>> {
    map_conditions(conditions, "settling velocity", |c| {
        scheme.settling_velocity(c, particle)
    })
}
