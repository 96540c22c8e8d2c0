//! Macros for exposing deposition schemes to Python

use crate::scheme::{DepositionScheme, Particle, SurfaceConditions};
use crate::wesely::GasProperty;
use crate::FloatValue;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::sync::Arc;

/// Create a scheme builder that python can use to instantiate schemes written in Rust.
#[macro_export]
macro_rules! create_scheme_builder {
    ($builder_name:ident, $rust_scheme:ty, $scheme_parameters:ty) => {
        #[pyclass]
        pub struct $builder_name {
            parameters: $scheme_parameters,
        }

        #[pymethods]
        impl $builder_name {
            #[staticmethod]
            pub fn from_parameters(parameters: Bound<PyAny>) -> PyResult<Self> {
                use pyo3::exceptions::PyValueError;

                let parameters = pythonize::depythonize::<$scheme_parameters>(&parameters);
                match parameters {
                    Ok(parameters) => Ok(Self { parameters }),
                    Err(e) => Err(PyValueError::new_err(format!("{}", e))),
                }
            }
            pub fn build(&self) -> $crate::python::scheme::PyRustScheme {
                $crate::python::scheme::PyRustScheme(std::sync::Arc::new(
                    <$rust_scheme>::from_parameters(self.parameters.clone()),
                ))
            }
        }
    };
}

/// Surface conditions from an optional dict, missing keys taking their defaults
fn extract_conditions(conditions: Option<Bound<'_, PyAny>>) -> PyResult<SurfaceConditions> {
    match conditions {
        None => Ok(SurfaceConditions::default()),
        Some(conditions) => pythonize::depythonize::<SurfaceConditions>(&conditions)
            .map_err(|e| PyValueError::new_err(format!("{}", e))),
    }
}

/// Python wrapper for a deposition scheme defined in Rust
///
/// Instances are created via the builder associated with each scheme.
#[derive(Debug, Clone)]
#[pyclass]
#[pyo3(name = "RustScheme")]
pub struct PyRustScheme(pub Arc<dyn DepositionScheme>);

#[pymethods]
impl PyRustScheme {
    #[pyo3(signature = (gas, conditions=None))]
    fn gas_deposition_velocity(
        &self,
        gas: String,
        conditions: Option<Bound<'_, PyAny>>,
    ) -> PyResult<FloatValue> {
        let gas = GasProperty::from_name(&gas)?;
        let conditions = extract_conditions(conditions)?;
        Ok(self.0.gas_deposition_velocity(&conditions, &gas)?)
    }

    #[pyo3(signature = (diameter, density, conditions=None))]
    fn particle_deposition_velocity(
        &self,
        diameter: FloatValue,
        density: FloatValue,
        conditions: Option<Bound<'_, PyAny>>,
    ) -> PyResult<FloatValue> {
        let conditions = extract_conditions(conditions)?;
        Ok(self
            .0
            .particle_deposition_velocity(&conditions, &Particle::new(diameter, density))?)
    }

    #[pyo3(signature = (diameter, density, conditions=None))]
    fn settling_velocity(
        &self,
        diameter: FloatValue,
        density: FloatValue,
        conditions: Option<Bound<'_, PyAny>>,
    ) -> PyResult<FloatValue> {
        let conditions = extract_conditions(conditions)?;
        Ok(self
            .0
            .settling_velocity(&conditions, &Particle::new(diameter, density))?)
    }

    fn __repr__(&self) -> String {
        format!("RustScheme({:?})", self.0)
    }
}
