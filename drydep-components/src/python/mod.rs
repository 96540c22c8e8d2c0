use pyo3::prelude::*;
use pyo3::{pymodule, Bound, PyResult};

use drydep_core::create_scheme_builder;

use crate::components::{
    GocartParameters, GocartScheme, ModalAerosolParameters, ModalAerosolScheme,
    SeinfeldParameters, SeinfeldScheme,
};

create_scheme_builder!(GocartSchemeBuilder, GocartScheme, GocartParameters);
create_scheme_builder!(SeinfeldSchemeBuilder, SeinfeldScheme, SeinfeldParameters);
create_scheme_builder!(
    ModalAerosolSchemeBuilder,
    ModalAerosolScheme,
    ModalAerosolParameters
);

#[pymodule]
pub fn components(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<GocartSchemeBuilder>()?;
    m.add_class::<SeinfeldSchemeBuilder>()?;
    m.add_class::<ModalAerosolSchemeBuilder>()?;
    Ok(())
}
