mod gocart;
mod modal;
mod seinfeld;

pub use gocart::{GocartParameters, GocartScheme, SettlingFormula};
pub use modal::{ModalAerosolParameters, ModalAerosolScheme, MomentWeighting};
pub use seinfeld::{SeinfeldParameters, SeinfeldScheme};
