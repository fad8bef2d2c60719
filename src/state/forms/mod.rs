//! Form state management module

mod field;
mod form_state;

pub use field::{FieldValue, FormField};
pub use form_state::{Form, RegistrationForm};
