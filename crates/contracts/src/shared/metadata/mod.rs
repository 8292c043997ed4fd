//! Field metadata for catalog forms
//!
//! Forms declare their schema as static tables of `ValidationRules`; the
//! rules validate the raw text a widget produced.

mod field_type;
mod validation;

pub use field_type::FieldType;
pub use validation::ValidationRules;
