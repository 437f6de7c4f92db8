use thiserror::Error;

/// A decoded event record could not be parsed into a typed payload.
///
/// This is the only place numeric coercion happens; a [`ParseError`] means
/// a required key was missing, or a value could not be coerced to its
/// declared type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing required field {0:?}")]
    MissingField(&'static str),
    #[error("field {field:?} has unexpected value {value:?}")]
    InvalidField { field: &'static str, value: String },
}
