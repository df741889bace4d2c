use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
/// Catalog error
pub enum CatalogError {
    #[error("product should not be null")]
    InvalidInput,

    #[error("product should be a record or a key/value mapping, got: {0}")]
    UnsupportedInputShape(String),

    #[error("invalid value for field '{field}': {reason}")]
    InvalidFieldValue { field: String, reason: String },

    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("XML rendering from: {0}")]
    Render(String),
}
