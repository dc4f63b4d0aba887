//! Error types for metadata-row ingestion.
//!
//! The metadata records themselves never fail; these errors come from
//! reading raw rows into them.

use thiserror::Error;

/// Result type alias for metadata operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for metadata operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required label is not present in the row header.
    #[error("Column not found: {name}")]
    ColumnNotFound { name: String },

    /// A required cell holds NULL.
    #[error("Unexpected NULL value in column {column}")]
    NullValue { column: String },

    /// A cell could not be read as the requested type.
    #[error("Type conversion error: {message}")]
    TypeConversion { message: String },

    /// Unknown vendor-neutral SQL type code.
    #[error("Unsupported SQL type code: {type_code}")]
    UnsupportedType { type_code: i32 },
}

impl Error {
    /// Create a column-not-found error.
    pub fn column_not_found(name: impl Into<String>) -> Self {
        Self::ColumnNotFound { name: name.into() }
    }

    /// Create a NULL value error.
    pub fn null_value(column: impl Into<String>) -> Self {
        Self::NullValue {
            column: column.into(),
        }
    }

    /// Create a type conversion error.
    pub fn type_conversion(message: impl Into<String>) -> Self {
        Self::TypeConversion {
            message: message.into(),
        }
    }
}
