//! Error types for sqlchain
//!
//! The query builder itself never fails: gated calls silently no-op and
//! malformed combinations render malformed SQL. Errors only surface at the
//! edges, when parsing configuration or encoding values for a driver.

use thiserror::Error;

/// Result type alias for sqlchain operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types raised outside the builder core
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Dialect name not recognized
    #[error("Unknown dialect: {0}")]
    UnknownDialect(String),

    /// Bound value kind cannot be encoded as the requested database type
    #[error("Type mismatch: cannot encode {kind} value as {ty}")]
    TypeMismatch { kind: &'static str, ty: String },

    /// Integer does not fit the requested database integer type
    #[error("Integer {value} out of range for {ty}")]
    IntOutOfRange { value: i64, ty: String },

    /// Finite float overflows the requested database float type
    #[error("Float {value} out of range for {ty}")]
    FloatOutOfRange { value: f64, ty: String },
}

impl Error {
    /// Create a type mismatch error
    pub fn type_mismatch(kind: &'static str, ty: impl Into<String>) -> Self {
        Self::TypeMismatch {
            kind,
            ty: ty.into(),
        }
    }

    /// Check if this is a type mismatch error
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }
}
