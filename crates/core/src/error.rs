//! Error types for U-Pallet.
//!
//! The allocation engine itself never fails; these errors are produced by the
//! validation layer that sits in front of it ([`crate::solver::Solver`]) and by
//! input collectors that build catalogs and orders from user data.

use thiserror::Error;

/// Result type alias for U-Pallet operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while preparing or validating an allocation run.
#[derive(Debug, Error)]
pub enum Error {
    /// A box type has non-positive or non-finite dimensions.
    #[error("Invalid box type '{name}': {reason}")]
    InvalidBoxType {
        /// Name of the offending box type.
        name: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Container bounds are not usable.
    #[error("Invalid container bounds: {0}")]
    InvalidBounds(String),

    /// An order references a box type missing from the catalog.
    #[error("Order references unknown box type '{0}'")]
    UnknownBox(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Malformed user input (order lines, job files).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization error.
    #[cfg(feature = "serde")]
    #[error("Serialization error: {0}")]
    SerializationError(String),
}
