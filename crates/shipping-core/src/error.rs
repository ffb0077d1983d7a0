//! Shipping error types.

use thiserror::Error;

/// Errors that can occur while resolving a shipping quote.
///
/// An unmatched postal code is not an error: the resolver answers it with
/// the fallback decision.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShippingError {
    /// Query input rejected before any computation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Currency mismatch between the query and the reference data.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Invalid resolver configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ShippingError>;
