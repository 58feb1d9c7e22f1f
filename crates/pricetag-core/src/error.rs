//! Pricing error types.

use thiserror::Error;

/// Errors raised while parsing user-supplied pricing input.
///
/// Quote computation itself never fails; these only surface from the
/// strict parsing helpers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Currency code not recognized.
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Date string could not be parsed.
    #[error("Invalid offer date: {0}")]
    InvalidDate(String),
}
