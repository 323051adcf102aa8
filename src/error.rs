//! Errors raised while setting up a currency or parsing an amount pattern.
//!
//! Valuing an unknown token or an empty slot is not an error: those simply
//! have no value in a given currency.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The fractional digit count is negative, or too large for the cent unit
    /// to fit in an `i64`.
    #[error("invalid currency: {0}")]
    InvalidCurrency(String),
    /// A denomination was given a negative cent value.
    #[error("invalid denomination: negative value {0}")]
    InvalidDenomination(i64),
    /// An amount pattern could not be parsed.
    #[error("invalid format pattern: {0}")]
    InvalidFormatPattern(String),
}

pub type Result<T> = std::result::Result<T, Error>;

