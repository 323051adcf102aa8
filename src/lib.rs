//! Denominated token currencies.
//!
//! A [Currency] counts value in cents and is carried by physical tokens, each
//! registered as a [Denomination] with a fixed value. The core can value any
//! stack of tokens, convert between cents and display values, and print an
//! amount as a greedy list of denominations (`3 gold, 5 silver, 0.12 copper`).
//!
//! Storing, moving, or exchanging tokens is left to the host.
//!
//! [Currency]: models/currency/struct.Currency.html
//! [Denomination]: models/denomination/struct.Denomination.html

#[macro_use]
mod util;
pub mod error;
pub mod format;
pub mod models;
#[cfg(feature = "with_serde")]
pub mod config;

pub use models::{
    currency::Currency,
    denomination::Denomination,
    stack::{ItemStack, Stack},
};
