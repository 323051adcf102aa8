//! A denomination binds one kind of token (a gold coin, an emerald, a shell)
//! to a fixed value in cents and the names used when printing amounts.
//!
//! Denominations are owned by their [Currency], which keeps them sorted from
//! highest to lowest value.
//!
//! [Currency]: ../currency/struct.Currency.html

use crate::error::{Error, Result};
use getset::Getters;
use rust_decimal::prelude::*;
#[cfg(feature = "with_serde")]
use serde_derive::Serialize;
use std::cmp::Ordering;

/// One token kind and its value.
#[derive(Clone, Debug, PartialEq, Getters)]
#[cfg_attr(feature = "with_serde", derive(Serialize))]
#[getset(get = "pub")]
pub struct Denomination<K> {
    /// The token kind this denomination matches, regardless of quantity
    kind: K,
    /// Value of a single token, in cents
    value: i64,
    /// Singular display name. Empty means the denomination is unnamed and will
    /// not show up in formatted amounts.
    name: String,
    /// Plural display name
    name_plural: String,
}

impl<K> Denomination<K> {
    /// Create a new denomination. Fails if `value` is negative.
    pub fn new<T, P>(kind: K, value: i64, name: T, name_plural: P) -> Result<Self>
        where T: Into<String>,
              P: Into<String>,
    {
        if value < 0 {
            Err(Error::InvalidDenomination(value))?;
        }
        Ok(Self {
            kind,
            value,
            name: name.into(),
            name_plural: name_plural.into(),
        })
    }

    /// Whether this denomination has a display name.
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }

    /// Order two denominations by descending value, so that sorting a list of
    /// them puts the most valuable first.
    pub fn cmp_by_value(&self, other: &Self) -> Ordering {
        other.value.cmp(&self.value)
    }

    /// The value of one token expressed in display units, given the currency's
    /// unit.
    pub fn display_value(&self, unit: i64) -> Decimal {
        Decimal::from(self.value) / Decimal::from(unit)
    }

    /// Pick the singular or plural name for an amount.
    pub fn name_for(&self, amount: Decimal) -> &str {
        if amount == Decimal::one() {
            &self.name
        } else {
            &self.name_plural
        }
    }
}

impl<K: PartialEq> Denomination<K> {
    /// Test whether the given token kind is an instance of this denomination.
    pub fn is_denomination_of(&self, kind: &K) -> bool {
        &self.kind == kind
    }
}
