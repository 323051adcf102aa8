//! Currency definitions as they come out of the host's configuration.
//!
//! The core never reads files itself. A host deserializes a [CurrencyConfig]
//! from whatever format it keeps its settings in (or builds one by hand) and
//! turns it into a live [Currency] with
//! [into_currency](struct.CurrencyConfig.html#method.into_currency).
//!
//! ```rust
//! use gringotts_core::{config::CurrencyConfig, Stack};
//!
//! let json = r#"{
//!     "name": "emerald",
//!     "name_plural": "emeralds",
//!     "digits": 2,
//!     "denominations": [
//!         { "kind": "emerald_block", "value": 9, "name": "block", "name_plural": "blocks" },
//!         { "kind": "emerald", "value": 1, "name": "emerald", "name_plural": "emeralds" }
//!     ]
//! }"#;
//! let config: CurrencyConfig<String> = serde_json::from_str(json).unwrap();
//! let currency = config.into_currency().unwrap();
//! assert_eq!(currency.value(&Stack::new("emerald_block".to_string(), 2)), 1800);
//! ```
//!
//! [CurrencyConfig]: struct.CurrencyConfig.html
//! [Currency]: ../models/currency/struct.Currency.html

use crate::{
    error::{Error, Result},
    models::currency::Currency,
};
use getset::Getters;
use rust_decimal::prelude::*;
use serde_derive::{Serialize, Deserialize};
use std::convert::TryFrom;
use tracing::debug;

/// Fractional digits used when a config doesn't say.
pub const DEFAULT_DIGITS: i32 = 2;

fn default_digits() -> i32 {
    DEFAULT_DIGITS
}

/// A currency definition: its names, fractional digits and denominations.
#[derive(Clone, Debug, PartialEq, Getters, derive_builder::Builder, Serialize, Deserialize)]
#[builder(pattern = "owned", setter(into))]
#[getset(get = "pub")]
pub struct CurrencyConfig<K> {
    /// Name of the currency
    name: String,
    /// Plural name, defaults to `name`
    #[builder(setter(strip_option), default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name_plural: Option<String>,
    /// Fractional digits. Signed because it comes straight from user config;
    /// negative values are rejected when the currency is built.
    #[builder(default = "DEFAULT_DIGITS")]
    #[serde(default = "default_digits")]
    digits: i32,
    /// Denominations, in any order
    #[builder(default)]
    #[serde(default = "Vec::new")]
    denominations: Vec<DenominationConfig<K>>,
}

impl<K> CurrencyConfig<K> {
    pub fn builder() -> CurrencyConfigBuilder<K> {
        CurrencyConfigBuilder {
            name: None,
            name_plural: None,
            digits: None,
            denominations: None,
        }
    }
}

impl<K: PartialEq> CurrencyConfig<K> {
    /// Build the currency and register every denomination, in config order.
    ///
    /// Fails with `Error::InvalidCurrency` for bad digit counts and with
    /// `Error::InvalidDenomination` for the first negative denomination value.
    pub fn into_currency(self) -> Result<Currency<K>> {
        let digits = u32::try_from(self.digits)
            .map_err(|_| Error::InvalidCurrency(format!("negative fractional digits ({})", self.digits)))?;
        let name = self.name;
        let name_plural = self.name_plural.unwrap_or_else(|| name.clone());
        let mut currency = Currency::new(name, name_plural, digits)?;
        let count = self.denominations.len();
        for denomination in self.denominations {
            let name = denomination.name.unwrap_or_default();
            let name_plural = denomination.name_plural.unwrap_or_else(|| name.clone());
            currency.add_denomination(denomination.kind, denomination.value, name, name_plural)?;
        }
        debug!(currency = %currency.name(), denominations = count, "loaded currency config");
        Ok(currency)
    }
}

/// One denomination entry. `value` is in display units (1 is one whole unit
/// of the currency). Leaving out `name` makes the denomination unnamed: it
/// still has value but is never printed.
#[derive(Clone, Debug, PartialEq, Getters, derive_builder::Builder, Serialize, Deserialize)]
#[builder(pattern = "owned", setter(into))]
#[getset(get = "pub")]
pub struct DenominationConfig<K> {
    kind: K,
    value: Decimal,
    #[builder(setter(strip_option), default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[builder(setter(strip_option), default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name_plural: Option<String>,
}

impl<K> DenominationConfig<K> {
    pub fn builder() -> DenominationConfigBuilder<K> {
        DenominationConfigBuilder {
            kind: None,
            value: None,
            name: None,
            name_plural: None,
        }
    }
}
