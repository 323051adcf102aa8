//! The currency module holds the Currency model: a named currency whose value
//! is carried by physical tokens, each registered as a [Denomination].
//!
//! All value is tracked internally in "cents", the smallest unit the currency
//! can express. Cents are only turned into display values (cents divided by
//! the currency's unit) when talking to users.
//!
//! ```rust
//! use gringotts_core::{Currency, Stack, format::Pattern};
//! use rust_decimal_macros::dec;
//!
//! let mut currency = Currency::new("crown", "crowns", 2).unwrap();
//! currency.add_denomination("gold ingot", dec!(1), "gold", "gold").unwrap();
//! currency.add_denomination("gold nugget", dec!(0.01), "nugget", "nuggets").unwrap();
//!
//! assert_eq!(currency.value(&Stack::new("gold ingot", 3)), 300);
//! assert_eq!(currency.display_value(345), dec!(3.45));
//!
//! let pattern: Pattern = "%.2f".parse().unwrap();
//! assert_eq!(currency.format(&pattern, dec!(3.45)), "3 gold, 45.00 nuggets");
//! ```
//!
//! [Denomination]: ../denomination/struct.Denomination.html

use crate::{
    error::{Error, Result},
    format::{AmountFormat, Pattern},
    models::{
        denomination::Denomination,
        stack::ItemStack,
    },
    util::number,
};
use getset::{CopyGetters, Getters};
use rust_decimal::prelude::*;
#[cfg(feature = "with_serde")]
use serde_derive::Serialize;
use tracing::{debug, trace, warn};

/// A currency and its denominations.
///
/// Denominations are registered during setup with
/// [add_denomination](#method.add_denomination) (which needs `&mut self`);
/// after that every query takes `&self` and can be shared between threads.
#[derive(Clone, Debug, PartialEq, Getters, CopyGetters)]
#[cfg_attr(feature = "with_serde", derive(Serialize))]
pub struct Currency<K> {
    /// Name of the currency
    #[getset(get = "pub")]
    name: String,
    /// Plural name of the currency
    #[getset(get = "pub")]
    name_plural: String,
    /// Fractional digits supported by this currency. With 2 digits the
    /// smallest display value is 0.01.
    #[getset(get_copy = "pub")]
    digits: u32,
    /// How many cents make up one display unit (`10^digits`). With a unit of
    /// 100, every cent is worth 0.01.
    #[getset(get_copy = "pub")]
    unit: i64,
    /// Registered denominations, most valuable first.
    denominations: Vec<Denomination<K>>,
}

impl<K> Currency<K> {
    /// Create a currency with no denominations.
    ///
    /// Fails if `10^digits` does not fit in an `i64` (more than 18 digits).
    pub fn new<T, P>(name: T, name_plural: P, digits: u32) -> Result<Self>
        where T: Into<String>,
              P: Into<String>,
    {
        let unit = number::unit_for_digits(digits)
            .ok_or_else(|| Error::InvalidCurrency(format!("{} fractional digits is too many", digits)))?;
        let name = name.into();
        debug!(name = %name, digits, unit, "created currency");
        Ok(Self {
            name,
            name_plural: name_plural.into(),
            digits,
            unit,
            denominations: Vec::new(),
        })
    }

    /// Register a denomination worth `display_value` (in display units, so
    /// `1` is one whole unit of currency).
    ///
    /// The value is rounded to the nearest cent the same way
    /// [cent_value](#method.cent_value) rounds. A negative value fails with
    /// `Error::InvalidDenomination` and leaves the currency as it was.
    /// Registering the same kind twice is allowed; lookups take whichever sorts
    /// first.
    pub fn add_denomination<D, T, P>(&mut self, kind: K, display_value: D, name: T, name_plural: P) -> Result<()>
        where D: Into<Decimal>,
              T: Into<String>,
              P: Into<String>,
    {
        let denomination = Denomination::new(kind, self.cent_value(display_value), name, name_plural)?;
        debug!(currency = %self.name, name = %denomination.name(), value = *denomination.value(), "adding denomination");
        if denomination.has_name() && *denomination.value() == 0 {
            warn!(currency = %self.name, name = %denomination.name(), "named denomination has no value and will never be printed");
        }
        // registration happens rarely, so a full (stable) sort is fine here
        self.denominations.push(denomination);
        self.denominations.sort_by(|a, b| a.cmp_by_value(b));
        Ok(())
    }

    /// Convert a cent value into a display value.
    pub fn display_value(&self, cents: i64) -> Decimal {
        // unit is always 10^digits, so this is exact
        Decimal::new(cents, self.digits)
    }

    /// Convert a display value into cents, rounding to the nearest cent (halves
    /// round up). Out of range values saturate.
    pub fn cent_value<D: Into<Decimal>>(&self, display_value: D) -> i64 {
        number::to_cents(display_value.into(), self.unit)
    }

    /// A copy of the registered denominations, most valuable first.
    pub fn denominations(&self) -> Vec<Denomination<K>>
        where K: Clone,
    {
        self.denominations.clone()
    }

    /// Format a display value as a list of denominations, largest first, ie
    /// `3 gold, 5 silver, 0.12 copper`.
    ///
    /// Each denomination takes as many whole units of the remaining value as
    /// it can and passes the rest down. The last (lowest) denomination prints
    /// the whole remaining quotient through `pattern`, so it can show a
    /// fraction. Unnamed and zero-value denominations are never printed. A
    /// denomination only takes a share when the remainder is strictly larger
    /// than its value, except the last one, which always prints if nothing else
    /// has.
    ///
    /// Returns an empty string if nothing was printed.
    pub fn format<F>(&self, pattern: &F, value: Decimal) -> String
        where F: AmountFormat + ?Sized,
    {
        let last = self.denominations.len().saturating_sub(1);
        let mut remaining = value;
        let mut segments: Vec<String> = Vec::new();
        for (idx, denomination) in self.denominations.iter().enumerate() {
            // unnamed denominations count for valuation but are never shown.
            // if the lowest one is unnamed, small remainders won't show at all.
            if !denomination.has_name() {
                continue;
            }
            let denom_value = denomination.display_value(self.unit);
            if denom_value.is_zero() {
                continue;
            }
            let is_last = idx == last;
            if !((segments.is_empty() && is_last) || remaining > denom_value) {
                continue;
            }
            let quotient = match remaining.checked_div(denom_value) {
                Some(x) => x,
                None => {
                    warn!(currency = %self.name, name = %denomination.name(), "amount too large to split into denomination");
                    continue;
                }
            };
            let count = quotient.floor();
            remaining -= count * denom_value;
            let (rendered, amount) = if is_last {
                let rendered = pattern.render(quotient);
                // name it after what was printed. output that isn't a plain
                // number (closures adding text, grouped digits) falls back to
                // the quotient
                let amount = rendered.trim().parse::<Decimal>().unwrap_or(quotient);
                (rendered, amount)
            } else {
                (count.normalize().to_string(), count)
            };
            trace!(name = %denomination.name(), amount = %rendered, "formatted denomination");
            segments.push(format!("{} {}", rendered, denomination.name_for(amount)));
        }
        segments.join(", ")
    }

    /// Format an amount given in cents. See [format](#method.format).
    pub fn format_cents<F>(&self, pattern: &F, cents: i64) -> String
        where F: AmountFormat + ?Sized,
    {
        self.format(pattern, self.display_value(cents))
    }

    /// Parse a printf-style pattern (see [Pattern]) and format a display value
    /// with it.
    ///
    /// [Pattern]: ../../format/struct.Pattern.html
    pub fn format_with(&self, pattern: &str, value: Decimal) -> Result<String> {
        let pattern: Pattern = pattern.parse()?;
        Ok(self.format(&pattern, value))
    }
}

impl<K: PartialEq> Currency<K> {
    /// Find the denomination a token kind belongs to. The most valuable
    /// matching denomination wins.
    pub fn denomination_of(&self, kind: &K) -> Option<&Denomination<K>> {
        self.denominations.iter().find(|d| d.is_denomination_of(kind))
    }

    /// Get the value of a stack of tokens in cents: the value of its
    /// denomination times the stack size.
    ///
    /// Empty stacks and tokens that aren't a denomination of this currency are
    /// worth nothing.
    pub fn value<S>(&self, stack: &S) -> i64
        where S: ItemStack<Kind = K> + ?Sized,
    {
        match stack.kind() {
            Some(kind) => self.value_of(kind, stack.quantity()),
            None => 0,
        }
    }

    /// Get the value of `quantity` tokens of the given kind, in cents. Saturates
    /// at `i64::MAX`.
    pub fn value_of(&self, kind: &K, quantity: u32) -> i64 {
        if quantity == 0 {
            return 0;
        }
        self.denomination_of(kind)
            .map(|d| d.value().saturating_mul(i64::from(quantity)))
            .unwrap_or(0)
    }
}
