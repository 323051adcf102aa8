use crate::{
    format::Pattern,
    models::currency::Currency,
};

/// Token kinds used throughout the tests. `Button` is never registered in the
/// standard currency, so it is worthless there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "with_serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
#[cfg_attr(feature = "with_serde", serde(rename_all = "snake_case"))]
pub(crate) enum Coin {
    Gold,
    Silver,
    Copper,
    Button,
}

/// Two decimal digits, gold (1.00), silver (0.10) and copper (0.01).
pub(crate) fn standard_currency() -> Currency<Coin> {
    let mut currency = Currency::new("crown", "crowns", 2).unwrap();
    currency.add_denomination(Coin::Gold, num!(1), "gold coin", "gold coins").unwrap();
    currency.add_denomination(Coin::Silver, num!(0.1), "silver coin", "silver coins").unwrap();
    currency.add_denomination(Coin::Copper, num!(0.01), "copper coin", "copper coins").unwrap();
    currency
}

pub(crate) fn two_places() -> Pattern {
    "%.2f".parse().unwrap()
}
