//! Property-based tests for currencies: unit scaling, cent round trips,
//! valuation linearity, denomination ordering, and formatting that never
//! divides by zero.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::currency::Currency;
use super::stack::Stack;
use crate::util::test::{self, Coin};

/// Display values with up to 6 fractional digits, between -10^6 and 10^6.
fn display_value() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000_000i64..1_000_000_000_000i64, 0u32..=6).prop_map(|(m, scale)| Decimal::new(m, scale))
}

fn coin() -> impl Strategy<Value = Coin> {
    prop_oneof![Just(Coin::Gold), Just(Coin::Silver), Just(Coin::Copper), Just(Coin::Button)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_unit_is_power_of_ten(digits in 0u32..=18) {
        let currency: Currency<Coin> = Currency::new("crown", "crowns", digits).unwrap();
        prop_assert_eq!(currency.unit(), 10i64.pow(digits));
    }

    #[test]
    fn prop_cents_round_trip(digits in 0u32..=6, value in display_value()) {
        let currency: Currency<Coin> = Currency::new("crown", "crowns", digits).unwrap();
        let back = currency.display_value(currency.cent_value(value));
        let tolerance = Decimal::new(5, 1) / Decimal::from(currency.unit());
        prop_assert!((back - value).abs() <= tolerance, "{} -> {}", value, back);
    }

    #[test]
    fn prop_value_is_linear(kind in coin(), quantity in 0u32..1_000_000) {
        let currency = test::standard_currency();
        let single = currency.value(&Stack::new(kind, quantity));
        let double = currency.value(&Stack::new(kind, quantity * 2));
        prop_assert_eq!(double, single * 2);
        prop_assert_eq!(currency.value(&Stack::new(kind, 0)), 0);
        if kind == Coin::Button {
            prop_assert_eq!(single, 0);
        }
    }

    #[test]
    fn prop_denominations_sorted(values in prop::collection::vec(0i64..100_000, 0..12)) {
        let mut currency = Currency::new("crown", "crowns", 2).unwrap();
        for (idx, cents) in values.iter().enumerate() {
            currency.add_denomination(idx, Decimal::new(*cents, 2), format!("d{}", idx), format!("d{}s", idx)).unwrap();
        }
        let denoms = currency.denominations();
        prop_assert_eq!(denoms.len(), values.len());
        for pair in denoms.windows(2) {
            prop_assert!(pair[0].value() >= pair[1].value());
            // equal values keep registration order
            if pair[0].value() == pair[1].value() {
                prop_assert!(pair[0].kind() < pair[1].kind());
            }
        }
    }

    #[test]
    fn prop_single_denomination_prints_once(cents in 0i64..10_000_000) {
        let mut currency = Currency::new("crown", "crowns", 2).unwrap();
        currency.add_denomination(Coin::Gold, 1, "crown", "crowns").unwrap();
        let out = currency.format_cents(&test::two_places(), cents);
        prop_assert!(!out.is_empty());
        prop_assert!(!out.contains(", "), "{}", out);
    }

    #[test]
    fn prop_format_survives_zero_values(
        values in prop::collection::vec(0i64..1_000, 0..8),
        value in display_value(),
    ) {
        let mut currency = Currency::new("crown", "crowns", 2).unwrap();
        for (idx, cents) in values.iter().enumerate() {
            let name = if idx % 3 == 2 { String::new() } else { format!("d{}", idx) };
            currency.add_denomination(idx, Decimal::new(*cents, 2), name.clone(), name).unwrap();
        }
        // must not panic, whatever mix of zero, unnamed and named denominations
        let out = currency.format(&test::two_places(), value);
        let named_nonzero = currency.denominations().iter().filter(|d| d.has_name() && *d.value() > 0).count();
        prop_assert!(out.matches(", ").count() + 1 <= named_nonzero.max(1));
    }
}
