//! A set of utilities for working with cent and display numbers.

use rust_decimal::prelude::*;

/// Create a decimal number.
///
/// This is a thin wrapper around `dec!` so callers of the core (and our tests)
/// can write display values without spelling out the decimal type each time.
#[macro_export]
macro_rules! num {
    ($($val:tt)*) => {
        rust_decimal_macros::dec!($($val)*)
    }
}

/// Compute `10^digits` by repeated multiplication, or `None` if the result
/// does not fit in an `i64`.
pub fn unit_for_digits(digits: u32) -> Option<i64> {
    let mut unit: i64 = 1;
    for _ in 0..digits {
        unit = unit.checked_mul(10)?;
    }
    Some(unit)
}

/// Round a scaled amount to the nearest whole cent, halves going up
/// (`floor(x + 0.5)`). Values outside the `i64` range saturate.
///
/// Every display -> cent conversion in the crate goes through here.
pub fn round_cents(scaled: Decimal) -> i64 {
    let rounded = scaled
        .checked_add(Decimal::new(5, 1))
        .map(|x| x.floor())
        .unwrap_or_else(|| scaled.floor());
    rounded.to_i64().unwrap_or_else(|| {
        if rounded.is_sign_negative() { i64::MIN } else { i64::MAX }
    })
}

/// Scale a display value by `unit` and round it to cents.
pub fn to_cents(display: Decimal, unit: i64) -> i64 {
    match display.checked_mul(Decimal::from(unit)) {
        Some(scaled) => round_cents(scaled),
        None if display.is_sign_negative() => i64::MIN,
        None => i64::MAX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units() {
        assert_eq!(unit_for_digits(0), Some(1));
        assert_eq!(unit_for_digits(2), Some(100));
        assert_eq!(unit_for_digits(18), Some(1_000_000_000_000_000_000));
        assert_eq!(unit_for_digits(19), None);
        assert_eq!(unit_for_digits(200), None);
    }

    #[test]
    fn rounds_half_up() {
        assert_eq!(round_cents(num!(2.5)), 3);
        assert_eq!(round_cents(num!(2.4999)), 2);
        assert_eq!(round_cents(num!(-2.5)), -2);
        assert_eq!(round_cents(num!(-2.51)), -3);
        assert_eq!(round_cents(num!(0)), 0);
        assert_eq!(round_cents(Decimal::MAX), i64::MAX);
        assert_eq!(round_cents(Decimal::MIN), i64::MIN);
    }

    #[test]
    fn scales_to_cents() {
        assert_eq!(to_cents(num!(3.45), 100), 345);
        assert_eq!(to_cents(num!(0.005), 100), 1);
        assert_eq!(to_cents(num!(0.004), 100), 0);
        assert_eq!(to_cents(num!(12), 1), 12);
        assert_eq!(to_cents(Decimal::MAX, 1_000_000), i64::MAX);
    }
}
