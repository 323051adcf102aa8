//! Amount patterns used to print the final (lowest) denomination of a
//! formatted amount, which is the only place a fractional remainder shows up.
//!
//! Callers can pass anything implementing [AmountFormat]: a parsed [Pattern],
//! or a plain closure.
//!
//! ```rust
//! use gringotts_core::format::{AmountFormat, Pattern};
//! use rust_decimal_macros::dec;
//!
//! let pattern: Pattern = "%.2f".parse().unwrap();
//! assert_eq!(pattern.render(dec!(45)), "45.00");
//!
//! let grouped: Pattern = "~%,.1f".parse().unwrap();
//! assert_eq!(grouped.render(dec!(1234567.25)), "~1,234,567.3");
//!
//! let custom = |amount: rust_decimal::Decimal| format!("{} and change", amount.trunc());
//! assert_eq!(custom.render(dec!(3.7)), "3 and change");
//! ```
//!
//! [AmountFormat]: trait.AmountFormat.html
//! [Pattern]: struct.Pattern.html

use crate::error::{Error, Result};
use rust_decimal::prelude::*;
use std::str::FromStr;

/// Number of fractional digits printed by `%f` when no precision is given.
const DEFAULT_PRECISION: u32 = 6;

/// Renders a decimal amount as a string.
pub trait AmountFormat {
    fn render(&self, amount: Decimal) -> String;
}

impl<F> AmountFormat for F
    where F: Fn(Decimal) -> String,
{
    fn render(&self, amount: Decimal) -> String {
        self(amount)
    }
}

/// What kind of number a conversion prints.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Conversion {
    /// `%f`: fixed point
    Fixed,
    /// `%d`: whole number, truncated toward zero
    Integer,
}

/// A printf-style amount pattern: literal text around exactly one `%f` or `%d`
/// conversion, with optional `,` (group thousands) and `-` (left-align) flags,
/// a width, and (for `%f`) a precision. `%%` is a literal percent sign.
#[derive(Clone, Debug, PartialEq)]
pub struct Pattern {
    prefix: String,
    suffix: String,
    conversion: Conversion,
    grouping: bool,
    left_align: bool,
    width: usize,
    precision: u32,
}

impl Pattern {
    fn render_number(&self, amount: Decimal) -> String {
        let mut number = match self.conversion {
            Conversion::Fixed => {
                let rounded = amount.round_dp_with_strategy(self.precision, RoundingStrategy::MidpointAwayFromZero);
                format!("{:.*}", self.precision as usize, rounded)
            }
            Conversion::Integer => amount.trunc().normalize().to_string(),
        };
        if self.grouping {
            number = group_thousands(&number);
        }
        let len = number.chars().count();
        if len < self.width {
            let pad = " ".repeat(self.width - len);
            if self.left_align {
                number.push_str(&pad);
            } else {
                number.insert_str(0, &pad);
            }
        }
        number
    }
}

impl AmountFormat for Pattern {
    fn render(&self, amount: Decimal) -> String {
        format!("{}{}{}", self.prefix, self.render_number(amount), self.suffix)
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(pattern: &str) -> Result<Self> {
        let invalid = |msg: &str| Error::InvalidFormatPattern(format!("{:?}: {}", pattern, msg));
        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut parsed: Option<(Conversion, bool, bool, usize, Option<u32>)> = None;
        let mut chars = pattern.chars().peekable();
        while let Some(ch) = chars.next() {
            if ch != '%' {
                if parsed.is_some() { suffix.push(ch) } else { prefix.push(ch) }
                continue;
            }
            if chars.peek() == Some(&'%') {
                chars.next();
                if parsed.is_some() { suffix.push('%') } else { prefix.push('%') }
                continue;
            }
            if parsed.is_some() {
                Err(invalid("more than one conversion"))?;
            }
            let mut grouping = false;
            let mut left_align = false;
            loop {
                match chars.peek() {
                    Some(',') => grouping = true,
                    Some('-') => left_align = true,
                    _ => break,
                }
                chars.next();
            }
            let mut width = String::new();
            while let Some(d) = chars.peek().filter(|c| c.is_ascii_digit()) {
                width.push(*d);
                chars.next();
            }
            let mut precision = None;
            if chars.peek() == Some(&'.') {
                chars.next();
                let mut digits = String::new();
                while let Some(d) = chars.peek().filter(|c| c.is_ascii_digit()) {
                    digits.push(*d);
                    chars.next();
                }
                let value = digits.parse::<u32>().map_err(|_| invalid("bad precision"))?;
                precision = Some(value);
            }
            let conversion = match chars.next() {
                Some('f') => Conversion::Fixed,
                Some('d') if precision.is_none() => Conversion::Integer,
                Some('d') => Err(invalid("%d takes no precision"))?,
                Some(other) => Err(invalid(&format!("unsupported conversion '{}'", other)))?,
                None => Err(invalid("unterminated conversion"))?,
            };
            let width = if width.is_empty() {
                0
            } else {
                width.parse::<usize>().map_err(|_| invalid("bad width"))?
            };
            parsed = Some((conversion, grouping, left_align, width, precision));
        }
        let (conversion, grouping, left_align, width, precision) = parsed.ok_or_else(|| invalid("no conversion"))?;
        Ok(Self {
            prefix,
            suffix,
            conversion,
            grouping,
            left_align,
            width,
            precision: precision.unwrap_or(DEFAULT_PRECISION),
        })
    }
}

/// Insert `,` between groups of three digits in the integer part of a
/// rendered number.
fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(idx) => unsigned.split_at(idx),
        None => (unsigned, ""),
    };
    let mut grouped = String::with_capacity(number.len() + int_part.len() / 3);
    for (idx, digit) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{}{}{}", sign, grouped, frac_part)
}
