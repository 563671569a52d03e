//! Rendering numeric values back into canonical literal text.

use alloc::string::{String, ToString};
use core::fmt;

use num_bigint::{BigInt, Sign};
use num_traits::FromPrimitive;

use crate::{number::Number, radix::Radix};

/// Renders `value` as a canonical literal in `radix`.
///
/// `NaN` and the infinities render as their names, with `NaN` always
/// unsigned. Arbitrary-precision integers keep the `n` suffix after the
/// digits. Floats use the shortest round-tripping decimal form; for a
/// non-decimal radix they are truncated toward zero first. The sign always
/// precedes the radix prefix, and decimal output carries no prefix.
///
/// # Examples
///
/// ```
/// use numlex::{to_literal, BigInt, Number, Radix};
///
/// assert_eq!(to_literal(&Number::Int(12345), Radix::Hex), "0x3039");
/// assert_eq!(to_literal(&Number::Int(-12345), Radix::Bin), "-0b11000000111001");
/// assert_eq!(to_literal(&Number::Int(12345), Radix::Dec), "12345");
/// assert_eq!(to_literal(&Number::Big(BigInt::from(-12345)), Radix::Oct), "-0o30071n");
/// assert_eq!(to_literal(&Number::Float(f64::NAN), Radix::Dec), "NaN");
/// assert_eq!(to_literal(&Number::Float(f64::NEG_INFINITY), Radix::Dec), "-Infinity");
/// ```
#[must_use]
pub fn to_literal(value: &Number, radix: Radix) -> String {
    match value {
        Number::Float(f) if f.is_nan() => String::from("NaN"),
        Number::Float(f) if f.is_infinite() => String::from(if f.is_sign_negative() {
            "-Infinity"
        } else {
            "Infinity"
        }),
        Number::Float(f) if radix == Radix::Dec => {
            if *f == 0.0 {
                // Collapse both zeroes into the unsigned literal.
                String::from("0")
            } else {
                f.to_string()
            }
        }
        Number::Float(f) => {
            // Finite by the arms above; the conversion truncates toward
            // zero.
            render(&BigInt::from_f64(*f).unwrap_or_default(), radix, false)
        }
        Number::Int(v) => render(&BigInt::from(*v), radix, false),
        Number::Big(v) => render(v, radix, true),
    }
}

fn render(value: &BigInt, radix: Radix, suffix: bool) -> String {
    let digits = value.magnitude().to_str_radix(radix.value());
    let mut out = String::with_capacity(digits.len() + 4);
    if value.sign() == Sign::Minus {
        out.push('-');
    }
    out.push_str(radix.prefix());
    out.push_str(&digits);
    if suffix {
        out.push('n');
    }
    out
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_literal(self, Radix::Dec))
    }
}
