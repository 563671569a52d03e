//! Whole-string literal classification.
//!
//! Each predicate answers whether the *entire* input denotes a literal of
//! one radix or kind. All of them are total over arbitrary text and
//! stricter than the lenient parser: trailing garbage fails classification,
//! with the single exception that hexadecimal tolerates trailing
//! whitespace.

use crate::{
    number::Number,
    parse::{Trailing, parse_with},
    radix::Radix,
    scan::{digit_run, exponent_run, radix_prefix},
};

/// True iff `text` is a prefixed binary literal such as `0b1010101`.
#[must_use]
pub fn is_bin(text: &str) -> bool {
    prefixed(text, Radix::Bin)
}

/// True iff `text` is a prefixed octal literal (`0o1234567`) or a legacy
/// leading-zero run of octal digits (`01234567`).
#[must_use]
pub fn is_oct(text: &str) -> bool {
    prefixed(text, Radix::Oct) || legacy_octal(text)
}

/// True iff `text` matches the decimal grammar: optional integer digits, an
/// optional fraction, and an optional exponent, with at least one digit
/// before the exponent.
///
/// A pure leading-zero run of octal digits belongs to [`is_oct`] instead; a
/// decimal point, an exponent, or any `8`/`9` digit makes the string
/// decimal again.
///
/// # Examples
///
/// ```
/// use numlex::is_dec;
///
/// assert!(is_dec("1234567"));
/// assert!(is_dec(".1e23"));
/// assert!(is_dec("012345678"));
/// assert!(!is_dec("01234567"));
/// ```
#[must_use]
pub fn is_dec(text: &str) -> bool {
    let int_run = digit_run(text, Radix::Dec);
    let mut end = int_run;
    let mut consumed_dot = false;
    let mut frac = 0;
    if text[end..].starts_with('.') {
        consumed_dot = true;
        frac = digit_run(&text[end + 1..], Radix::Dec);
        end += 1 + frac;
    }
    if int_run == 0 && frac == 0 {
        return false;
    }
    let mut consumed_exponent = false;
    if let Some(width) = exponent_run(&text[end..]) {
        end += width;
        consumed_exponent = true;
    }
    if end != text.len() {
        return false;
    }
    // Pure leading-zero octal runs classify as octal, not decimal.
    !(!consumed_dot && !consumed_exponent && legacy_octal(text))
}

/// True iff `text`, ignoring trailing whitespace, is a prefixed hexadecimal
/// literal such as `0x123abc`.
#[must_use]
pub fn is_hex(text: &str) -> bool {
    prefixed(text.trim_end(), Radix::Hex)
}

/// True iff `text` is an integer literal of any supported radix carrying
/// the arbitrary-precision `n` suffix.
#[must_use]
pub fn is_bigint(text: &str) -> bool {
    text.strip_suffix('n').is_some_and(|body| {
        prefixed(body, Radix::Bin)
            || prefixed(body, Radix::Oct)
            || prefixed(body, Radix::Hex)
            || (!body.is_empty() && digit_run(body, Radix::Dec) == body.len())
    })
}

/// True iff `text` names the not-a-number value, in any case.
#[must_use]
pub fn is_nan(text: &str) -> bool {
    text.eq_ignore_ascii_case("NaN")
}

/// True iff the whole of `text` parses as a number other than `NaN` or a
/// signed infinity.
#[must_use]
pub fn is_finite(text: &str) -> bool {
    match parse_with(text, Trailing::None) {
        Some(Number::Float(f)) => f.is_finite(),
        Some(_) => true,
        None => false,
    }
}

fn prefixed(text: &str, radix: Radix) -> bool {
    radix_prefix(text) == Some(radix) && {
        let digits = &text[2..];
        !digits.is_empty() && digit_run(digits, radix) == digits.len()
    }
}

fn legacy_octal(text: &str) -> bool {
    text.len() >= 2 && text.starts_with('0') && text.bytes().all(|b| matches!(b, b'0'..=b'7'))
}
