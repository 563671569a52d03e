//! Literal scanning engine shared by the tokenizer, parser, and classifier.
//!
//! The scanner is a set of explicit character-class consumers: each helper
//! eats a maximal run of characters from a known alphabet and reports how
//! far it got. There is no pattern-matching engine and no backtracking;
//! every decision is made from at most one character of lookahead.

use num_bigint::BigInt;

use crate::{
    number::{Number, NumberKind},
    radix::Radix,
};

/// Punctuation accepted immediately after a literal by the boundary rule.
const BOUNDARY_MARKS: [char; 6] = [',', ';', ':', ')', ']', '}'];

/// A literal recognized at the start of a piece of text.
#[derive(Debug)]
pub(crate) struct ScannedLiteral<'src> {
    /// Literal body: radix prefix included, bigint suffix excluded.
    pub source: &'src str,
    pub radix: Radix,
    pub kind: NumberKind,
    pub value: Number,
    /// Bytes consumed from the start of the text, suffix included.
    pub len: usize,
}

/// Recognizes the longest literal starting at the first byte of `text`.
///
/// Returns `None` when no literal begins there. Trailing content past the
/// consumed span is the caller's concern; see [`at_boundary`].
pub(crate) fn scan_literal(text: &str) -> Option<ScannedLiteral<'_>> {
    match radix_prefix(text) {
        Some(radix) => scan_prefixed(text, radix),
        None => scan_decimal(text),
    }
}

/// True when a literal may legally end right before `rest`: end of input,
/// whitespace, or one of the accepted punctuation marks.
pub(crate) fn at_boundary(rest: &str) -> bool {
    rest.chars()
        .next()
        .is_none_or(|c| c.is_whitespace() || BOUNDARY_MARKS.contains(&c))
}

/// Detects an explicit radix prefix (`0b`, `0o`, `0x`, either case).
pub(crate) fn radix_prefix(text: &str) -> Option<Radix> {
    let rest = text.strip_prefix('0')?;
    match rest.bytes().next()? {
        b'b' | b'B' => Some(Radix::Bin),
        b'o' | b'O' => Some(Radix::Oct),
        b'x' | b'X' => Some(Radix::Hex),
        _ => None,
    }
}

/// Length in bytes of the maximal digit run of `radix` at the start of
/// `text`.
pub(crate) fn digit_run(text: &str, radix: Radix) -> usize {
    text.find(|c: char| !radix.has_digit(c))
        .unwrap_or(text.len())
}

/// Length of a well-formed exponent (`e`/`E`, optional sign, digits) at the
/// start of `text`, or `None` when the marker is absent or has no digits.
pub(crate) fn exponent_run(text: &str) -> Option<usize> {
    let rest = text.strip_prefix(['e', 'E'])?;
    let signed = rest.starts_with(['+', '-']);
    let digits = digit_run(if signed { &rest[1..] } else { rest }, Radix::Dec);
    (digits > 0).then_some(1 + usize::from(signed) + digits)
}

fn scan_prefixed(text: &str, radix: Radix) -> Option<ScannedLiteral<'_>> {
    let run = digit_run(&text[2..], radix);
    if run == 0 {
        return None;
    }
    let end = 2 + run;
    let source = &text[..end];
    if text[end..].starts_with('n') {
        let value = BigInt::parse_bytes(text[2..end].as_bytes(), radix.value())?;
        return Some(ScannedLiteral {
            source,
            radix,
            kind: NumberKind::BigInt,
            value: Number::Big(value),
            len: end + 1,
        });
    }
    Some(ScannedLiteral {
        source,
        radix,
        kind: NumberKind::Int,
        value: int_value(&text[2..end], radix),
        len: end,
    })
}

fn scan_decimal(text: &str) -> Option<ScannedLiteral<'_>> {
    let int_run = digit_run(text, Radix::Dec);

    // A leading-zero run of two or more octal digits is the legacy octal
    // form: it never extends into a fraction, exponent, or bigint suffix.
    if int_run >= 2 && text.starts_with('0') && is_octal_run(&text[..int_run]) {
        if text[int_run..].starts_with('n') {
            return None;
        }
        let source = &text[..int_run];
        return Some(ScannedLiteral {
            source,
            radix: Radix::Oct,
            kind: NumberKind::Int,
            value: int_value(source, Radix::Oct),
            len: int_run,
        });
    }

    let mut end = int_run;
    let mut consumed_dot = false;
    let mut frac = 0;
    if text[end..].starts_with('.') {
        consumed_dot = true;
        frac = digit_run(&text[end + 1..], Radix::Dec);
        end += 1 + frac;
    }
    if int_run == 0 && frac == 0 {
        return None;
    }
    let exponent = exponent_run(&text[end..]);
    if let Some(width) = exponent {
        end += width;
    }
    let source = &text[..end];

    if frac > 0 || exponent.is_some() {
        // The bigint suffix has no fractional or exponent form.
        if text[end..].starts_with('n') {
            return None;
        }
        let value = source.parse::<f64>().ok()?;
        return Some(ScannedLiteral {
            source,
            radix: Radix::Dec,
            kind: NumberKind::Float,
            value: Number::Float(value),
            len: end,
        });
    }

    if text[end..].starts_with('n') {
        if consumed_dot {
            return None;
        }
        let value = BigInt::parse_bytes(source.as_bytes(), 10)?;
        return Some(ScannedLiteral {
            source,
            radix: Radix::Dec,
            kind: NumberKind::BigInt,
            value: Number::Big(value),
            len: end + 1,
        });
    }

    // A lone trailing dot is consumed into the body but contributes nothing
    // to the value, which stays integral.
    Some(ScannedLiteral {
        source,
        radix: Radix::Dec,
        kind: NumberKind::Int,
        value: int_value(&text[..int_run], Radix::Dec),
        len: end,
    })
}

fn is_octal_run(text: &str) -> bool {
    text.bytes().all(|b| matches!(b, b'0'..=b'7'))
}

/// Base-N accumulation into an `i64`. Literals too wide for 64 bits degrade
/// to the nearest double, keeping the host-float semantics of the grammar.
fn int_value(digits: &str, radix: Radix) -> Number {
    let base = i64::from(radix.value());
    let mut acc = 0_i64;
    for ch in digits.chars() {
        let digit = i64::from(digit_value(ch, radix));
        match acc.checked_mul(base).and_then(|n| n.checked_add(digit)) {
            Some(n) => acc = n,
            None => return Number::Float(wide_int_value(digits, radix)),
        }
    }
    Number::Int(acc)
}

fn wide_int_value(digits: &str, radix: Radix) -> f64 {
    if radix == Radix::Dec {
        // Correctly rounded by the host conversion; a pure digit run always
        // parses.
        return digits.parse().unwrap_or(f64::INFINITY);
    }
    let base = f64::from(radix.value());
    digits
        .chars()
        .fold(0.0, |acc, ch| acc * base + f64::from(digit_value(ch, radix)))
}

// The callers only hand over characters the radix already accepted.
fn digit_value(ch: char, radix: Radix) -> u32 {
    ch.to_digit(radix.value()).unwrap_or(0)
}
