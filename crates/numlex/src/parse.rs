//! Sign-aware literal parsing.

use crate::{
    number::{Number, NumberKind},
    scan::{at_boundary, scan_literal},
};

/// Trailing-content policy applied after a literal has been consumed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Trailing {
    /// Ignore anything after the literal.
    Any,
    /// Require end of input, whitespace, or a boundary mark.
    Boundary,
    /// Require nothing but whitespace.
    None,
}

/// Parses an optionally signed numeric literal from `input`.
///
/// Leading whitespace is skipped, as is whitespace between a sign and the
/// literal. `NaN` (any case, either sign) yields the not-a-number float;
/// `Infinity` yields the infinity matching its sign. A `+` sign before an
/// arbitrary-precision literal fails: that grammar only has a negative
/// signed form.
///
/// In lenient mode (`strict = false`) trailing content after the literal is
/// ignored. In strict mode the literal must be followed by end of input,
/// whitespace, or one of `,` `;` `:` `)` `]` `}`.
///
/// # Examples
///
/// ```
/// use numlex::{parse, BigInt, Number};
///
/// assert_eq!(parse("- 0b0101", false), Some(Number::Int(-5)));
/// assert_eq!(parse("1234567abc", false), Some(Number::Int(1234567)));
/// assert_eq!(parse("1234567,123", true), Some(Number::Int(1234567)));
/// assert_eq!(parse("1234567abc", true), None);
/// assert_eq!(
///     parse("-1234567n", false),
///     Some(Number::Big(BigInt::from(-1234567)))
/// );
/// assert_eq!(parse("+1234567n", false), None);
/// ```
#[must_use]
pub fn parse(input: &str, strict: bool) -> Option<Number> {
    parse_with(
        input,
        if strict { Trailing::Boundary } else { Trailing::Any },
    )
}

pub(crate) fn parse_with(input: &str, trailing: Trailing) -> Option<Number> {
    let rest = input.trim_start();
    let (explicit_plus, negative, rest) = if let Some(r) = rest.strip_prefix('+') {
        (true, false, r.trim_start())
    } else if let Some(r) = rest.strip_prefix('-') {
        (false, true, r.trim_start())
    } else {
        (false, false, rest)
    };

    // The special float names match against the whole remainder; the digit
    // grammar below never produces them.
    let name = rest.trim_end();
    if name.eq_ignore_ascii_case("NaN") {
        // Either sign collapses to the one NaN.
        return Some(Number::Float(f64::NAN));
    }
    if name == "Infinity" {
        return Some(Number::Float(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }));
    }

    let literal = scan_literal(rest)?;
    // The bigint grammar has a negative signed form but no positive one.
    if explicit_plus && literal.kind == NumberKind::BigInt {
        return None;
    }
    let boundary_ok = match trailing {
        Trailing::Any => true,
        Trailing::Boundary => at_boundary(&rest[literal.len..]),
        Trailing::None => rest[literal.len..].chars().all(char::is_whitespace),
    };
    if !boundary_ok {
        return None;
    }
    Some(if negative {
        -literal.value
    } else {
        literal.value
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_may_separate_sign_and_digits() {
        assert_eq!(parse("- 0b0101", false), Some(Number::Int(-5)));
        assert_eq!(parse("+  .123", false), Some(Number::Float(0.123)));
        assert_eq!(parse("  -  12", false), Some(Number::Int(-12)));
    }

    #[test]
    fn special_names_follow_their_sign() {
        assert!(matches!(
            parse("NaN", false),
            Some(Number::Float(f)) if f.is_nan()
        ));
        assert!(matches!(
            parse("-nan", false),
            Some(Number::Float(f)) if f.is_nan()
        ));
        assert_eq!(parse("Infinity", false), Some(Number::Float(f64::INFINITY)));
        assert_eq!(
            parse("-Infinity", false),
            Some(Number::Float(f64::NEG_INFINITY))
        );
        // The infinity name is case-sensitive, unlike NaN.
        assert_eq!(parse("infinity", false), None);
    }

    #[test]
    fn strict_mode_rejects_unknown_trailing_characters() {
        assert_eq!(parse("1234567x", true), None);
        assert_eq!(parse("1234567(", true), None);
        assert_eq!(parse("1234567.", true), Some(Number::Int(1234567)));
    }

    #[test]
    fn lenient_mode_only_fails_without_a_literal() {
        assert_eq!(parse("abc", false), None);
        assert_eq!(parse("", false), None);
        assert_eq!(parse("+", false), None);
        assert_eq!(parse("--5", false), None);
    }
}
