//! Numeric values produced by the parser.

use core::ops::Neg;

use num_bigint::BigInt;

/// The literal form a token was recognized under.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NumberKind {
    /// Integer literal of any radix.
    Int,
    /// Decimal literal with a fractional part or exponent.
    Float,
    /// Integer literal carrying the arbitrary-precision suffix.
    BigInt,
}

/// A parsed numeric value.
///
/// `Int` and `Float` mirror the host's fixed-width number types; `Big` is an
/// exact arbitrary-precision integer. An integer literal too wide for an
/// `i64` keeps its `Int` token kind but carries the nearest double instead;
/// the bigint path never loses precision.
///
/// # Examples
///
/// ```
/// use numlex::{parse, Number};
///
/// assert_eq!(parse("0o30071", false), Some(Number::Int(12345)));
/// assert_eq!(parse("1.5e1", false), Some(Number::Float(15.0)));
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    /// A 64-bit signed integer.
    Int(i64),
    /// A double-precision float.
    Float(f64),
    /// An arbitrary-precision integer.
    Big(BigInt),
}

impl Number {
    /// Returns `true` if the value is [`Int`].
    ///
    /// [`Int`]: Number::Int
    #[must_use]
    pub fn is_int(&self) -> bool {
        matches!(self, Self::Int(..))
    }

    /// Returns `true` if the value is [`Float`].
    ///
    /// [`Float`]: Number::Float
    #[must_use]
    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float(..))
    }

    /// Returns `true` if the value is [`Big`].
    ///
    /// [`Big`]: Number::Big
    ///
    /// # Examples
    ///
    /// ```
    /// use numlex::parse;
    ///
    /// assert!(parse("-0x123abcn", false).unwrap().is_big());
    /// assert!(!parse("-0x123abc", false).unwrap().is_big());
    /// ```
    #[must_use]
    pub fn is_big(&self) -> bool {
        matches!(self, Self::Big(..))
    }

    /// The value as an `i64`, when it is one.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// The value as an `f64`, when it is one.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// The value as an arbitrary-precision integer, when it is one.
    #[must_use]
    pub fn as_big(&self) -> Option<&BigInt> {
        match self {
            Self::Big(v) => Some(v),
            _ => None,
        }
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<BigInt> for Number {
    fn from(v: BigInt) -> Self {
        Self::Big(v)
    }
}

impl Neg for Number {
    type Output = Self;

    #[allow(clippy::cast_precision_loss)]
    fn neg(self) -> Self {
        match self {
            // i64::MIN has no positive counterpart; degrade the same way an
            // overflowing literal does.
            Self::Int(v) => v.checked_neg().map_or(Self::Float(-(v as f64)), Self::Int),
            Self::Float(v) => Self::Float(-v),
            Self::Big(v) => Self::Big(-v),
        }
    }
}
