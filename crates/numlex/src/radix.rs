//! Radix constants and digit alphabets.

use core::fmt;

use thiserror::Error;

/// Base of a positional numeral system understood by the literal grammar.
///
/// Each radix fixes a digit alphabet: `{0,1}` for binary, `{0..7}` for
/// octal, `{0..9}` for decimal, and `{0..9, a..f, A..F}` for hexadecimal.
///
/// # Examples
///
/// ```
/// use numlex::Radix;
///
/// assert_eq!(Radix::try_from(16), Ok(Radix::Hex));
/// assert!(Radix::try_from(12).is_err());
/// assert_eq!(Radix::Hex.value(), 16);
/// assert!(Radix::Hex.has_digit('F'));
/// assert!(!Radix::Oct.has_digit('8'));
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum Radix {
    /// Base 2.
    Bin = 2,
    /// Base 8.
    Oct = 8,
    /// Base 10.
    #[default]
    Dec = 10,
    /// Base 16.
    Hex = 16,
}

/// Binary radix, base 2.
pub const BIN: Radix = Radix::Bin;
/// Octal radix, base 8.
pub const OCT: Radix = Radix::Oct;
/// Decimal radix, base 10.
pub const DEC: Radix = Radix::Dec;
/// Hexadecimal radix, base 16.
pub const HEX: Radix = Radix::Hex;

impl Radix {
    /// The numeric base.
    #[must_use]
    pub const fn value(self) -> u32 {
        self as u32
    }

    /// Whether `ch` belongs to this radix's digit alphabet. Hexadecimal
    /// digits match in either case.
    #[must_use]
    pub fn has_digit(self, ch: char) -> bool {
        ch.is_digit(self.value())
    }

    /// The literal prefix announcing this radix; empty for decimal.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Bin => "0b",
            Self::Oct => "0o",
            Self::Dec => "",
            Self::Hex => "0x",
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Error produced when a raw integer does not name a supported radix.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("unsupported radix {value}; expected 2, 8, 10, or 16")]
pub struct RadixError {
    /// The rejected base.
    pub value: u32,
}

impl TryFrom<u32> for Radix {
    type Error = RadixError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Self::Bin),
            8 => Ok(Self::Oct),
            10 => Ok(Self::Dec),
            16 => Ok(Self::Hex),
            value => Err(RadixError { value }),
        }
    }
}
