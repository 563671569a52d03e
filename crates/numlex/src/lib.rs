//! Recognize, parse, and reformat numeric literals embedded in free-form
//! text, following a C-family lexical grammar: binary (`0b`), octal (`0o` or
//! the legacy leading-zero form), decimal (integer, fractional, scientific),
//! hexadecimal (`0x`), arbitrary-precision integers (`n` suffix), and the
//! special values `NaN` and `Infinity`.
//!
//! The crate exposes four small layers:
//!
//! - whole-string classifiers ([`is_bin`], [`is_oct`], [`is_dec`],
//!   [`is_hex`], [`is_bigint`], [`is_nan`], [`is_finite`]);
//! - a tokenizer ([`parse_token`]) that recognizes the longest literal at
//!   the start of a string and describes it as a [`Token`];
//! - a sign-aware parser ([`parse`]) with a lenient and a strict mode;
//! - a formatter ([`to_literal`]) rendering values back into canonical
//!   literal text for any supported [`Radix`].
//!
//! Every operation is a pure function over its input string: failure is
//! `None`, never a panic, and no state survives a call.
//!
//! ```
//! use numlex::{parse, parse_token, to_literal, Number, NumberKind, Radix};
//!
//! assert_eq!(parse("  -0x1f", false), Some(Number::Int(-31)));
//!
//! let token = parse_token("012345,").unwrap();
//! assert_eq!(token.source, "012345");
//! assert_eq!(token.radix, Radix::Oct);
//! assert_eq!(token.kind, NumberKind::Int);
//!
//! assert_eq!(to_literal(&Number::Int(12345), Radix::Hex), "0x3039");
//! ```
#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod classify;
mod format;
mod number;
mod parse;
mod radix;
mod scan;
mod token;

pub use num_bigint::BigInt;

pub use classify::{is_bigint, is_bin, is_dec, is_finite, is_hex, is_nan, is_oct};
pub use format::to_literal;
pub use number::{Number, NumberKind};
pub use parse::parse;
pub use radix::{BIN, DEC, HEX, OCT, Radix, RadixError};
pub use token::{Token, parse_token};
