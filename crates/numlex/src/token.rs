//! The token record produced for a recognized literal.

use crate::{
    number::{Number, NumberKind},
    radix::Radix,
    scan::{at_boundary, scan_literal},
};

/// A numeric literal recognized inside a larger piece of text.
///
/// Tokens are immutable and borrow their [`source`](Token::source) from the
/// input they were scanned from; each call produces a fresh token and the
/// engine retains nothing between calls.
#[derive(Clone, Debug, PartialEq)]
pub struct Token<'src> {
    /// The literal body exactly as written: radix prefix included, leading
    /// whitespace and the bigint suffix excluded.
    pub source: &'src str,
    /// Radix under which the digits were validated.
    pub radix: Radix,
    /// The converted value.
    pub value: Number,
    /// Byte index into the original input where the body begins.
    pub offset: usize,
    /// Bytes consumed from `offset`, radix prefix and suffix included.
    pub length: usize,
    /// The literal form that was recognized.
    pub kind: NumberKind,
}

/// Extracts the numeric literal at the start of `input`.
///
/// Leading whitespace is skipped and reported through
/// [`offset`](Token::offset). The literal must stop at a recognized
/// boundary (end of input, whitespace, or one of `,` `;` `:` `)` `]` `}`);
/// any other trailing character fails the whole call. Signs and the special
/// float names belong to [`parse`](crate::parse), not to the tokenizer.
///
/// # Examples
///
/// ```
/// use numlex::{parse_token, Number, NumberKind, Radix};
///
/// let token = parse_token("    012345").unwrap();
/// assert_eq!(token.source, "012345");
/// assert_eq!(token.radix, Radix::Oct);
/// assert_eq!(token.value, Number::Int(5349));
/// assert_eq!(token.offset, 4);
/// assert_eq!(token.length, 6);
/// assert_eq!(token.kind, NumberKind::Int);
///
/// assert_eq!(parse_token("012345abc"), None);
/// ```
#[must_use]
pub fn parse_token(input: &str) -> Option<Token<'_>> {
    let body = input.trim_start();
    let offset = input.len() - body.len();
    let literal = scan_literal(body)?;
    if !at_boundary(&body[literal.len..]) {
        return None;
    }
    Some(Token {
        source: literal.source,
        radix: literal.radix,
        value: literal.value,
        offset,
        length: literal.len,
        kind: literal.kind,
    })
}
