//! Raw lexical split using winnow.
//!
//! Breaks input text into structural symbols, quoted literals, and bare runs
//! of non-blank text. Classification against registered names happens in the
//! parent module; this pass only cares about shape.

use winnow::combinator::{alt, opt, preceded, repeat, terminated};
use winnow::prelude::*;
use winnow::token::{none_of, take_while};

/// A raw piece of the input before registry classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum RawPiece {
    Comma,
    LeftBracket,
    RightBracket,
    /// Contents of a double-quoted literal, with `\"` escapes resolved.
    /// Always becomes an atom, even when empty.
    Quoted(String),
    /// A run of characters delimited by blanks, structural symbols, or
    /// quotes. Classified against registered names later.
    Bare(String),
}

/// Split input text into raw pieces.
///
/// On failure returns the first character the scan could not consume.
pub(super) fn split(input: &str) -> Result<Vec<RawPiece>, char> {
    let mut remaining = input;
    match pieces(&mut remaining) {
        Ok(result) if remaining.is_empty() => Ok(result),
        _ => Err(remaining.chars().next().unwrap_or('?')),
    }
}

fn pieces(input: &mut &str) -> ModalResult<Vec<RawPiece>> {
    preceded(blanks, repeat(0.., terminated(piece, blanks))).parse_next(input)
}

/// Blank characters separate bare pieces but are otherwise dropped.
/// Only space and tab count; a newline travels with its piece.
fn blanks(input: &mut &str) -> ModalResult<()> {
    take_while(0.., [' ', '\t']).void().parse_next(input)
}

fn piece(input: &mut &str) -> ModalResult<RawPiece> {
    alt((structural, quoted, bare)).parse_next(input)
}

fn structural(input: &mut &str) -> ModalResult<RawPiece> {
    alt((
        ','.value(RawPiece::Comma),
        '('.value(RawPiece::LeftBracket),
        ')'.value(RawPiece::RightBracket),
    ))
    .parse_next(input)
}

/// A double-quoted literal. The closing quote is optional so that an
/// unterminated literal at end of input still yields its accumulated text.
fn quoted(input: &mut &str) -> ModalResult<RawPiece> {
    preceded('"', terminated(quoted_body, opt('"')))
        .map(RawPiece::Quoted)
        .parse_next(input)
}

/// Characters inside quotes. `\"` produces a literal quote with the
/// backslash consumed; any other backslash stays literal.
fn quoted_body(input: &mut &str) -> ModalResult<String> {
    repeat(0.., alt(("\\\"".value('"'), none_of('"')))).parse_next(input)
}

fn bare(input: &mut &str) -> ModalResult<RawPiece> {
    take_while(1.., |c: char| {
        !matches!(c, ',' | '(' | ')' | '"' | ' ' | '\t')
    })
    .map(|s: &str| RawPiece::Bare(s.to_string()))
    .parse_next(input)
}
