//! Lexical tokenizer for expression text.
//!
//! Tokenizing runs in three passes:
//! 1. a raw winnow scan splits the text on blanks, structural symbols, and
//!    quoted literals;
//! 2. every piece not yet known to be atomic is split on registered operator
//!    substrings, longest names first, so `A+B` works without spaces;
//! 3. remaining unclassified pieces become atoms.

mod splitter;

use std::cmp::Reverse;
use std::collections::HashSet;

use crate::error::EvalError;
use crate::types::{Token, TokenKind};
use splitter::RawPiece;

/// Splits raw text into tokens, given the set of registered operator and
/// function names.
#[derive(Debug, Default)]
pub struct Tokenizer {
    functions: HashSet<String>,
    /// Registered operator names, in registration order. When two operators
    /// of equal length could split the same text, the earlier registration
    /// wins.
    operators: Vec<String>,
}

impl Tokenizer {
    /// Create a tokenizer with no registered names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a function name.
    pub fn add_function(&mut self, name: &str) -> Result<(), EvalError> {
        self.check_uniqueness(name)?;
        self.functions.insert(name.to_string());
        Ok(())
    }

    /// Register an operator name.
    pub fn add_operator(&mut self, name: &str) -> Result<(), EvalError> {
        self.check_uniqueness(name)?;
        self.operators.push(name.to_string());
        Ok(())
    }

    /// Split expression text into a token sequence.
    ///
    /// Never fails on ordinary text; only an unrecognized structural
    /// character raises [`EvalError::UnknownSymbol`].
    pub fn tokenize(&self, text: &str) -> Result<Vec<Token>, EvalError> {
        let pieces =
            splitter::split(text).map_err(|symbol| EvalError::UnknownSymbol { symbol })?;
        let raw = self.classify_pieces(pieces);
        let refined = self.split_by_operators(raw);
        Ok(finalize(refined))
    }

    fn check_uniqueness(&self, name: &str) -> Result<(), EvalError> {
        if self.functions.contains(name) || self.operators.iter().any(|op| op == name) {
            return Err(EvalError::DuplicateName {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    fn classify_pieces(&self, pieces: Vec<RawPiece>) -> Vec<Token> {
        pieces
            .into_iter()
            .map(|piece| match piece {
                RawPiece::Comma => Token::new(TokenKind::Comma, ","),
                RawPiece::LeftBracket => Token::new(TokenKind::LeftBracket, "("),
                RawPiece::RightBracket => Token::new(TokenKind::RightBracket, ")"),
                // A quoted literal is always an atom, whatever its content.
                RawPiece::Quoted(text) => Token::new(TokenKind::Atom, text),
                RawPiece::Bare(text) => self.classified(&text),
            })
            .collect()
    }

    /// Split every expression token on each registered operator's exact
    /// substring, longest operator names first.
    fn split_by_operators(&self, mut tokens: Vec<Token>) -> Vec<Token> {
        let mut ordered: Vec<&str> = self.operators.iter().map(String::as_str).collect();
        // Stable sort: registration order breaks ties between equal lengths.
        ordered.sort_by_key(|name| Reverse(name.len()));

        for name in ordered {
            tokens = self.split_by_operator(tokens, name);
        }
        tokens
    }

    fn split_by_operator(&self, tokens: Vec<Token>, name: &str) -> Vec<Token> {
        let mut result = Vec::with_capacity(tokens.len());

        for token in tokens {
            if token.kind != TokenKind::Expression {
                result.push(token);
                continue;
            }

            let mut rest = token.text.as_str();
            let mut matched = false;
            while let Some(pos) = rest.find(name) {
                matched = true;
                if pos > 0 {
                    result.push(self.classified(&rest[..pos]));
                }
                result.push(Token::new(TokenKind::Operator, name));
                rest = &rest[pos + name.len()..];
            }

            if !matched {
                result.push(token);
            } else if !rest.is_empty() {
                result.push(self.classified(rest));
            }
        }

        result
    }

    fn classified(&self, text: &str) -> Token {
        let kind = if self.operators.iter().any(|op| op == text) {
            TokenKind::Operator
        } else if self.functions.contains(text) {
            TokenKind::Function
        } else {
            TokenKind::Expression
        };
        Token::new(kind, text)
    }
}

/// Expressions that never matched an operator substring are literal text.
fn finalize(tokens: Vec<Token>) -> Vec<Token> {
    tokens
        .into_iter()
        .map(|token| {
            if token.kind == TokenKind::Expression {
                Token::new(TokenKind::Atom, token.text)
            } else {
                token
            }
        })
        .collect()
}
