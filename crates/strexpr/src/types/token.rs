use serde::{Deserialize, Serialize};

/// Classification of a lexical token.
///
/// The kind determines how the converter and evaluator process the token;
/// the carried text is only consulted for atoms, operators, and functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// A literal, unsplittable piece of text (a value source).
    Atom,
    /// Argument separator inside a function call.
    Comma,
    /// A registered function name.
    Function,
    /// A registered operator name.
    Operator,
    /// Opening parenthesis.
    LeftBracket,
    /// Closing parenthesis.
    RightBracket,
    /// Text not yet known to be atomic. Only exists mid-tokenization and is
    /// never present in the tokenizer's output.
    Expression,
}

/// A classified unit of lexical input. Immutable after construction;
/// equality is structural (kind plus text).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    /// The literal source substring (or symbol) this token carries.
    pub text: String,
}

impl Token {
    /// Create a new token from any string-like value.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
