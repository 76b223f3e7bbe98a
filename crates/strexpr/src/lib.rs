//! Spreadsheet-style string expression evaluation.
//!
//! `strexpr` evaluates small text expressions - literal atoms, infix
//! operators, and parenthesized function calls - into a single optional
//! string. The pipeline is: tokenize the raw text, reorder the infix token
//! sequence into postfix via shunting-yard, then execute the postfix sequence
//! against a registry of pluggable functions and operators.
//!
//! # Example
//!
//! ```
//! use strexpr::Evaluator;
//!
//! let mut evaluator = Evaluator::new();
//! evaluator.add_standard_functions().unwrap();
//! evaluator.add_standard_operators().unwrap();
//!
//! let result = evaluator.evaluate("IF(A == A, \"yes\", \"no\")").unwrap();
//! assert_eq!(result.as_deref(), Some("yes"));
//!
//! // Plain text with no recognized symbols passes through untouched.
//! let result = evaluator.evaluate("just some text").unwrap();
//! assert_eq!(result.as_deref(), Some("just some text"));
//!
//! // The bare literal NULL denotes the absent value.
//! let result = evaluator.evaluate("NULL + NULL").unwrap();
//! assert_eq!(result, None);
//! ```

pub mod converter;
pub mod error;
pub mod interpreter;
pub mod tokenizer;
pub mod types;

pub use converter::Converter;
pub use error::EvalError;
pub use interpreter::{Callable, CallableRegistry, Evaluator, Operator};
pub use tokenizer::Tokenizer;
pub use types::{Token, TokenKind, Value};
