//! Error types for expression evaluation and registration.

use thiserror::Error;

/// An error raised during registration or a single `evaluate` call.
///
/// Every variant is terminal for the call that raised it; nothing is retried
/// or recovered internally, and no partial result is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    /// A function or operator name collides with an already registered one.
    /// Uniqueness spans both collections.
    #[error("'{name}' is already registered")]
    DuplicateName { name: String },

    /// The tokenizer met a structural character it does not recognize.
    #[error("unexpected symbol '{symbol}' in expression")]
    UnknownSymbol { symbol: char },

    /// Mismatched parentheses, in either direction.
    #[error("unpaired bracket in expression")]
    UnpairedBracket,

    /// An operator token has no registered priority.
    #[error("unknown operator '{name}'")]
    UnknownOperator { name: String },

    /// An operator token names a callable absent from the evaluator's map.
    #[error("unsupported operator '{name}'")]
    UnsupportedOperator { name: String },

    /// A function token names a callable absent from the evaluator's map.
    #[error("unsupported function '{name}'")]
    UnsupportedFunction { name: String },

    /// The evaluation stack held fewer values than the callable's arity.
    #[error("not enough arguments for '{name}'")]
    InsufficientArguments { name: String },

    /// A callable rejected the values popped for it.
    #[error("invalid arguments for '{name}'")]
    InvalidArguments { name: String },

    /// Evaluation finished with the stack not holding exactly one value,
    /// e.g. a missing operator between two atoms or a dangling operand.
    #[error("invalid expression")]
    InvalidExpression,

    /// The final value is neither text nor absent, e.g. a bare comparison
    /// like `A == B` whose boolean result never reached an `IF`.
    #[error("expression result is not a string")]
    NonStringResult,
}
