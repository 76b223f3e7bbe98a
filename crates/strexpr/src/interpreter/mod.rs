//! Postfix evaluation against a registry of pluggable callables.
//!
//! This module provides the callable abstraction shared by functions and
//! operators, the registry that owns registered callables, the standard
//! callable set, and the [`Evaluator`] front-end that drives the whole
//! tokenize-convert-execute pipeline.

mod callable;
mod evaluator;
mod functions;
mod operators;
mod registry;

pub use callable::{Callable, Operator};
pub use evaluator::Evaluator;
pub use functions::{
    FunctionAddDays, FunctionFormatDate, FunctionIf, FunctionNow, FunctionReplace,
};
pub use operators::{
    OperatorAnd, OperatorEqual, OperatorGreater, OperatorGreaterOrEqual, OperatorLess,
    OperatorLessOrEqual, OperatorNot, OperatorNotEqual, OperatorOr, OperatorPlus, priority,
};
pub use registry::CallableRegistry;
