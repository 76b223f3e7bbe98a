//! The evaluation front-end owning the registry and driving the pipeline.

use crate::converter::Converter;
use crate::error::EvalError;
use crate::interpreter::callable::{self, Callable, Operator};
use crate::interpreter::functions::{
    FunctionAddDays, FunctionFormatDate, FunctionIf, FunctionNow, FunctionReplace,
};
use crate::interpreter::operators::{
    OperatorAnd, OperatorEqual, OperatorGreater, OperatorGreaterOrEqual, OperatorLess,
    OperatorLessOrEqual, OperatorNot, OperatorNotEqual, OperatorOr, OperatorPlus,
};
use crate::interpreter::registry::CallableRegistry;
use crate::tokenizer::Tokenizer;
use crate::types::{Token, TokenKind, Value};

/// Marker atom denoting the absent value in input expressions.
const NULL_LITERAL: &str = "NULL";

/// Evaluates expressions against its set of registered callables.
///
/// Registration wires callable names into the tokenizer and operator
/// priorities into the converter, keeping all three in sync. Registration
/// must complete before evaluation begins; a fully-built evaluator is
/// read-only and safe to share across threads.
#[derive(Debug, Default)]
pub struct Evaluator {
    tokenizer: Tokenizer,
    converter: Converter,
    registry: CallableRegistry,
}

impl Evaluator {
    /// Create an evaluator with no registered callables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a function.
    pub fn add_function(&mut self, function: Box<dyn Callable>) -> Result<(), EvalError> {
        self.tokenizer.add_function(function.name())?;
        self.registry.insert_function(function)
    }

    /// Register an operator.
    pub fn add_operator(&mut self, operator: Box<dyn Operator>) -> Result<(), EvalError> {
        self.tokenizer.add_operator(operator.name())?;
        self.converter
            .add_operator(operator.name(), operator.priority())?;
        self.registry.insert_operator(operator)
    }

    /// Register the standard function set.
    ///
    /// Fails with [`EvalError::DuplicateName`] if a colliding custom
    /// function or operator was registered first.
    pub fn add_standard_functions(&mut self) -> Result<(), EvalError> {
        self.add_function(Box::new(FunctionAddDays))?;
        self.add_function(Box::new(FunctionFormatDate))?;
        self.add_function(Box::new(FunctionIf))?;
        self.add_function(Box::new(FunctionNow))?;
        self.add_function(Box::new(FunctionReplace))
    }

    /// Register the standard operator set.
    ///
    /// Fails with [`EvalError::DuplicateName`] if a colliding custom
    /// function or operator was registered first.
    pub fn add_standard_operators(&mut self) -> Result<(), EvalError> {
        self.add_operator(Box::new(OperatorAnd))?;
        self.add_operator(Box::new(OperatorEqual))?;
        self.add_operator(Box::new(OperatorGreaterOrEqual))?;
        self.add_operator(Box::new(OperatorGreater))?;
        self.add_operator(Box::new(OperatorLessOrEqual))?;
        self.add_operator(Box::new(OperatorLess))?;
        self.add_operator(Box::new(OperatorNotEqual))?;
        self.add_operator(Box::new(OperatorNot))?;
        self.add_operator(Box::new(OperatorOr))?;
        self.add_operator(Box::new(OperatorPlus))
    }

    /// Iterate over the registered functions, in no particular order.
    pub fn functions(&self) -> impl Iterator<Item = &dyn Callable> {
        self.registry.functions()
    }

    /// Iterate over the registered operators, in no particular order.
    pub fn operators(&self) -> impl Iterator<Item = &dyn Operator> {
        self.registry.operators()
    }

    /// Evaluate expression text into an optional string.
    ///
    /// Returns `None` when the expression evaluates to the absent value.
    pub fn evaluate(&self, text: &str) -> Result<Option<String>, EvalError> {
        let infix = self.tokenizer.tokenize(text)?;

        // A bit of syntax sugar: an expression containing nothing but atoms
        // is the literal input string itself, quoting rules and all.
        if infix.iter().all(|token| token.kind == TokenKind::Atom) {
            return Ok(Some(text.to_string()));
        }

        let postfix = self.converter.convert(infix)?;
        self.run(postfix)
    }

    /// Execute a postfix token sequence against a fresh evaluation stack.
    fn run(&self, postfix: Vec<Token>) -> Result<Option<String>, EvalError> {
        let mut stack: Vec<Value> = Vec::new();

        for token in postfix {
            match token.kind {
                TokenKind::Atom => stack.push(atom_value(token.text)),
                TokenKind::Operator => {
                    let operator = self.registry.operator(&token.text).ok_or_else(|| {
                        EvalError::UnsupportedOperator {
                            name: token.text.clone(),
                        }
                    })?;
                    callable::invoke(operator, &mut stack)?;
                }
                TokenKind::Function => {
                    let function = self.registry.function(&token.text).ok_or_else(|| {
                        EvalError::UnsupportedFunction {
                            name: token.text.clone(),
                        }
                    })?;
                    callable::invoke(function, &mut stack)?;
                }
                // The converter never emits these kinds.
                TokenKind::Comma
                | TokenKind::LeftBracket
                | TokenKind::RightBracket
                | TokenKind::Expression => return Err(EvalError::InvalidExpression),
            }
        }

        let Some(result) = stack.pop() else {
            return Err(EvalError::InvalidExpression);
        };
        if !stack.is_empty() {
            return Err(EvalError::InvalidExpression);
        }

        match result {
            Value::Absent => Ok(None),
            Value::Text(text) => Ok(Some(text)),
            Value::Bool(_) | Value::DateTime(_) => Err(EvalError::NonStringResult),
        }
    }
}

fn atom_value(text: String) -> Value {
    if text == NULL_LITERAL {
        Value::Absent
    } else {
        Value::Text(text)
    }
}
