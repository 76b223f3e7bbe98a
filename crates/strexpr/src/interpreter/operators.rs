//! The standard operator set.
//!
//! String values compare lexicographically. The equality-inclusive
//! comparisons (`<=`, `>=`, `==`, `!=`) tolerate the absent value, while the
//! strict comparisons (`<`, `>`) reject it outright.

use crate::error::EvalError;
use crate::interpreter::callable::{Callable, Operator};
use crate::types::Value;

/// Binding priorities of the standard operators. Higher binds tighter.
pub mod priority {
    pub const OR: u16 = 100;
    pub const AND: u16 = 200;
    pub const EQUALITY: u16 = 300;
    pub const COMPARISON: u16 = 400;
    pub const PLUS: u16 = 500;
    pub const NOT: u16 = 600;
}

fn invalid_arguments(callable: &dyn Callable) -> EvalError {
    EvalError::InvalidArguments {
        name: callable.name().to_string(),
    }
}

fn is_text_or_absent(value: &Value) -> bool {
    matches!(value, Value::Absent | Value::Text(_))
}

fn is_text(value: &Value) -> bool {
    matches!(value, Value::Text(_))
}

/// `!` - boolean negation.
#[derive(Debug, Default)]
pub struct OperatorNot;

impl Callable for OperatorNot {
    fn name(&self) -> &str {
        "!"
    }

    fn arity(&self) -> usize {
        1
    }

    fn check_arguments(&self, args: &[Value]) -> bool {
        matches!(args[0], Value::Bool(_))
    }

    fn compute(&self, args: Vec<Value>) -> Result<Value, EvalError> {
        let Ok([Value::Bool(operand)]) = <[Value; 1]>::try_from(args) else {
            return Err(invalid_arguments(self));
        };
        Ok(Value::Bool(!operand))
    }
}

impl Operator for OperatorNot {
    fn priority(&self) -> u16 {
        priority::NOT
    }
}

/// `&&` - boolean conjunction.
#[derive(Debug, Default)]
pub struct OperatorAnd;

impl Callable for OperatorAnd {
    fn name(&self) -> &str {
        "&&"
    }

    fn arity(&self) -> usize {
        2
    }

    fn check_arguments(&self, args: &[Value]) -> bool {
        matches!(args[0], Value::Bool(_)) && matches!(args[1], Value::Bool(_))
    }

    fn compute(&self, args: Vec<Value>) -> Result<Value, EvalError> {
        let Ok([Value::Bool(lhs), Value::Bool(rhs)]) = <[Value; 2]>::try_from(args) else {
            return Err(invalid_arguments(self));
        };
        Ok(Value::Bool(lhs && rhs))
    }
}

impl Operator for OperatorAnd {
    fn priority(&self) -> u16 {
        priority::AND
    }
}

/// `||` - boolean disjunction.
#[derive(Debug, Default)]
pub struct OperatorOr;

impl Callable for OperatorOr {
    fn name(&self) -> &str {
        "||"
    }

    fn arity(&self) -> usize {
        2
    }

    fn check_arguments(&self, args: &[Value]) -> bool {
        matches!(args[0], Value::Bool(_)) && matches!(args[1], Value::Bool(_))
    }

    fn compute(&self, args: Vec<Value>) -> Result<Value, EvalError> {
        let Ok([Value::Bool(lhs), Value::Bool(rhs)]) = <[Value; 2]>::try_from(args) else {
            return Err(invalid_arguments(self));
        };
        Ok(Value::Bool(lhs || rhs))
    }
}

impl Operator for OperatorOr {
    fn priority(&self) -> u16 {
        priority::OR
    }
}

/// `+` - text concatenation. Absent counts as empty text on either side;
/// both sides absent concatenate to absent.
#[derive(Debug, Default)]
pub struct OperatorPlus;

impl Callable for OperatorPlus {
    fn name(&self) -> &str {
        "+"
    }

    fn arity(&self) -> usize {
        2
    }

    fn check_arguments(&self, args: &[Value]) -> bool {
        is_text_or_absent(&args[0]) && is_text_or_absent(&args[1])
    }

    fn compute(&self, args: Vec<Value>) -> Result<Value, EvalError> {
        let Ok([lhs, rhs]) = <[Value; 2]>::try_from(args) else {
            return Err(invalid_arguments(self));
        };
        match (lhs, rhs) {
            (Value::Absent, Value::Absent) => Ok(Value::Absent),
            (Value::Absent, Value::Text(text)) | (Value::Text(text), Value::Absent) => {
                Ok(Value::Text(text))
            }
            (Value::Text(mut lhs), Value::Text(rhs)) => {
                lhs.push_str(&rhs);
                Ok(Value::Text(lhs))
            }
            _ => Err(invalid_arguments(self)),
        }
    }
}

impl Operator for OperatorPlus {
    fn priority(&self) -> u16 {
        priority::PLUS
    }
}

/// String equality over two texts; absent equals only absent.
fn equal(lhs: &Value, rhs: &Value) -> bool {
    match (lhs, rhs) {
        (Value::Absent, Value::Absent) => true,
        (Value::Text(lhs), Value::Text(rhs)) => lhs == rhs,
        _ => false,
    }
}

/// `==` - string equality.
#[derive(Debug, Default)]
pub struct OperatorEqual;

impl Callable for OperatorEqual {
    fn name(&self) -> &str {
        "=="
    }

    fn arity(&self) -> usize {
        2
    }

    fn check_arguments(&self, args: &[Value]) -> bool {
        is_text_or_absent(&args[0]) && is_text_or_absent(&args[1])
    }

    fn compute(&self, args: Vec<Value>) -> Result<Value, EvalError> {
        let Ok([lhs, rhs]) = <[Value; 2]>::try_from(args) else {
            return Err(invalid_arguments(self));
        };
        Ok(Value::Bool(equal(&lhs, &rhs)))
    }
}

impl Operator for OperatorEqual {
    fn priority(&self) -> u16 {
        priority::EQUALITY
    }
}

/// `!=` - string inequality.
#[derive(Debug, Default)]
pub struct OperatorNotEqual;

impl Callable for OperatorNotEqual {
    fn name(&self) -> &str {
        "!="
    }

    fn arity(&self) -> usize {
        2
    }

    fn check_arguments(&self, args: &[Value]) -> bool {
        is_text_or_absent(&args[0]) && is_text_or_absent(&args[1])
    }

    fn compute(&self, args: Vec<Value>) -> Result<Value, EvalError> {
        let Ok([lhs, rhs]) = <[Value; 2]>::try_from(args) else {
            return Err(invalid_arguments(self));
        };
        Ok(Value::Bool(!equal(&lhs, &rhs)))
    }
}

impl Operator for OperatorNotEqual {
    fn priority(&self) -> u16 {
        priority::EQUALITY
    }
}

/// `<` - strict lexicographic comparison; absent is invalid.
#[derive(Debug, Default)]
pub struct OperatorLess;

impl Callable for OperatorLess {
    fn name(&self) -> &str {
        "<"
    }

    fn arity(&self) -> usize {
        2
    }

    fn check_arguments(&self, args: &[Value]) -> bool {
        is_text(&args[0]) && is_text(&args[1])
    }

    fn compute(&self, args: Vec<Value>) -> Result<Value, EvalError> {
        let Ok([Value::Text(lhs), Value::Text(rhs)]) = <[Value; 2]>::try_from(args) else {
            return Err(invalid_arguments(self));
        };
        Ok(Value::Bool(lhs < rhs))
    }
}

impl Operator for OperatorLess {
    fn priority(&self) -> u16 {
        priority::COMPARISON
    }
}

/// `>` - strict lexicographic comparison; absent is invalid.
#[derive(Debug, Default)]
pub struct OperatorGreater;

impl Callable for OperatorGreater {
    fn name(&self) -> &str {
        ">"
    }

    fn arity(&self) -> usize {
        2
    }

    fn check_arguments(&self, args: &[Value]) -> bool {
        is_text(&args[0]) && is_text(&args[1])
    }

    fn compute(&self, args: Vec<Value>) -> Result<Value, EvalError> {
        let Ok([Value::Text(lhs), Value::Text(rhs)]) = <[Value; 2]>::try_from(args) else {
            return Err(invalid_arguments(self));
        };
        Ok(Value::Bool(lhs > rhs))
    }
}

impl Operator for OperatorGreater {
    fn priority(&self) -> u16 {
        priority::COMPARISON
    }
}

/// `<=` - lexicographic comparison; both sides absent compares true, a
/// single absent side is invalid.
#[derive(Debug, Default)]
pub struct OperatorLessOrEqual;

impl Callable for OperatorLessOrEqual {
    fn name(&self) -> &str {
        "<="
    }

    fn arity(&self) -> usize {
        2
    }

    fn check_arguments(&self, args: &[Value]) -> bool {
        (args[0].is_absent() && args[1].is_absent()) || (is_text(&args[0]) && is_text(&args[1]))
    }

    fn compute(&self, args: Vec<Value>) -> Result<Value, EvalError> {
        let Ok([lhs, rhs]) = <[Value; 2]>::try_from(args) else {
            return Err(invalid_arguments(self));
        };
        match (lhs, rhs) {
            (Value::Absent, Value::Absent) => Ok(Value::Bool(true)),
            (Value::Text(lhs), Value::Text(rhs)) => Ok(Value::Bool(lhs <= rhs)),
            _ => Err(invalid_arguments(self)),
        }
    }
}

impl Operator for OperatorLessOrEqual {
    fn priority(&self) -> u16 {
        priority::COMPARISON
    }
}

/// `>=` - lexicographic comparison; both sides absent compares true, a
/// single absent side is invalid.
#[derive(Debug, Default)]
pub struct OperatorGreaterOrEqual;

impl Callable for OperatorGreaterOrEqual {
    fn name(&self) -> &str {
        ">="
    }

    fn arity(&self) -> usize {
        2
    }

    fn check_arguments(&self, args: &[Value]) -> bool {
        (args[0].is_absent() && args[1].is_absent()) || (is_text(&args[0]) && is_text(&args[1]))
    }

    fn compute(&self, args: Vec<Value>) -> Result<Value, EvalError> {
        let Ok([lhs, rhs]) = <[Value; 2]>::try_from(args) else {
            return Err(invalid_arguments(self));
        };
        match (lhs, rhs) {
            (Value::Absent, Value::Absent) => Ok(Value::Bool(true)),
            (Value::Text(lhs), Value::Text(rhs)) => Ok(Value::Bool(lhs >= rhs)),
            _ => Err(invalid_arguments(self)),
        }
    }
}

impl Operator for OperatorGreaterOrEqual {
    fn priority(&self) -> u16 {
        priority::COMPARISON
    }
}
