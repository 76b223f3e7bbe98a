//! The callable abstraction shared by functions and operators.

use crate::error::EvalError;
use crate::types::Value;

/// A named, fixed-arity operation over values.
///
/// Implementors validate the values popped for them with
/// [`check_arguments`](Callable::check_arguments) and produce exactly one
/// result value with [`compute`](Callable::compute). The `Send + Sync` bound
/// lets a fully-built registry be shared by concurrent evaluations.
pub trait Callable: Send + Sync {
    /// The callable's name, unique across all registered functions and
    /// operators.
    fn name(&self) -> &str;

    /// The number of arguments consumed from the evaluation stack.
    fn arity(&self) -> usize;

    /// Validate argument types. `args.len()` always equals
    /// [`arity`](Callable::arity) when called by the evaluator.
    fn check_arguments(&self, args: &[Value]) -> bool;

    /// Produce the result value. Called only after `check_arguments`
    /// accepted the arguments; the result may be [`Value::Absent`].
    fn compute(&self, args: Vec<Value>) -> Result<Value, EvalError>;
}

/// An operator: a callable with a binding priority. Higher binds tighter.
pub trait Operator: Callable {
    fn priority(&self) -> u16;
}

/// Invoke a callable against the evaluation stack.
///
/// Pops exactly `arity` values (the first popped is the last argument),
/// validates them, and pushes the single result. Stack entries below the
/// consumed arguments are left untouched.
pub(crate) fn invoke(callable: &dyn Callable, stack: &mut Vec<Value>) -> Result<(), EvalError> {
    let arity = callable.arity();
    if stack.len() < arity {
        return Err(EvalError::InsufficientArguments {
            name: callable.name().to_string(),
        });
    }

    let args = stack.split_off(stack.len() - arity);
    if !callable.check_arguments(&args) {
        return Err(EvalError::InvalidArguments {
            name: callable.name().to_string(),
        });
    }

    stack.push(callable.compute(args)?);
    Ok(())
}
