//! Registry owning every registered callable, keyed by name.

use std::collections::HashMap;

use crate::error::EvalError;
use crate::interpreter::callable::{Callable, Operator};

/// Owns the registered functions and operators.
///
/// Names are unique across both collections combined; once registered, a
/// callable is never removed or replaced. The registry is built during setup
/// and read-only during evaluation.
#[derive(Default)]
pub struct CallableRegistry {
    functions: HashMap<String, Box<dyn Callable>>,
    operators: HashMap<String, Box<dyn Operator>>,
}

impl CallableRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a function, failing on a name collision with any registered
    /// function or operator.
    pub fn insert_function(&mut self, function: Box<dyn Callable>) -> Result<(), EvalError> {
        self.check_uniqueness(function.name())?;
        self.functions.insert(function.name().to_string(), function);
        Ok(())
    }

    /// Insert an operator, failing on a name collision with any registered
    /// function or operator.
    pub fn insert_operator(&mut self, operator: Box<dyn Operator>) -> Result<(), EvalError> {
        self.check_uniqueness(operator.name())?;
        self.operators.insert(operator.name().to_string(), operator);
        Ok(())
    }

    /// Look up a function by name.
    pub fn function(&self, name: &str) -> Option<&dyn Callable> {
        self.functions.get(name).map(|f| f.as_ref())
    }

    /// Look up an operator by name.
    pub fn operator(&self, name: &str) -> Option<&dyn Operator> {
        self.operators.get(name).map(|op| op.as_ref())
    }

    /// Iterate over the registered functions, in no particular order.
    pub fn functions(&self) -> impl Iterator<Item = &dyn Callable> {
        self.functions.values().map(|f| f.as_ref())
    }

    /// Iterate over the registered operators, in no particular order.
    pub fn operators(&self) -> impl Iterator<Item = &dyn Operator> {
        self.operators.values().map(|op| op.as_ref())
    }

    fn check_uniqueness(&self, name: &str) -> Result<(), EvalError> {
        if self.functions.contains_key(name) || self.operators.contains_key(name) {
            return Err(EvalError::DuplicateName {
                name: name.to_string(),
            });
        }
        Ok(())
    }
}

impl std::fmt::Debug for CallableRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallableRegistry")
            .field("functions", &self.functions.keys())
            .field("operators", &self.operators.keys())
            .finish()
    }
}
