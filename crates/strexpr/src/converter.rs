//! Infix to postfix conversion via the shunting-yard algorithm.

use std::collections::HashMap;

use crate::error::EvalError;
use crate::types::{Token, TokenKind};

/// Reorders an infix token sequence into postfix order, given registered
/// operator priorities. Higher priority binds tighter; operators of equal
/// priority evaluate left to right.
#[derive(Debug, Default)]
pub struct Converter {
    priorities: HashMap<String, u16>,
}

impl Converter {
    /// Create a converter with no registered priorities.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an operator's priority.
    pub fn add_operator(&mut self, name: &str, priority: u16) -> Result<(), EvalError> {
        if self.priorities.contains_key(name) {
            return Err(EvalError::DuplicateName {
                name: name.to_string(),
            });
        }
        self.priorities.insert(name.to_string(), priority);
        Ok(())
    }

    /// Convert an infix token sequence into postfix order.
    ///
    /// The output queue and operator stack live on this call frame, so
    /// concurrent conversions never share state.
    pub fn convert(&self, infix: Vec<Token>) -> Result<Vec<Token>, EvalError> {
        let mut queue = Vec::with_capacity(infix.len());
        let mut stack: Vec<Token> = Vec::new();

        for token in infix {
            match token.kind {
                TokenKind::Atom => queue.push(token),
                TokenKind::Comma => drain_to_bracket(&mut stack, &mut queue),
                TokenKind::Function | TokenKind::LeftBracket => stack.push(token),
                TokenKind::Operator => self.process_operator(token, &mut stack, &mut queue)?,
                TokenKind::RightBracket => process_right_bracket(&mut stack, &mut queue)?,
                // The tokenizer never emits expression tokens.
                TokenKind::Expression => return Err(EvalError::InvalidExpression),
            }
        }

        while let Some(top) = stack.pop() {
            if top.kind == TokenKind::LeftBracket {
                return Err(EvalError::UnpairedBracket);
            }
            queue.push(top);
        }

        Ok(queue)
    }

    fn process_operator(
        &self,
        token: Token,
        stack: &mut Vec<Token>,
        queue: &mut Vec<Token>,
    ) -> Result<(), EvalError> {
        let priority = self.priority_of(&token.text)?;

        while let Some(top) = stack.last() {
            if top.kind != TokenKind::Operator {
                break;
            }
            // Equal priority pops too, which makes operators left-associative.
            if priority > self.priority_of(&top.text)? {
                break;
            }
            if let Some(top) = stack.pop() {
                queue.push(top);
            }
        }

        stack.push(token);
        Ok(())
    }

    fn priority_of(&self, name: &str) -> Result<u16, EvalError> {
        self.priorities
            .get(name)
            .copied()
            .ok_or_else(|| EvalError::UnknownOperator {
                name: name.to_string(),
            })
    }
}

/// Pop the stack to the queue until a left bracket is on top. The bracket
/// itself stays; commas only separate function arguments.
fn drain_to_bracket(stack: &mut Vec<Token>, queue: &mut Vec<Token>) {
    while stack
        .last()
        .is_some_and(|top| top.kind != TokenKind::LeftBracket)
    {
        if let Some(top) = stack.pop() {
            queue.push(top);
        }
    }
}

/// Pop the stack to the queue until the matching left bracket, discard the
/// bracket, then move a function sitting below it to the queue. That final
/// move is what places a function after its arguments in postfix order.
fn process_right_bracket(stack: &mut Vec<Token>, queue: &mut Vec<Token>) -> Result<(), EvalError> {
    loop {
        let Some(top) = stack.pop() else {
            return Err(EvalError::UnpairedBracket);
        };
        if top.kind == TokenKind::LeftBracket {
            break;
        }
        queue.push(top);
    }

    if stack
        .last()
        .is_some_and(|top| top.kind == TokenKind::Function)
    {
        if let Some(function) = stack.pop() {
            queue.push(function);
        }
    }

    Ok(())
}
