//! The standard function set.
//!
//! All standard functions return text, a datetime, or the absent value;
//! argument contracts are documented per function.

use std::fmt::Write as _;

use chrono::{Duration, Utc};
use regex::Regex;

use crate::error::EvalError;
use crate::interpreter::callable::Callable;
use crate::types::Value;

/// `NOW()` - the current UTC datetime.
#[derive(Debug, Default)]
pub struct FunctionNow;

impl Callable for FunctionNow {
    fn name(&self) -> &str {
        "NOW"
    }

    fn arity(&self) -> usize {
        0
    }

    fn check_arguments(&self, _args: &[Value]) -> bool {
        true
    }

    fn compute(&self, _args: Vec<Value>) -> Result<Value, EvalError> {
        Ok(Value::DateTime(Utc::now()))
    }
}

/// `ADD_DAYS(datetime, days)` - shift a datetime by a signed number of days,
/// normalized across month and year boundaries.
///
/// The second argument is text parseable as a signed integer.
#[derive(Debug, Default)]
pub struct FunctionAddDays;

impl Callable for FunctionAddDays {
    fn name(&self) -> &str {
        "ADD_DAYS"
    }

    fn arity(&self) -> usize {
        2
    }

    fn check_arguments(&self, args: &[Value]) -> bool {
        matches!(args[0], Value::DateTime(_))
            && args[1]
                .as_text()
                .is_some_and(|days| days.parse::<i64>().is_ok())
    }

    fn compute(&self, args: Vec<Value>) -> Result<Value, EvalError> {
        let Ok([Value::DateTime(datetime), Value::Text(days)]) = <[Value; 2]>::try_from(args)
        else {
            return Err(self.invalid_arguments());
        };
        let days = days.parse::<i64>().map_err(|_| self.invalid_arguments())?;
        // Checked arithmetic keeps absurd day counts an error, not a panic.
        let shifted = Duration::try_days(days)
            .and_then(|delta| datetime.checked_add_signed(delta))
            .ok_or_else(|| self.invalid_arguments())?;
        Ok(Value::DateTime(shifted))
    }
}

impl FunctionAddDays {
    fn invalid_arguments(&self) -> EvalError {
        EvalError::InvalidArguments {
            name: self.name().to_string(),
        }
    }
}

/// `FORMAT_DATE(datetime, pattern)` - format a datetime with a
/// strftime-style pattern.
///
/// Yields the absent value when the pattern produces no output, including
/// a pattern the formatter cannot render.
#[derive(Debug, Default)]
pub struct FunctionFormatDate;

impl Callable for FunctionFormatDate {
    fn name(&self) -> &str {
        "FORMAT_DATE"
    }

    fn arity(&self) -> usize {
        2
    }

    fn check_arguments(&self, args: &[Value]) -> bool {
        matches!(args[0], Value::DateTime(_)) && matches!(args[1], Value::Text(_))
    }

    fn compute(&self, args: Vec<Value>) -> Result<Value, EvalError> {
        let Ok([Value::DateTime(datetime), Value::Text(pattern)]) = <[Value; 2]>::try_from(args)
        else {
            return Err(EvalError::InvalidArguments {
                name: self.name().to_string(),
            });
        };

        let mut formatted = String::new();
        if write!(formatted, "{}", datetime.format(&pattern)).is_err() || formatted.is_empty() {
            return Ok(Value::Absent);
        }
        Ok(Value::Text(formatted))
    }
}

/// `IF(condition, then, otherwise)` - the second argument when the condition
/// is true, else the third, either passed through unchanged (including the
/// absent value).
#[derive(Debug, Default)]
pub struct FunctionIf;

impl Callable for FunctionIf {
    fn name(&self) -> &str {
        "IF"
    }

    fn arity(&self) -> usize {
        3
    }

    fn check_arguments(&self, args: &[Value]) -> bool {
        matches!(args[0], Value::Bool(_))
    }

    fn compute(&self, args: Vec<Value>) -> Result<Value, EvalError> {
        let Ok([Value::Bool(condition), then, otherwise]) = <[Value; 3]>::try_from(args) else {
            return Err(EvalError::InvalidArguments {
                name: self.name().to_string(),
            });
        };
        Ok(if condition { then } else { otherwise })
    }
}

/// `REPLACE(source, pattern, replacement)` - substitute every match of a
/// regular expression pattern.
///
/// The source may be text or absent (absent propagates); the pattern is
/// non-empty text holding a valid regular expression; the replacement is
/// text and may reference capture groups with `$1`-style syntax.
#[derive(Debug, Default)]
pub struct FunctionReplace;

impl Callable for FunctionReplace {
    fn name(&self) -> &str {
        "REPLACE"
    }

    fn arity(&self) -> usize {
        3
    }

    fn check_arguments(&self, args: &[Value]) -> bool {
        matches!(args[0], Value::Absent | Value::Text(_))
            && args[1]
                .as_text()
                .is_some_and(|pattern| !pattern.is_empty() && Regex::new(pattern).is_ok())
            && matches!(args[2], Value::Text(_))
    }

    fn compute(&self, args: Vec<Value>) -> Result<Value, EvalError> {
        let Ok([source, Value::Text(pattern), Value::Text(replacement)]) =
            <[Value; 3]>::try_from(args)
        else {
            return Err(self.invalid_arguments());
        };

        match source {
            Value::Absent => Ok(Value::Absent),
            Value::Text(text) => {
                let regex = Regex::new(&pattern).map_err(|_| self.invalid_arguments())?;
                Ok(Value::Text(
                    regex.replace_all(&text, replacement.as_str()).into_owned(),
                ))
            }
            Value::Bool(_) | Value::DateTime(_) => Err(self.invalid_arguments()),
        }
    }
}

impl FunctionReplace {
    fn invalid_arguments(&self) -> EvalError {
        EvalError::InvalidArguments {
            name: self.name().to_string(),
        }
    }
}
