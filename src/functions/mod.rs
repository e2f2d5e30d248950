// Author: Dustin Pilgrim
// License: MIT

//! Built-in string, math and logic functions.
//!
//! Arguments are never evaluated: each one is either the name of an attribute
//! in the current scope, or a literal with one layer of quotes stripped.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lexer::split_unquoted;
use crate::NeclError;

pub mod logic;
pub mod math;
pub mod string;

static FUNCTION_CALL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([A-Za-z_][A-Za-z0-9_]*)\s*\((.*)\)\s*$").expect("function call pattern is valid")
});

/// A parsed `name(args)` call.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Call<'a> {
    pub name: &'a str,
    pub args: Vec<&'a str>,
    pub expression: &'a str,
}

impl<'a> Call<'a> {
    pub(crate) fn parse(expression: &'a str) -> Result<Self, NeclError> {
        let caps = FUNCTION_CALL
            .captures(expression)
            .ok_or_else(|| unknown_function(expression))?;

        let (Some(name), Some(inner)) = (caps.get(1), caps.get(2)) else {
            return Err(unknown_function(expression));
        };

        let inner = inner.as_str().trim();
        let args = if inner.is_empty() {
            Vec::new()
        } else {
            split_unquoted(inner, ',').into_iter().map(str::trim).collect()
        };

        Ok(Self {
            name: name.as_str(),
            args,
            expression,
        })
    }

    /// The single argument of a unary function. Commas are not separators here.
    pub(crate) fn unary(&self) -> &'a str {
        let open = self.expression.find('(').map_or(0, |i| i + 1);
        let close = self.expression.rfind(')').unwrap_or(self.expression.len());
        self.expression.get(open..close).unwrap_or("").trim()
    }

    pub(crate) fn binary(&self) -> Result<(&'a str, &'a str), NeclError> {
        match self.args.as_slice() {
            [a, b] if !b.is_empty() => Ok((*a, *b)),
            _ => Err(NeclError::WrongArgumentCount {
                function: self.name.to_string(),
                expected: 2,
                found: self.args.iter().filter(|a| !a.is_empty()).count(),
                line: 0,
                hint: Some(format!("Call it as {}(a, b)", self.name)),
            }),
        }
    }

    pub(crate) fn type_mismatch(&self, argument: &str, expected: &str) -> NeclError {
        NeclError::ArgumentTypeMismatch {
            function: self.name.to_string(),
            argument: argument.to_string(),
            expected: expected.to_string(),
            line: 0,
            hint: None,
        }
    }

    pub(crate) fn unknown_reference(&self, argument: &str) -> NeclError {
        NeclError::UnknownAttributeReference {
            name: argument.to_string(),
            expression: self.expression.to_string(),
            line: 0,
            hint: Some("Attributes must be defined earlier in the same block".into()),
        }
    }

    pub(crate) fn unknown(&self) -> NeclError {
        unknown_function(self.expression)
    }
}

fn unknown_function(expression: &str) -> NeclError {
    NeclError::UnknownFunction {
        expression: expression.to_string(),
        line: 0,
        hint: Some(
            "Available: upper, lower, concat, contains, length, power, floor, remainder, and, or, nand, nor, xor, xnor"
                .into(),
        ),
    }
}
