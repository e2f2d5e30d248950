// Author: Dustin Pilgrim
// License: MIT

//! Integer comparison and arithmetic over literals and scope attributes.
//!
//! The operator token is the *last* entry of the scan list that occurs in the
//! expression, so `a >= b` selects `>=` even though `>` also matches. Operands
//! are the text on either side of the first occurrence of that token.

use crate::ast::{Scalar, Scope};
use crate::NeclError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Comparator {
    /// Scan order; a later match overrides an earlier one.
    const SCAN: [(&'static str, Comparator); 6] = [
        ("==", Comparator::Eq),
        ("!=", Comparator::Ne),
        ("<", Comparator::Lt),
        ("<=", Comparator::Le),
        (">", Comparator::Gt),
        (">=", Comparator::Ge),
    ];

    pub fn select(expression: &str) -> Option<(&'static str, Comparator)> {
        Self::SCAN
            .iter()
            .rev()
            .find(|(token, _)| expression.contains(token))
            .copied()
    }

    fn apply(self, lhs: i64, rhs: i64) -> bool {
        match self {
            Comparator::Eq => lhs == rhs,
            Comparator::Ne => lhs != rhs,
            Comparator::Lt => lhs < rhs,
            Comparator::Le => lhs <= rhs,
            Comparator::Gt => lhs > rhs,
            Comparator::Ge => lhs >= rhs,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    const SCAN: [(&'static str, Operator); 4] = [
        ("+", Operator::Add),
        ("-", Operator::Sub),
        ("*", Operator::Mul),
        ("/", Operator::Div),
    ];

    pub fn select(expression: &str) -> Option<(&'static str, Operator)> {
        Self::SCAN
            .iter()
            .rev()
            .find(|(token, _)| expression.contains(token))
            .copied()
    }
}

/// Evaluate `lhs <op> rhs` where both sides are integers.
pub fn compare(expression: &str, scope: &Scope) -> Result<bool, NeclError> {
    let (token, comparator) =
        Comparator::select(expression).ok_or_else(|| NeclError::UnknownComparator {
            expression: expression.to_string(),
            line: 0,
            hint: Some("Use one of ==, !=, <, <=, >, >=".into()),
        })?;

    let (left, right) = split_operands(expression, token);
    let lhs = resolve_operand(left, expression, scope, false)?;
    let rhs = resolve_operand(right, expression, scope, false)?;

    Ok(comparator.apply(lhs, rhs))
}

/// Evaluate `lhs <op> rhs` with integer semantics. Division truncates.
pub fn arithmetic(expression: &str, scope: &Scope) -> Result<i64, NeclError> {
    let (token, operator) =
        Operator::select(expression).ok_or_else(|| NeclError::UnknownOperator {
            expression: expression.to_string(),
            line: 0,
            hint: Some("Use one of +, -, *, /".into()),
        })?;

    let (left, right) = split_operands(expression, token);
    let lhs = resolve_operand(left, expression, scope, true)?;
    let rhs = resolve_operand(right, expression, scope, true)?;

    let result = match operator {
        Operator::Add => lhs.wrapping_add(rhs),
        Operator::Sub => lhs.wrapping_sub(rhs),
        Operator::Mul => lhs.wrapping_mul(rhs),
        Operator::Div => {
            if rhs == 0 {
                return Err(NeclError::DivisionByZero {
                    expression: expression.to_string(),
                    line: 0,
                    hint: None,
                });
            }
            lhs.wrapping_div(rhs)
        }
    };
    Ok(result)
}

fn split_operands<'a>(expression: &'a str, token: &str) -> (&'a str, &'a str) {
    // `select` only returns tokens that occur in the expression.
    let pos = expression.find(token).unwrap_or(expression.len());
    let right = expression.get(pos + token.len()..).unwrap_or("");
    (expression[..pos].trim(), right.trim())
}

/// Resolve an operand as an integer literal or an attribute of the scope.
/// Anything else, a fractional literal included, is an unknown reference.
///
/// With `truncate` set, float attributes are cut to integers instead of
/// rejected.
pub(crate) fn resolve_operand(
    text: &str,
    expression: &str,
    scope: &Scope,
    truncate: bool,
) -> Result<i64, NeclError> {
    if let Ok(n) = text.parse::<i64>() {
        return Ok(n);
    }

    let attribute = scope.get(text).ok_or_else(|| NeclError::UnknownAttributeReference {
        name: text.to_string(),
        expression: expression.to_string(),
        line: 0,
        hint: Some("Attributes must be defined earlier in the same block".into()),
    })?;

    match attribute.scalar_value() {
        Some(Scalar::Integer(n)) => Ok(*n),
        Some(Scalar::Float(f)) if truncate => Ok(*f as i64),
        _ => Err(NeclError::NonIntegerOperand {
            operand: text.to_string(),
            expression: expression.to_string(),
            line: 0,
            hint: Some("Only integer values can be compared or combined".into()),
        }),
    }
}
