// Author: Dustin Pilgrim
// License: MIT

use crate::NeclError;
use crate::utils::{contains_many, is_quoted, parse_float_literal};

pub(crate) const COMPARISON_TOKENS: [&str; 6] = ["==", "!=", "<", "<=", ">", ">="];
pub(crate) const ARITHMETIC_TOKENS: [&str; 4] = ["+", "-", "*", "/"];
pub(crate) const STRING_FUNCTIONS: [&str; 5] = ["upper(", "lower(", "concat(", "contains(", "length("];
pub(crate) const MATH_FUNCTIONS: [&str; 3] = ["power(", "floor(", "remainder("];
pub(crate) const LOGIC_FUNCTIONS: [&str; 6] = ["and(", "or(", "nand(", "nor(", "xor(", "xnor("];

/// Kind of value a raw fragment denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Array,
    Comparison,
    Arithmetic,
    FuncString,
    FuncMath,
    FuncLogic,
    Boolean,
    Number,
}

/// Classify a trimmed fragment. First matching arm wins; the arm order is the
/// only disambiguation, e.g. a quoted string containing `+` is a string.
///
/// The boolean arm is a case-insensitive substring test, so anything that
/// merely contains `true` or `false` lands there.
pub fn classify(value: &str) -> Result<ValueKind, NeclError> {
    let kind = match value {
        v if is_quoted(v) => ValueKind::String,
        v if v.starts_with('[') && v.ends_with(']') => ValueKind::Array,
        v if contains_many(v, &COMPARISON_TOKENS) => ValueKind::Comparison,
        v if contains_many(v, &ARITHMETIC_TOKENS) => ValueKind::Arithmetic,
        v if contains_many(v, &STRING_FUNCTIONS) => ValueKind::FuncString,
        v if contains_many(v, &MATH_FUNCTIONS) => ValueKind::FuncMath,
        v if contains_many(v, &LOGIC_FUNCTIONS) => ValueKind::FuncLogic,
        v if mentions_boolean(v) => ValueKind::Boolean,
        v if parse_float_literal(v).is_some() => ValueKind::Number,
        v => {
            return Err(NeclError::UnclassifiableValue {
                value: v.to_string(),
                line: 0,
                hint: Some("Quote strings, use [..] for arrays, or write a number/boolean".into()),
            });
        }
    };
    Ok(kind)
}

pub(crate) fn mentions_boolean(value: &str) -> bool {
    let lower = value.to_lowercase();
    lower.contains("true") || lower.contains("false")
}
