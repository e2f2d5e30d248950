// Author: Dustin Pilgrim
// License: MIT

use super::*;
use crate::functions;
use crate::operators;
use crate::parser::classify::{mentions_boolean, COMPARISON_TOKENS, LOGIC_FUNCTIONS};
use crate::parser::value::{parse_number, Evaluated};
use crate::utils::{contains_many, is_quoted, parse_bool_literal, strip_quotes};

const FORBIDDEN_IN_CONDITION: [&str; 4] = ["upper(", "lower(", "concat(", "length("];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutcomeKind {
    Reference,
    String,
    Comparison,
    Contains,
    Logic,
    Boolean,
    Number,
}

#[derive(Debug)]
struct Outcome {
    kind: OutcomeKind,
    attribute_type: AttributeType,
    value: AttributeValue,
}

/// Evaluate `if <condition> ? <positive> : <negative>`.
///
/// Only the condition is evaluated. The selected outcome is returned as
/// classified: references, strings, booleans and numbers carry their value,
/// while comparison and function outcomes keep their raw text.
pub(super) fn evaluate(raw: &str, body: &str, scope: &Scope) -> Result<Evaluated, NeclError> {
    let (condition, positive, negative) = split(raw, body)?;

    let positive = classify_outcome(positive, scope)?;
    let negative = classify_outcome(negative, scope)?;

    let chosen = if evaluate_condition(condition, raw, scope)? {
        positive
    } else {
        negative
    };

    Ok((chosen.attribute_type, chosen.value))
}

/// The last `:` separates the negative outcome; the nearest `?` to its left
/// separates the condition.
fn split<'a>(raw: &str, body: &'a str) -> Result<(&'a str, &'a str, &'a str), NeclError> {
    let missing = || NeclError::MissingOutcome {
        expression: raw.to_string(),
        line: 0,
        hint: Some("Write it as: if <condition> ? <then> : <else>".into()),
    };

    let colon = body.rfind(':').ok_or_else(missing)?;
    let question = body[..colon].rfind('?').ok_or_else(missing)?;

    let parts = (
        body[..question].trim(),
        body[question + 1..colon].trim(),
        body[colon + 1..].trim(),
    );
    if parts.0.is_empty() || parts.1.is_empty() || parts.2.is_empty() {
        return Err(missing());
    }
    Ok(parts)
}

fn classify_outcome(text: &str, scope: &Scope) -> Result<Outcome, NeclError> {
    if let Some(attribute) = scope.get(text) {
        return Ok(Outcome {
            kind: OutcomeKind::Reference,
            attribute_type: attribute.kind,
            value: attribute.value.clone(),
        });
    }

    let deferred = |kind| Outcome {
        kind,
        attribute_type: AttributeType::Boolean,
        value: AttributeValue::Scalar(Scalar::Expression(text.to_string())),
    };

    let outcome = match text {
        t if is_quoted(t) => Outcome {
            kind: OutcomeKind::String,
            attribute_type: AttributeType::String,
            value: AttributeValue::Scalar(Scalar::String(strip_quotes(t).to_string())),
        },
        t if contains_many(t, &COMPARISON_TOKENS) => deferred(OutcomeKind::Comparison),
        t if t.contains("contains(") => deferred(OutcomeKind::Contains),
        t if contains_many(t, &LOGIC_FUNCTIONS) => deferred(OutcomeKind::Logic),
        t if mentions_boolean(t) => Outcome {
            kind: OutcomeKind::Boolean,
            attribute_type: AttributeType::Boolean,
            value: AttributeValue::Scalar(Scalar::Bool(parse_bool_literal(t).unwrap_or(false))),
        },
        t => {
            let number = parse_number(t).map_err(|_| unclassifiable(t))?;
            Outcome {
                kind: OutcomeKind::Number,
                attribute_type: AttributeType::Number,
                value: AttributeValue::Scalar(number),
            }
        }
    };
    Ok(outcome)
}

fn unclassifiable(text: &str) -> NeclError {
    NeclError::UnclassifiableValue {
        value: text.to_string(),
        line: 0,
        hint: Some("Outcomes are attributes, strings, comparisons, contains(), logic functions, booleans or numbers".into()),
    }
}

fn evaluate_condition(condition: &str, raw: &str, scope: &Scope) -> Result<bool, NeclError> {
    if let Some(function) = FORBIDDEN_IN_CONDITION.iter().find(|f| condition.contains(*f)) {
        return Err(NeclError::InvalidFunctionInCondition {
            function: function.trim_end_matches('(').to_string(),
            expression: raw.to_string(),
            line: 0,
            hint: Some("contains() is the only string function allowed in a condition".into()),
        });
    }

    let outcome = classify_outcome(condition, scope)?;
    let invalid = |kind: AttributeType| NeclError::InvalidConditionType {
        kind: kind.to_string(),
        expression: raw.to_string(),
        line: 0,
        hint: Some("Conditions must be booleans, comparisons, contains() or logic functions".into()),
    };

    match (outcome.kind, &outcome.value) {
        (OutcomeKind::Comparison | OutcomeKind::Contains | OutcomeKind::Logic, _) => {
            evaluate_deferred(condition, scope)
        }
        (OutcomeKind::Boolean | OutcomeKind::Reference, AttributeValue::Scalar(Scalar::Bool(b))) => Ok(*b),
        (OutcomeKind::Reference, AttributeValue::Scalar(Scalar::Expression(text))) => {
            evaluate_deferred(text, scope)
        }
        _ => Err(invalid(outcome.attribute_type)),
    }
}

/// Evaluate comparison, `contains(...)` or logic-function text as a boolean.
fn evaluate_deferred(text: &str, scope: &Scope) -> Result<bool, NeclError> {
    if contains_many(text, &COMPARISON_TOKENS) {
        return operators::compare(text, scope);
    }

    if text.contains("contains(") {
        return match functions::string::call(text, scope)? {
            Scalar::Bool(b) => Ok(b),
            other => Err(NeclError::InvalidConditionType {
                kind: other.kind().to_string(),
                expression: text.to_string(),
                line: 0,
                hint: None,
            }),
        };
    }

    functions::logic::call(text, scope)
}
