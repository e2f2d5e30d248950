// Author: Dustin Pilgrim
// License: MIT

use super::*;
use crate::parser::value::{build_scalar, parse_array};

pub const INDEX_BINDING: &str = "index";
pub const VALUE_BINDING: &str = "value";

/// Evaluate `for <source> : <outcome>` into a new array.
///
/// Each iteration writes `index` and `value` into `scope` before the outcome
/// is evaluated. The bindings are left in place afterwards and are visible to
/// every later attribute of the same block.
pub(super) fn evaluate(raw: &str, body: &str, scope: &mut Scope) -> Result<Vec<Scalar>, NeclError> {
    let missing = || NeclError::MissingOutcome {
        expression: raw.to_string(),
        line: 0,
        hint: Some("Write it as: for <array> : <outcome>".into()),
    };

    let colon = body.rfind(':').ok_or_else(missing)?;
    let source = body[..colon].trim();
    let outcome = body[colon + 1..].trim();
    if source.is_empty() || outcome.is_empty() {
        return Err(missing());
    }

    let elements = source_elements(source, scope)?;
    let mut results = Vec::with_capacity(elements.len());

    for (index, element) in elements.into_iter().enumerate() {
        scope.insert(Attribute::scalar(
            INDEX_BINDING,
            AttributeType::Number,
            Scalar::Integer(index as i64),
        ));
        scope.insert(Attribute::scalar(VALUE_BINDING, element.kind(), element));

        results.push(evaluate_outcome(outcome, scope)?);
    }

    Ok(results)
}

fn source_elements(source: &str, scope: &Scope) -> Result<Vec<Scalar>, NeclError> {
    let invalid = || NeclError::InvalidProjectionSource {
        source: source.to_string(),
        line: 0,
        hint: Some("Iterate over an array attribute or an inline [..] literal".into()),
    };

    if let Some(attribute) = scope.get(source) {
        return attribute.array_value().map(<[Scalar]>::to_vec).ok_or_else(invalid);
    }

    if source.starts_with('[') && source.ends_with(']') {
        return parse_array(source, scope);
    }

    Err(invalid())
}

fn evaluate_outcome(outcome: &str, scope: &Scope) -> Result<Scalar, NeclError> {
    if let Some(attribute) = scope.get(outcome) {
        return attribute
            .scalar_value()
            .cloned()
            .ok_or_else(|| NeclError::NestedArrayNotAllowed {
                value: outcome.to_string(),
                line: 0,
                hint: Some("A projection outcome can't be an array".into()),
            });
    }

    match classify(outcome)? {
        ValueKind::Array => Err(NeclError::NestedArrayNotAllowed {
            value: outcome.to_string(),
            line: 0,
            hint: Some("A projection outcome can't be an array".into()),
        }),
        kind => build_scalar(outcome, kind, scope),
    }
}
