// Author: Dustin Pilgrim
// License: MIT

use super::*;
use crate::functions;
use crate::lexer::split_unquoted;
use crate::operators;
use crate::utils::{has_decimal_separator, parse_bool_literal, parse_float_literal, strip_quotes};

/// Type tag and payload produced for one attribute value.
pub(crate) type Evaluated = (AttributeType, AttributeValue);

/// Parse an attribute line (`name = value`). Lines without `=` carry no
/// attribute and yield `None`.
///
/// Multi-line strings and arrays pull their continuation lines from the
/// parser, so those lines are never scanned again.
pub(super) fn parse_attribute(
    parser: &mut Parser,
    text: &str,
    scope: &mut Scope,
) -> Result<Option<Attribute>, NeclError> {
    let Some(eq) = text.find('=') else {
        return Ok(None);
    };

    let name = text[..eq].trim();
    if name.is_empty() {
        return Err(NeclError::EmptyAttributeName {
            line: parser.line(),
            hint: Some("Write attributes as: name = value".into()),
        });
    }

    let raw = text[eq + 1..].trim();

    let (kind, value) = if raw.ends_with('\\') {
        let joined = collect_multiline_string(parser, raw);
        (AttributeType::String, AttributeValue::Scalar(Scalar::String(joined)))
    } else if raw.starts_with('[') && !raw.contains(']') {
        let joined = collect_multiline_array(parser, raw)?;
        evaluate(&joined, scope)?
    } else {
        evaluate(raw, scope)?
    };

    Ok(Some(Attribute {
        name: name.to_string(),
        kind,
        value,
    }))
}

fn collect_multiline_string(parser: &mut Parser, first: &str) -> String {
    let mut pieces = vec![continuation_piece(first)];
    let mut continues = true;

    while continues {
        let Some(next) = parser.bump() else {
            break;
        };
        let next = next.trim();
        continues = next.ends_with('\\');
        pieces.push(continuation_piece(next));
    }

    pieces.join(" ")
}

fn continuation_piece(line: &str) -> String {
    let line = line.trim();
    let line = line.strip_suffix('\\').unwrap_or(line).trim();
    strip_quotes(line).to_string()
}

fn collect_multiline_array(parser: &mut Parser, first: &str) -> Result<String, NeclError> {
    let start = parser.line();
    let mut joined = first.to_string();

    loop {
        let Some(next) = parser.bump() else {
            return Err(NeclError::UnclassifiableValue {
                value: joined,
                line: start,
                hint: Some("Multi-line array is missing its closing ']'".into()),
            });
        };
        joined.push(' ');
        joined.push_str(next.trim());
        if next.contains(']') {
            return Ok(joined);
        }
    }
}

/// `if ...` / `for ...` bodies; the keyword must be followed by whitespace.
pub(super) fn keyword_body<'a>(raw: &'a str, keyword: &str) -> Option<&'a str> {
    raw.strip_prefix(keyword)
        .filter(|rest| rest.starts_with(char::is_whitespace))
}

/// Evaluate a single-line value: conditional and projection expressions
/// first, then the classification cascade.
pub(crate) fn evaluate(raw: &str, scope: &mut Scope) -> Result<Evaluated, NeclError> {
    if let Some(body) = keyword_body(raw, "if") {
        return conditional::evaluate(raw, body, scope);
    }

    if let Some(body) = keyword_body(raw, "for") {
        let elements = projection::evaluate(raw, body, scope)?;
        return Ok((AttributeType::Array, AttributeValue::Array(elements)));
    }

    match classify(raw)? {
        ValueKind::Array => Ok((AttributeType::Array, AttributeValue::Array(parse_array(raw, scope)?))),
        kind => {
            let scalar = build_scalar(raw, kind, scope)?;
            Ok((scalar.kind(), AttributeValue::Scalar(scalar)))
        }
    }
}

/// Build the scalar for a classified fragment. Operator and function kinds are
/// evaluated, so the scalar's own kind is the reported attribute type.
pub(crate) fn build_scalar(raw: &str, kind: ValueKind, scope: &Scope) -> Result<Scalar, NeclError> {
    match kind {
        ValueKind::String => Ok(Scalar::String(strip_quotes(raw).to_string())),
        ValueKind::Array => Err(NeclError::NestedArrayNotAllowed {
            value: raw.to_string(),
            line: 0,
            hint: Some("Array elements must be strings, numbers or booleans".into()),
        }),
        ValueKind::Comparison => Ok(Scalar::Bool(operators::compare(raw, scope)?)),
        ValueKind::Arithmetic => Ok(Scalar::Integer(operators::arithmetic(raw, scope)?)),
        ValueKind::FuncString => functions::string::call(raw, scope),
        ValueKind::FuncMath => Ok(Scalar::Integer(functions::math::call(raw, scope)?)),
        ValueKind::FuncLogic => Ok(Scalar::Bool(functions::logic::call(raw, scope)?)),
        // classified boolean by substring; anything but a literal reads as false
        ValueKind::Boolean => Ok(Scalar::Bool(parse_bool_literal(raw).unwrap_or(false))),
        ValueKind::Number => parse_number(raw),
    }
}

/// Integer when the literal has no `.`/`,`, otherwise single-precision float.
/// A plain digit run that doesn't fit in `i64` is rejected, not widened.
pub(crate) fn parse_number(raw: &str) -> Result<Scalar, NeclError> {
    if !has_decimal_separator(raw) {
        if let Ok(n) = raw.parse::<i64>() {
            return Ok(Scalar::Integer(n));
        }

        let digits = raw.strip_prefix(['-', '+']).unwrap_or(raw);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NeclError::UnclassifiableValue {
                value: raw.to_string(),
                line: 0,
                hint: Some(format!("Integers must lie between {} and {}", i64::MIN, i64::MAX)),
            });
        }
    }

    parse_float_literal(raw)
        .map(Scalar::Float)
        .ok_or_else(|| NeclError::UnclassifiableValue {
            value: raw.to_string(),
            line: 0,
            hint: None,
        })
}

/// Parse a bracketed array literal into its scalar elements.
pub(crate) fn parse_array(raw: &str, scope: &Scope) -> Result<Vec<Scalar>, NeclError> {
    let inner = raw
        .strip_prefix('[')
        .and_then(|r| r.strip_suffix(']'))
        .unwrap_or(raw)
        .trim();

    if inner.is_empty() {
        return Ok(Vec::new());
    }

    let mut parts = split_unquoted(inner, ',');
    // tolerate a single trailing comma
    if parts.len() > 1 && parts.last().is_some_and(|p| p.trim().is_empty()) {
        parts.pop();
    }

    parts
        .into_iter()
        .map(|part| {
            let part = part.trim();
            match classify(part)? {
                ValueKind::Array => Err(NeclError::NestedArrayNotAllowed {
                    value: raw.to_string(),
                    line: 0,
                    hint: Some("Arrays can't contain other arrays".into()),
                }),
                kind => build_scalar(part, kind, scope),
            }
        })
        .collect()
}
