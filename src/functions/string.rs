// Author: Dustin Pilgrim
// License: MIT

use super::Call;
use crate::ast::{Scalar, Scope};
use crate::utils::strip_quotes;
use crate::NeclError;

/// Evaluate `upper`, `lower`, `concat`, `contains` or `length`.
///
/// The result kind depends on the function: `contains` yields a boolean,
/// `length` a number, the others a string.
pub fn call(expression: &str, scope: &Scope) -> Result<Scalar, NeclError> {
    let call = Call::parse(expression)?;

    let result = match call.name {
        "upper" => Scalar::String(string_arg(&call, call.unary(), scope)?.to_uppercase()),
        "lower" => Scalar::String(string_arg(&call, call.unary(), scope)?.to_lowercase()),
        "length" => Scalar::Integer(string_arg(&call, call.unary(), scope)?.chars().count() as i64),
        "concat" => {
            let (a, b) = call.binary()?;
            Scalar::String(format!(
                "{} {}",
                string_arg(&call, a, scope)?,
                string_arg(&call, b, scope)?
            ))
        }
        "contains" => {
            let (a, b) = call.binary()?;
            Scalar::Bool(string_arg(&call, a, scope)?.contains(string_arg(&call, b, scope)?))
        }
        _ => return Err(call.unknown()),
    };
    Ok(result)
}

fn string_arg<'s>(call: &Call, arg: &'s str, scope: &'s Scope) -> Result<&'s str, NeclError> {
    match scope.get(arg) {
        Some(attribute) => match attribute.scalar_value() {
            Some(Scalar::String(s)) => Ok(s),
            _ => Err(call.type_mismatch(arg, "string")),
        },
        None => Ok(strip_quotes(arg)),
    }
}
