// Author: Dustin Pilgrim
// License: MIT

use super::Call;
use crate::ast::{Scalar, Scope};
use crate::utils::parse_float_literal;
use crate::NeclError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathFunction {
    Power,
    Floor,
    Remainder,
}

impl MathFunction {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "power" => Some(MathFunction::Power),
            "floor" => Some(MathFunction::Floor),
            "remainder" => Some(MathFunction::Remainder),
            _ => None,
        }
    }
}

/// Evaluate `power(a, b)`, `floor(a, b)` or `remainder(a, b)` over integers.
pub fn call(expression: &str, scope: &Scope) -> Result<i64, NeclError> {
    let call = Call::parse(expression)?;
    let function = MathFunction::from_name(call.name).ok_or_else(|| call.unknown())?;

    let (a, b) = call.binary()?;
    let a = integer_arg(&call, a, scope)?;
    let b = integer_arg(&call, b, scope)?;

    match function {
        MathFunction::Power => Ok((a as f64).powf(b as f64) as i64),
        MathFunction::Floor => {
            non_zero(&call, b)?;
            Ok((a as f64 / b as f64).floor() as i64)
        }
        MathFunction::Remainder => {
            non_zero(&call, b)?;
            Ok(a.wrapping_rem(b))
        }
    }
}

fn non_zero(call: &Call, divisor: i64) -> Result<(), NeclError> {
    if divisor == 0 {
        return Err(NeclError::DivisionByZero {
            expression: call.expression.to_string(),
            line: 0,
            hint: None,
        });
    }
    Ok(())
}

fn integer_arg(call: &Call, arg: &str, scope: &Scope) -> Result<i64, NeclError> {
    if let Some(attribute) = scope.get(arg) {
        return match attribute.scalar_value() {
            Some(Scalar::Integer(n)) => Ok(*n),
            _ => Err(call.type_mismatch(arg, "integer")),
        };
    }

    if let Ok(n) = arg.parse::<i64>() {
        return Ok(n);
    }

    if parse_float_literal(arg).is_some() {
        return Err(NeclError::NonIntegerOperand {
            operand: arg.to_string(),
            expression: call.expression.to_string(),
            line: 0,
            hint: Some("Math functions only take integers".into()),
        });
    }

    Err(call.unknown_reference(arg))
}
