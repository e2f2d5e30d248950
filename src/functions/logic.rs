// Author: Dustin Pilgrim
// License: MIT

use super::Call;
use crate::ast::{Scalar, Scope};
use crate::utils::parse_bool_literal;
use crate::NeclError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicFunction {
    And,
    Or,
    Nand,
    Nor,
    Xor,
    Xnor,
}

impl LogicFunction {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "and" => Some(LogicFunction::And),
            "or" => Some(LogicFunction::Or),
            "nand" => Some(LogicFunction::Nand),
            "nor" => Some(LogicFunction::Nor),
            "xor" => Some(LogicFunction::Xor),
            "xnor" => Some(LogicFunction::Xnor),
            _ => None,
        }
    }

    /// Truth tables as the language defines them: `and` and `xnor` both test
    /// equality, `nand` and `xor` both test inequality. Only `or` and `nor`
    /// follow the textbook definitions.
    pub fn apply(self, a: bool, b: bool) -> bool {
        match self {
            LogicFunction::And => a == b,
            LogicFunction::Or => a || b,
            LogicFunction::Nand => a != b,
            LogicFunction::Nor => !(a || b),
            LogicFunction::Xor => a != b,
            LogicFunction::Xnor => a == b,
        }
    }
}

/// Evaluate one of `and`, `or`, `nand`, `nor`, `xor`, `xnor`.
pub fn call(expression: &str, scope: &Scope) -> Result<bool, NeclError> {
    let call = Call::parse(expression)?;
    let function = LogicFunction::from_name(call.name).ok_or_else(|| call.unknown())?;

    let (a, b) = call.binary()?;
    let a = bool_arg(&call, a, scope)?;
    let b = bool_arg(&call, b, scope)?;

    Ok(function.apply(a, b))
}

fn bool_arg(call: &Call, arg: &str, scope: &Scope) -> Result<bool, NeclError> {
    if let Some(attribute) = scope.get(arg) {
        return match attribute.scalar_value() {
            Some(Scalar::Bool(b)) => Ok(*b),
            _ => Err(call.type_mismatch(arg, "boolean")),
        };
    }

    parse_bool_literal(arg).ok_or_else(|| call.unknown_reference(arg))
}
