// Author: Dustin Pilgrim
// License: MIT

use crate::ast::{AttributeValue, Scalar};
use crate::NeclError;

fn describe(value: &AttributeValue) -> String {
    match value {
        AttributeValue::Scalar(s) => format!("{} '{}'", s.kind(), s),
        AttributeValue::Array(items) => format!("array of {} element(s)", items.len()),
    }
}

fn expected(kind: &str, value: &AttributeValue, hint: &str) -> NeclError {
    NeclError::TypeError {
        message: format!("Expected {}, got {}", kind, describe(value)),
        line: 0,
        hint: Some(hint.into()),
    }
}

fn scalar(value: &AttributeValue) -> Option<&Scalar> {
    match value {
        AttributeValue::Scalar(s) => Some(s),
        AttributeValue::Array(_) => None,
    }
}

fn integer(value: &AttributeValue) -> Result<i64, NeclError> {
    scalar(value)
        .and_then(Scalar::as_integer)
        .ok_or_else(|| expected("integer", value, "Use a whole number in your config"))
}

fn out_of_range(n: i64, target: &str) -> NeclError {
    NeclError::TypeError {
        message: format!("Number {} out of range for {}", n, target),
        line: 0,
        hint: Some(format!("Use a number that fits in {}", target)),
    }
}

impl TryFrom<AttributeValue> for String {
    type Error = NeclError;

    fn try_from(value: AttributeValue) -> Result<Self, Self::Error> {
        scalar(&value)
            .and_then(Scalar::as_str)
            .map(str::to_string)
            .ok_or_else(|| expected("string", &value, "Use a quoted string value in your config"))
    }
}

impl TryFrom<AttributeValue> for bool {
    type Error = NeclError;

    fn try_from(value: AttributeValue) -> Result<Self, Self::Error> {
        if let Some(b) = scalar(&value).and_then(Scalar::as_bool) {
            return Ok(b);
        }
        match value {
            AttributeValue::Scalar(Scalar::Expression(ref raw)) => Err(NeclError::TypeError {
                message: format!("'{}' is an unevaluated conditional outcome", raw),
                line: 0,
                hint: Some("Conditional outcomes that are comparisons or function calls are stored as text".into()),
            }),
            _ => Err(expected("boolean", &value, "Use true or false in your config")),
        }
    }
}

impl TryFrom<AttributeValue> for i64 {
    type Error = NeclError;

    fn try_from(value: AttributeValue) -> Result<Self, Self::Error> {
        integer(&value)
    }
}

impl TryFrom<AttributeValue> for i32 {
    type Error = NeclError;

    fn try_from(value: AttributeValue) -> Result<Self, Self::Error> {
        let n = integer(&value)?;
        i32::try_from(n).map_err(|_| out_of_range(n, "i32"))
    }
}

impl TryFrom<AttributeValue> for u16 {
    type Error = NeclError;

    fn try_from(value: AttributeValue) -> Result<Self, Self::Error> {
        let n = integer(&value)?;
        u16::try_from(n).map_err(|_| out_of_range(n, "u16"))
    }
}

impl TryFrom<AttributeValue> for u32 {
    type Error = NeclError;

    fn try_from(value: AttributeValue) -> Result<Self, Self::Error> {
        let n = integer(&value)?;
        u32::try_from(n).map_err(|_| out_of_range(n, "u32"))
    }
}

impl TryFrom<AttributeValue> for u64 {
    type Error = NeclError;

    fn try_from(value: AttributeValue) -> Result<Self, Self::Error> {
        let n = integer(&value)?;
        u64::try_from(n).map_err(|_| out_of_range(n, "u64"))
    }
}

impl TryFrom<AttributeValue> for f64 {
    type Error = NeclError;

    fn try_from(value: AttributeValue) -> Result<Self, Self::Error> {
        scalar(&value)
            .and_then(Scalar::as_float)
            .ok_or_else(|| expected("number", &value, "Use a number value in your config"))
    }
}

impl TryFrom<AttributeValue> for f32 {
    type Error = NeclError;

    fn try_from(value: AttributeValue) -> Result<Self, Self::Error> {
        match value {
            AttributeValue::Scalar(Scalar::Float(f)) => Ok(f),
            AttributeValue::Scalar(Scalar::Integer(n)) => Ok(n as f32),
            _ => Err(expected("number", &value, "Use a number value in your config")),
        }
    }
}

impl<T> TryFrom<AttributeValue> for Vec<T>
where
    T: TryFrom<AttributeValue, Error = NeclError>,
{
    type Error = NeclError;

    fn try_from(value: AttributeValue) -> Result<Self, Self::Error> {
        match value {
            AttributeValue::Array(items) => items
                .into_iter()
                .map(|item| T::try_from(AttributeValue::Scalar(item)))
                .collect(),
            _ => Err(expected("array", &value, "Use an array [...] in your config")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> AttributeValue {
        AttributeValue::Scalar(Scalar::Integer(n))
    }

    #[test]
    fn test_integer_ranges() {
        assert_eq!(u16::try_from(int(8080)).unwrap(), 8080);
        assert!(u16::try_from(int(70_000)).is_err());
        assert!(u32::try_from(int(-1)).is_err());
        assert_eq!(i32::try_from(int(-5)).unwrap(), -5);
    }

    #[test]
    fn test_float_is_not_an_integer() {
        let value = AttributeValue::Scalar(Scalar::Float(1.5));
        assert!(matches!(i64::try_from(value.clone()), Err(NeclError::TypeError { .. })));
        assert_eq!(f64::try_from(value).unwrap(), 1.5);
        assert_eq!(f32::try_from(int(3)).unwrap(), 3.0);
    }

    #[test]
    fn test_vec_conversion_is_elementwise() {
        let value = AttributeValue::Array(vec![Scalar::String("a".into()), Scalar::String("b".into())]);
        let out: Vec<String> = value.try_into().unwrap();
        assert_eq!(out, vec!["a", "b"]);

        let mixed = AttributeValue::Array(vec![Scalar::String("a".into()), Scalar::Integer(1)]);
        assert!(Vec::<String>::try_from(mixed).is_err());
    }

    #[test]
    fn test_expression_is_not_a_bool() {
        let value = AttributeValue::Scalar(Scalar::Expression("1==1".into()));
        assert!(bool::try_from(value).is_err());
    }
}
