// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// Type tag reported for an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    String,
    Number,
    Boolean,
    Array,
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AttributeType::String => "string",
            AttributeType::Number => "number",
            AttributeType::Boolean => "boolean",
            AttributeType::Array => "array",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    String(String),
    Integer(i64),
    Float(f32),
    Bool(bool),
    /// Raw text of a conditional outcome that is stored without being evaluated
    /// (comparison, `contains(...)` and logic-function outcomes).
    Expression(String),
}

impl Scalar {
    /// Reported type of the scalar. Unevaluated expressions are always
    /// boolean-valued forms, so they report `Boolean`.
    pub fn kind(&self) -> AttributeType {
        match self {
            Scalar::String(_) => AttributeType::String,
            Scalar::Integer(_) | Scalar::Float(_) => AttributeType::Number,
            Scalar::Bool(_) | Scalar::Expression(_) => AttributeType::Boolean,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Scalar::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Scalar::Integer(n) => Some(*n as f64),
            Scalar::Float(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl Scalar {
    /// Render as NECL source text that parses back to the same scalar.
    ///
    /// Strings are quoted with `"` unless they contain one, floats always
    /// carry a decimal point, expressions are written raw.
    pub fn to_necl(&self) -> String {
        match self {
            Scalar::String(s) if s.contains('"') => format!("'{}'", s),
            Scalar::String(s) => format!("\"{}\"", s),
            Scalar::Float(f) => {
                let text = f.to_string();
                if text.contains('.') { text } else { format!("{}.0", text) }
            }
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::String(s) | Scalar::Expression(s) => f.write_str(s),
            Scalar::Integer(n) => write!(f, "{}", n),
            Scalar::Float(n) => write!(f, "{}", n),
            Scalar::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// Payload of an attribute: a single scalar, or an array of scalars.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Scalar(Scalar),
    Array(Vec<Scalar>),
}

impl AttributeValue {
    /// Render as the right-hand side of a NECL attribute line.
    pub fn to_necl(&self) -> String {
        match self {
            AttributeValue::Scalar(s) => s.to_necl(),
            AttributeValue::Array(items) => {
                let parts: Vec<String> = items.iter().map(Scalar::to_necl).collect();
                format!("[{}]", parts.join(", "))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AttributeType,
    pub value: AttributeValue,
}

impl Attribute {
    pub fn scalar(name: impl Into<String>, kind: AttributeType, value: Scalar) -> Self {
        Self {
            name: name.into(),
            kind,
            value: AttributeValue::Scalar(value),
        }
    }

    pub fn array(name: impl Into<String>, elements: Vec<Scalar>) -> Self {
        Self {
            name: name.into(),
            kind: AttributeType::Array,
            value: AttributeValue::Array(elements),
        }
    }

    /// The scalar value, `None` for array attributes.
    pub fn scalar_value(&self) -> Option<&Scalar> {
        match &self.value {
            AttributeValue::Scalar(s) => Some(s),
            AttributeValue::Array(_) => None,
        }
    }

    /// The array elements, `None` for scalar attributes.
    pub fn array_value(&self) -> Option<&[Scalar]> {
        match &self.value {
            AttributeValue::Array(elements) => Some(elements),
            AttributeValue::Scalar(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Block {
    pub name: String,
    pub attributes: IndexMap<String, Attribute>,
    pub blocks: IndexMap<String, Block>,
}

impl Block {
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    pub fn block(&self, name: &str) -> Option<&Block> {
        self.blocks.get(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    pub attributes: IndexMap<String, Attribute>, // top-level, outside any block
    pub blocks: IndexMap<String, Block>,
}

impl Document {
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    pub fn block(&self, name: &str) -> Option<&Block> {
        self.blocks.get(name)
    }
}

/// Attribute mapping of the block (or document) currently being scanned.
///
/// Expressions resolve names against it, and projection expressions write
/// their `index`/`value` bindings into it. Those bindings are not removed
/// when the loop ends.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scope {
    attributes: IndexMap<String, Attribute>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// Insert or overwrite an attribute under its own name.
    pub fn insert(&mut self, attribute: Attribute) {
        self.attributes.insert(attribute.name.clone(), attribute);
    }

    pub fn into_attributes(self) -> IndexMap<String, Attribute> {
        self.attributes
    }
}
