// Author: Dustin Pilgrim
// License: MIT

use crate::ast::{Attribute, AttributeType, AttributeValue, Document, Scalar, Scope};
use crate::lexer;
use crate::NeclError;

pub mod classify;
mod conditional;
mod document;
mod projection;
mod value;

pub use classify::{classify, ValueKind};
pub use projection::{INDEX_BINDING, VALUE_BINDING};

/// Line-oriented parser over comment-stripped source lines.
pub struct Parser {
    lines: Vec<String>,
    cursor: usize,
}

impl Parser {
    pub fn new<S: AsRef<str>>(lines: &[S]) -> Self {
        Self {
            lines: lexer::strip_comments(lines),
            cursor: 0,
        }
    }

    pub fn from_source(input: &str) -> Self {
        let lines: Vec<&str> = input.lines().collect();
        Self::new(&lines)
    }

    /// Take the next line and advance.
    pub(crate) fn bump(&mut self) -> Option<String> {
        let line = self.lines.get(self.cursor).cloned()?;
        self.cursor += 1;
        Some(line)
    }

    /// 1-based number of the line most recently taken by `bump`.
    pub(crate) fn line(&self) -> usize {
        self.cursor
    }

    pub fn parse_document(&mut self) -> Result<Document, NeclError> {
        document::parse_document(self)
    }

    /// Evaluate one value in the given scope, as if it appeared on the right
    /// of `=`.
    pub fn evaluate_value(raw: &str, scope: &mut Scope) -> Result<Attribute, NeclError> {
        let (kind, value) = value::evaluate(raw.trim(), scope)?;
        Ok(Attribute {
            name: String::new(),
            kind,
            value,
        })
    }
}

/// Parse a sequence of raw source lines into a document.
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Result<Document, NeclError> {
    Parser::new(lines).parse_document()
}

/// Parse NECL source text into a document.
pub fn parse_str(input: &str) -> Result<Document, NeclError> {
    Parser::from_source(input).parse_document()
}

#[cfg(test)]
mod tests;
