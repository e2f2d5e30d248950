// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

/// The main error type for NECL parsing and evaluation.
///
/// Errors raised while evaluating a single value carry `line: 0`; the document
/// scan stamps the source line onto them with [`NeclError::at_line`].
#[derive(Debug, Clone, PartialEq)]
pub enum NeclError {
    /// The input path does not end in `.necl`.
    InvalidFileExtension {
        path: String,
        hint: Option<String>,
    },
    /// Opening or reading the input failed.
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
    },
    /// The classification cascade found no matching value kind.
    UnclassifiableValue {
        value: String,
        line: usize,
        hint: Option<String>,
    },
    EmptyAttributeName {
        line: usize,
        hint: Option<String>,
    },
    EmptyBlockName {
        line: usize,
        hint: Option<String>,
    },
    /// A `}` without an open block, or a block still open at end of input.
    UnbalancedBraces {
        message: String,
        line: usize,
        hint: Option<String>,
    },
    NestedArrayNotAllowed {
        value: String,
        line: usize,
        hint: Option<String>,
    },
    /// `name { ... }` with content between braces on a single line.
    InlineBlockContent {
        name: String,
        content: String,
        line: usize,
        hint: Option<String>,
    },
    WrongArgumentCount {
        function: String,
        expected: usize,
        found: usize,
        line: usize,
        hint: Option<String>,
    },
    UnknownAttributeReference {
        name: String,
        expression: String,
        line: usize,
        hint: Option<String>,
    },
    /// Comparison/arithmetic/math operand that is not an integer.
    NonIntegerOperand {
        operand: String,
        expression: String,
        line: usize,
        hint: Option<String>,
    },
    /// A function argument resolved to an attribute of the wrong kind.
    ArgumentTypeMismatch {
        function: String,
        argument: String,
        expected: String,
        line: usize,
        hint: Option<String>,
    },
    InvalidFunctionInCondition {
        function: String,
        expression: String,
        line: usize,
        hint: Option<String>,
    },
    InvalidConditionType {
        kind: String,
        expression: String,
        line: usize,
        hint: Option<String>,
    },
    /// Conditional or projection without its `?`/`:` delimiters.
    MissingOutcome {
        expression: String,
        line: usize,
        hint: Option<String>,
    },
    InvalidProjectionSource {
        source: String,
        line: usize,
        hint: Option<String>,
    },
    UnknownComparator {
        expression: String,
        line: usize,
        hint: Option<String>,
    },
    UnknownOperator {
        expression: String,
        line: usize,
        hint: Option<String>,
    },
    UnknownFunction {
        expression: String,
        line: usize,
        hint: Option<String>,
    },
    DivisionByZero {
        expression: String,
        line: usize,
        hint: Option<String>,
    },
    /// Raised by the typed access layer for a dotted path that does not exist.
    PathNotFound {
        path: String,
        hint: Option<String>,
    },
    /// Raised when a value can't be converted to the requested Rust type.
    TypeError {
        message: String,
        line: usize,
        hint: Option<String>,
    },
    ValidationError {
        message: String,
        line: usize,
        hint: Option<String>,
    },
    /// JSON rendering of a document failed.
    ExportError {
        message: String,
        hint: Option<String>,
    },
}

impl NeclError {
    /// Stable numeric code for each error kind.
    pub fn code(&self) -> u32 {
        match self {
            NeclError::InvalidFileExtension { .. } => 100,
            NeclError::FileError { .. } => 101,
            NeclError::UnclassifiableValue { .. } => 200,
            NeclError::EmptyAttributeName { .. } => 201,
            NeclError::EmptyBlockName { .. } => 202,
            NeclError::UnbalancedBraces { .. } => 203,
            NeclError::NestedArrayNotAllowed { .. } => 204,
            NeclError::InlineBlockContent { .. } => 205,
            NeclError::WrongArgumentCount { .. } => 300,
            NeclError::UnknownAttributeReference { .. } => 301,
            NeclError::NonIntegerOperand { .. } => 302,
            NeclError::ArgumentTypeMismatch { .. } => 303,
            NeclError::InvalidFunctionInCondition { .. } => 304,
            NeclError::InvalidConditionType { .. } => 305,
            NeclError::MissingOutcome { .. } => 306,
            NeclError::InvalidProjectionSource { .. } => 307,
            NeclError::UnknownComparator { .. } => 308,
            NeclError::UnknownOperator { .. } => 309,
            NeclError::UnknownFunction { .. } => 310,
            NeclError::DivisionByZero { .. } => 311,
            NeclError::PathNotFound { .. } => 400,
            NeclError::TypeError { .. } => 401,
            NeclError::ValidationError { .. } => 450,
            NeclError::ExportError { .. } => 500,
        }
    }

    /// Source line the error refers to, `0` when unknown.
    pub fn line(&self) -> usize {
        match self {
            NeclError::UnclassifiableValue { line, .. }
            | NeclError::EmptyAttributeName { line, .. }
            | NeclError::EmptyBlockName { line, .. }
            | NeclError::UnbalancedBraces { line, .. }
            | NeclError::NestedArrayNotAllowed { line, .. }
            | NeclError::InlineBlockContent { line, .. }
            | NeclError::WrongArgumentCount { line, .. }
            | NeclError::UnknownAttributeReference { line, .. }
            | NeclError::NonIntegerOperand { line, .. }
            | NeclError::ArgumentTypeMismatch { line, .. }
            | NeclError::InvalidFunctionInCondition { line, .. }
            | NeclError::InvalidConditionType { line, .. }
            | NeclError::MissingOutcome { line, .. }
            | NeclError::InvalidProjectionSource { line, .. }
            | NeclError::UnknownComparator { line, .. }
            | NeclError::UnknownOperator { line, .. }
            | NeclError::UnknownFunction { line, .. }
            | NeclError::DivisionByZero { line, .. }
            | NeclError::TypeError { line, .. }
            | NeclError::ValidationError { line, .. } => *line,
            NeclError::InvalidFileExtension { .. }
            | NeclError::FileError { .. }
            | NeclError::PathNotFound { .. }
            | NeclError::ExportError { .. } => 0,
        }
    }

    /// Stamp a source line onto an error that doesn't have one yet.
    pub fn at_line(mut self, source_line: usize) -> Self {
        match &mut self {
            NeclError::UnclassifiableValue { line, .. }
            | NeclError::EmptyAttributeName { line, .. }
            | NeclError::EmptyBlockName { line, .. }
            | NeclError::UnbalancedBraces { line, .. }
            | NeclError::NestedArrayNotAllowed { line, .. }
            | NeclError::InlineBlockContent { line, .. }
            | NeclError::WrongArgumentCount { line, .. }
            | NeclError::UnknownAttributeReference { line, .. }
            | NeclError::NonIntegerOperand { line, .. }
            | NeclError::ArgumentTypeMismatch { line, .. }
            | NeclError::InvalidFunctionInCondition { line, .. }
            | NeclError::InvalidConditionType { line, .. }
            | NeclError::MissingOutcome { line, .. }
            | NeclError::InvalidProjectionSource { line, .. }
            | NeclError::UnknownComparator { line, .. }
            | NeclError::UnknownOperator { line, .. }
            | NeclError::UnknownFunction { line, .. }
            | NeclError::DivisionByZero { line, .. }
            | NeclError::TypeError { line, .. }
            | NeclError::ValidationError { line, .. } => {
                if *line == 0 {
                    *line = source_line;
                }
            }
            NeclError::InvalidFileExtension { .. }
            | NeclError::FileError { .. }
            | NeclError::PathNotFound { .. }
            | NeclError::ExportError { .. } => {}
        }
        self
    }

    fn hint(&self) -> Option<&str> {
        match self {
            NeclError::InvalidFileExtension { hint, .. }
            | NeclError::FileError { hint, .. }
            | NeclError::UnclassifiableValue { hint, .. }
            | NeclError::EmptyAttributeName { hint, .. }
            | NeclError::EmptyBlockName { hint, .. }
            | NeclError::UnbalancedBraces { hint, .. }
            | NeclError::NestedArrayNotAllowed { hint, .. }
            | NeclError::InlineBlockContent { hint, .. }
            | NeclError::WrongArgumentCount { hint, .. }
            | NeclError::UnknownAttributeReference { hint, .. }
            | NeclError::NonIntegerOperand { hint, .. }
            | NeclError::ArgumentTypeMismatch { hint, .. }
            | NeclError::InvalidFunctionInCondition { hint, .. }
            | NeclError::InvalidConditionType { hint, .. }
            | NeclError::MissingOutcome { hint, .. }
            | NeclError::InvalidProjectionSource { hint, .. }
            | NeclError::UnknownComparator { hint, .. }
            | NeclError::UnknownOperator { hint, .. }
            | NeclError::UnknownFunction { hint, .. }
            | NeclError::DivisionByZero { hint, .. }
            | NeclError::PathNotFound { hint, .. }
            | NeclError::TypeError { hint, .. }
            | NeclError::ValidationError { hint, .. }
            | NeclError::ExportError { hint, .. } => hint.as_deref(),
        }
    }
}

fn location(line: usize) -> String {
    if line > 0 {
        format!(" at line {}", line)
    } else {
        String::new()
    }
}

impl fmt::Display for NeclError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NeclError::InvalidFileExtension { path, .. } =>
                write!(f, "[NECL] Invalid file extension '{}': expected a .necl file", path)?,
            NeclError::FileError { message, path, .. } =>
                write!(f, "[NECL] File Error '{}': {}", path, message)?,
            NeclError::UnclassifiableValue { value, line, .. } =>
                write!(f, "[NECL] Type Error{}: no valid type found for '{}'", location(*line), value)?,
            NeclError::EmptyAttributeName { line, .. } =>
                write!(f, "[NECL] Syntax Error{}: attribute name cannot be empty", location(*line))?,
            NeclError::EmptyBlockName { line, .. } =>
                write!(f, "[NECL] Syntax Error{}: block name cannot be empty", location(*line))?,
            NeclError::UnbalancedBraces { message, line, .. } =>
                write!(f, "[NECL] Syntax Error{}: {}", location(*line), message)?,
            NeclError::NestedArrayNotAllowed { value, line, .. } =>
                write!(f, "[NECL] Type Error{}: nested arrays not allowed in '{}'", location(*line), value)?,
            NeclError::InlineBlockContent { name, content, line, .. } =>
                write!(f, "[NECL] Syntax Error{}: block '{}' has '{}' on its opening line",
                    location(*line), name, content)?,
            NeclError::WrongArgumentCount { function, expected, found, line, .. } =>
                write!(f, "[NECL] Function Error{}: {}() takes {} argument(s), got {}",
                    location(*line), function, expected, found)?,
            NeclError::UnknownAttributeReference { name, expression, line, .. } =>
                write!(f, "[NECL] Reference Error{}: no attribute named '{}' in '{}'",
                    location(*line), name, expression)?,
            NeclError::NonIntegerOperand { operand, expression, line, .. } =>
                write!(f, "[NECL] Type Error{}: operand '{}' in '{}' is not an integer",
                    location(*line), operand, expression)?,
            NeclError::ArgumentTypeMismatch { function, argument, expected, line, .. } =>
                write!(f, "[NECL] Type Error{}: argument '{}' of {}() must be a {}",
                    location(*line), argument, function, expected)?,
            NeclError::InvalidFunctionInCondition { function, expression, line, .. } =>
                write!(f, "[NECL] Condition Error{}: {}() is not allowed in condition '{}'",
                    location(*line), function, expression)?,
            NeclError::InvalidConditionType { kind, expression, line, .. } =>
                write!(f, "[NECL] Condition Error{}: invalid type {} for condition '{}'",
                    location(*line), kind, expression)?,
            NeclError::MissingOutcome { expression, line, .. } =>
                write!(f, "[NECL] Expression Error{}: missing outcome in '{}'", location(*line), expression)?,
            NeclError::InvalidProjectionSource { source, line, .. } =>
                write!(f, "[NECL] Expression Error{}: '{}' is neither an array attribute nor an array literal",
                    location(*line), source)?,
            NeclError::UnknownComparator { expression, line, .. } =>
                write!(f, "[NECL] Expression Error{}: unknown comparator in '{}'", location(*line), expression)?,
            NeclError::UnknownOperator { expression, line, .. } =>
                write!(f, "[NECL] Expression Error{}: unknown operator in '{}'", location(*line), expression)?,
            NeclError::UnknownFunction { expression, line, .. } =>
                write!(f, "[NECL] Function Error{}: unknown function in '{}'", location(*line), expression)?,
            NeclError::DivisionByZero { expression, line, .. } =>
                write!(f, "[NECL] Arithmetic Error{}: division by zero in '{}'", location(*line), expression)?,
            NeclError::PathNotFound { path, .. } =>
                write!(f, "[NECL] Path '{}' not found in configuration", path)?,
            NeclError::TypeError { message, line, .. } =>
                write!(f, "[NECL] Type Error{}: {}", location(*line), message)?,
            NeclError::ValidationError { message, line, .. } =>
                write!(f, "[NECL] Validation Error{}: {}", location(*line), message)?,
            NeclError::ExportError { message, .. } =>
                write!(f, "[NECL] Export Error: {}", message)?,
        }

        if let Some(hint) = self.hint() {
            write!(f, " Hint: {}", hint)?;
        }
        write!(f, " Code: {}", self.code())
    }
}

impl std::error::Error for NeclError {}
