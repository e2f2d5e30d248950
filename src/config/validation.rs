// Author: Dustin Pilgrim
// License: MIT

use super::*;
use crate::ast::AttributeValue;

impl NeclConfig {
    /// Get a value and check it with `validator`. On failure the error names
    /// the valid values and points at the source line.
    pub fn get_validated<T, F>(&self, path: &str, validator: F, valid_values: &str) -> Result<T, NeclError>
    where
        T: TryFrom<AttributeValue, Error = NeclError>,
        F: FnOnce(&T) -> bool,
    {
        let typed_value: T = self.get(path)?;

        if !validator(&typed_value) {
            let (line, snippet) = helpers::find_config_line(path, &self.raw_content);
            return Err(NeclError::ValidationError {
                message: format!("Invalid value for `{}`\nExpected: {}", path, valid_values),
                line,
                hint: Some(format!("Valid values are: {}\n  → {}", valid_values, snippet)),
            });
        }

        Ok(typed_value)
    }

    /// Get a string value and check it is one of `allowed_values`
    /// (case-insensitive).
    pub fn get_string_enum(&self, path: &str, allowed_values: &[&str]) -> Result<String, NeclError> {
        let value: String = self.get(path)?;
        let lower_value = value.to_lowercase();

        if !allowed_values.iter().any(|v| v.to_lowercase() == lower_value) {
            let (line, snippet) = helpers::find_config_line(path, &self.raw_content);
            return Err(NeclError::ValidationError {
                message: format!("Invalid value '{}' for `{}`", value, path),
                line,
                hint: Some(format!("Expected one of: {}\n  → {}", allowed_values.join(", "), snippet)),
            });
        }

        Ok(value)
    }
}
