// Author: Dustin Pilgrim
// License: MIT

use std::path::{Path, PathBuf};

use crate::lexer::{self, LineShape};
use crate::NeclError;

/// Expand a leading `~/` to the user's home directory.
pub(super) fn expand_home(path: &Path) -> Result<PathBuf, NeclError> {
    let Some(rest) = path.to_str().and_then(|p| p.strip_prefix("~/")) else {
        return Ok(path.to_path_buf());
    };

    let home = dirs::home_dir().ok_or_else(|| NeclError::FileError {
        message: "Could not determine home directory for ~ expansion".into(),
        path: path.to_string_lossy().to_string(),
        hint: Some("Set HOME or use an absolute path".into()),
    })?;
    Ok(home.join(rest))
}

/// Find the 1-based source line that defines `key` (a dotted path to an
/// attribute or a block), together with its trimmed text. Returns `(0, ..)` when the key can't be found.
///
/// Falls back to the first line whose attribute name matches the last path
/// segment, wherever it sits.
pub(super) fn find_config_line(key: &str, raw_content: &str) -> (usize, String) {
    let key_parts: Vec<&str> = key.split('.').collect();
    let simple_key = key_parts.last().copied().unwrap_or(key);
    let mut scope_stack: Vec<String> = Vec::new();
    let mut fallback: Option<(usize, String)> = None;

    for (idx, line) in raw_content.lines().enumerate() {
        let stripped = lexer::strip_comment(line);

        match lexer::line_shape(stripped) {
            LineShape::Blank => {}
            LineShape::Open { name, closed, .. } => {
                let mut full_path = scope_stack.clone();
                full_path.push(name.to_string());
                if full_path.join(".") == key {
                    return (idx + 1, stripped.trim().to_string());
                }
                if !closed {
                    scope_stack = full_path;
                }
            }
            LineShape::Close => {
                scope_stack.pop();
            }
            LineShape::Content => {
                let Some((line_key, _)) = stripped.split_once('=') else {
                    continue;
                };
                let line_key = line_key.trim();

                let mut full_path = scope_stack.clone();
                full_path.push(line_key.to_string());
                if full_path.join(".") == key {
                    return (idx + 1, stripped.trim().to_string());
                }

                if fallback.is_none() && line_key == simple_key {
                    fallback = Some((idx + 1, stripped.trim().to_string()));
                }
            }
        }
    }

    fallback.unwrap_or_else(|| (0, "<key not found>".into()))
}
