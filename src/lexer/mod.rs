// Author: Dustin Pilgrim
// License: MIT

mod scanner;

pub(crate) use scanner::{find_unquoted, split_unquoted};

/// Structural role of a single, comment-free line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineShape<'a> {
    Blank,
    /// `name {`, or `name { ... }` when the block also closes on the same line.
    /// `body` is the trimmed text between the braces of a closed block.
    Open { name: &'a str, closed: bool, body: &'a str },
    Close,
    Content,
}

/// Remove comments from a single line.
///
/// A line whose trimmed text starts with `//` becomes empty; otherwise the line
/// is cut at the first `//` that is not inside quotes, so URLs in strings survive.
pub fn strip_comment(line: &str) -> &str {
    if line.trim_start().starts_with("//") {
        return "";
    }
    match find_unquoted(line, "//") {
        Some(pos) => line[..pos].trim_end(),
        None => line.trim_end(),
    }
}

/// Strip comments from every line. Line count is preserved so indexes keep
/// mapping to source line numbers.
pub fn strip_comments<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines
        .iter()
        .map(|l| strip_comment(l.as_ref()).to_string())
        .collect()
}

pub fn line_shape(line: &str) -> LineShape<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineShape::Blank;
    }

    if let Some(open) = find_unquoted(trimmed, "{") {
        let rest = &trimmed[open + 1..];
        let close = find_unquoted(rest, "}");
        return LineShape::Open {
            name: trimmed[..open].trim(),
            closed: close.is_some(),
            body: close.map_or("", |c| rest[..c].trim()),
        };
    }

    if find_unquoted(trimmed, "}").is_some() {
        return LineShape::Close;
    }

    LineShape::Content
}

#[cfg(test)]
mod tests;
