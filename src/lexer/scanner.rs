// Author: Dustin Pilgrim
// License: MIT

/// Tracks whether the scan position is inside a quoted literal.
#[derive(Default)]
struct QuoteState {
    open: Option<char>,
}

impl QuoteState {
    /// Feed one character, returns true when the character is outside quotes
    /// and is not itself a quote delimiter.
    fn step(&mut self, c: char) -> bool {
        match self.open {
            Some(q) if c == q => {
                self.open = None;
                false
            }
            Some(_) => false,
            None if c == '"' || c == '\'' => {
                self.open = Some(c);
                false
            }
            None => true,
        }
    }
}

/// Byte offset of the first `needle` occurring outside quoted text.
pub(crate) fn find_unquoted(line: &str, needle: &str) -> Option<usize> {
    let mut quotes = QuoteState::default();
    for (i, c) in line.char_indices() {
        if quotes.step(c) && line[i..].starts_with(needle) {
            return Some(i);
        }
    }
    None
}

/// Split on `sep` where it occurs outside quotes and outside `[]`/`()` pairs.
pub(crate) fn split_unquoted(text: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut quotes = QuoteState::default();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in text.char_indices() {
        if !quotes.step(c) {
            continue;
        }
        match c {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            _ if c == sep && depth == 0 => {
                parts.push(&text[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}
