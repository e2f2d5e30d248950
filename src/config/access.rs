// Author: Dustin Pilgrim
// License: MIT

use indexmap::IndexMap;

use super::*;
use crate::ast::{Attribute, AttributeValue, Block};

/// What a dotted path points at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entry<'a> {
    Attribute(&'a Attribute),
    Block(&'a Block),
}

impl NeclConfig {
    /// Get a typed attribute value using dot notation.
    ///
    /// Leading segments name blocks, the last one names an attribute. Both
    /// `snake_case` and `kebab-case` spellings of every segment are tried.
    ///
    /// # Examples
    /// ```no_run
    /// # use necl::NeclConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let config = NeclConfig::from_file("cluster.necl")?;
    /// let image: String = config.get("deployment.container.image")?;
    /// let replicas: u32 = config.get("deployment.replicas")?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// `PathNotFound` when nothing lives at `path`, `TypeError` (with the
    /// source line) when the value can't be converted to `T`.
    pub fn get<T>(&self, path: &str) -> Result<T, NeclError>
    where
        T: TryFrom<AttributeValue, Error = NeclError>,
    {
        let attribute = self.attribute_or_err(path)?;
        T::try_from(attribute.value.clone())
            .map_err(|e| enhance_error_with_line_info(e, path, &self.raw_content))
    }

    /// Like [`get`](Self::get), but a missing path yields `Ok(None)`.
    pub fn get_optional<T>(&self, path: &str) -> Result<Option<T>, NeclError>
    where
        T: TryFrom<AttributeValue, Error = NeclError>,
    {
        match self.get(path) {
            Ok(value) => Ok(Some(value)),
            Err(NeclError::PathNotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    ///
    /// # Examples
    /// ```no_run
    /// # use necl::NeclConfig;
    /// # let config = NeclConfig::from_file("cluster.necl").unwrap();
    /// let port = config.get_or("service.port", 8080u16);
    /// ```
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: TryFrom<AttributeValue, Error = NeclError>,
    {
        self.get(path).unwrap_or(default)
    }

    /// Check if a path names an attribute or a block.
    pub fn has(&self, path: &str) -> bool {
        self.lookup(path).is_some()
    }

    pub fn attribute(&self, path: &str) -> Option<&Attribute> {
        match self.lookup(path)? {
            Entry::Attribute(attribute) => Some(attribute),
            Entry::Block(_) => None,
        }
    }

    pub fn block(&self, path: &str) -> Option<&Block> {
        match self.lookup(path)? {
            Entry::Block(block) => Some(block),
            Entry::Attribute(_) => None,
        }
    }

    /// Attribute names followed by child block names of the block at `path`.
    /// An empty path lists the top level of the document.
    ///
    /// # Examples
    /// ```no_run
    /// # use necl::NeclConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let config = NeclConfig::from_file("cluster.necl")?;
    /// for key in config.get_keys("deployment")? {
    ///     println!("deployment.{}", key);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_keys(&self, path: &str) -> Result<Vec<String>, NeclError> {
        let (attributes, blocks) = if path.trim().is_empty() {
            (&self.document.attributes, &self.document.blocks)
        } else {
            match self.lookup(path) {
                Some(Entry::Block(block)) => (&block.attributes, &block.blocks),
                Some(Entry::Attribute(_)) => {
                    return Err(NeclError::TypeError {
                        message: format!("Path '{}' is an attribute, not a block", path),
                        line: helpers::find_config_line(path, &self.raw_content).0,
                        hint: Some("Only blocks have keys".into()),
                    });
                }
                None => return Err(path_not_found(path)),
            }
        };

        Ok(attributes.keys().chain(blocks.keys()).cloned().collect())
    }

    /// Resolve a dotted path, trying `snake_case` and `kebab-case` variants of
    /// every segment. The exact spelling is tried first.
    pub fn lookup(&self, path: &str) -> Option<Entry<'_>> {
        let segs: Vec<&str> = path.split('.').map(str::trim).collect();
        if segs.iter().any(|s| s.is_empty()) {
            return None;
        }

        fn variants(seg: &str) -> Vec<String> {
            let mut out = vec![seg.to_string()];

            let snake = seg.replace('-', "_");
            if snake != seg {
                out.push(snake);
            }

            let kebab = seg.replace('_', "-");
            if kebab != seg {
                out.push(kebab);
            }
            out
        }

        // DFS over spellings, stop on the first that resolves
        fn dfs<'d>(
            attributes: &'d IndexMap<String, Attribute>,
            blocks: &'d IndexMap<String, Block>,
            segs: &[&str],
        ) -> Option<Entry<'d>> {
            let (first, rest) = segs.split_first()?;

            for name in variants(first) {
                if rest.is_empty() {
                    if let Some(attribute) = attributes.get(&name) {
                        return Some(Entry::Attribute(attribute));
                    }
                    if let Some(block) = blocks.get(&name) {
                        return Some(Entry::Block(block));
                    }
                } else if let Some(block) = blocks.get(&name) {
                    if let Some(found) = dfs(&block.attributes, &block.blocks, rest) {
                        return Some(found);
                    }
                }
            }
            None
        }

        dfs(&self.document.attributes, &self.document.blocks, &segs)
    }

    fn attribute_or_err(&self, path: &str) -> Result<&Attribute, NeclError> {
        match self.lookup(path) {
            Some(Entry::Attribute(attribute)) => Ok(attribute),
            Some(Entry::Block(_)) => Err(NeclError::TypeError {
                message: format!("Path '{}' is a block, not an attribute", path),
                line: helpers::find_config_line(path, &self.raw_content).0,
                hint: Some("Add an attribute name after the block path".into()),
            }),
            None => Err(path_not_found(path)),
        }
    }
}

fn path_not_found(path: &str) -> NeclError {
    NeclError::PathNotFound {
        path: path.to_string(),
        hint: Some("Check that the path exists in your config file".into()),
    }
}

/// Attach the source line of `path` to type and validation errors.
pub(super) fn enhance_error_with_line_info(e: NeclError, path: &str, raw_content: &str) -> NeclError {
    match e {
        NeclError::TypeError { message, line: 0, hint } => {
            let (line, snippet) = helpers::find_config_line(path, raw_content);
            if line > 0 {
                NeclError::TypeError {
                    message: format!("{}\n  → {}", message, snippet),
                    line,
                    hint,
                }
            } else {
                NeclError::TypeError { message, line: 0, hint }
            }
        }
        NeclError::ValidationError { message, line: 0, hint } => {
            let (line, snippet) = helpers::find_config_line(path, raw_content);
            if line > 0 {
                NeclError::ValidationError {
                    message: format!("{}\n  → {}", message, snippet),
                    line,
                    hint,
                }
            } else {
                NeclError::ValidationError { message, line: 0, hint }
            }
        }
        other => other,
    }
}
