// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::ast::Document;
use crate::parser;
use crate::NeclError;

mod access;
mod conversion;
mod helpers;
mod validation;

pub use access::Entry;

/// Extension every NECL file must carry.
pub const FILE_EXTENSION: &str = "necl";

/// A parsed NECL document together with the source it came from.
///
/// The raw text is kept so typed-access errors can point at the offending line.
pub struct NeclConfig {
    document: Document,
    raw_content: String,
}

impl NeclConfig {
    /// Load and parse a `.necl` file.
    ///
    /// The extension is checked before the file is touched. A leading `~/`
    /// is expanded to the home directory.
    ///
    /// # Example
    /// ```ignore
    /// let config = NeclConfig::from_file("cluster.necl")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, NeclError> {
        let path_ref = path.as_ref();
        let display = path_ref.to_string_lossy().to_string();

        if path_ref.extension().and_then(|e| e.to_str()) != Some(FILE_EXTENSION) {
            return Err(NeclError::InvalidFileExtension {
                path: display,
                hint: Some(format!("Rename the file to end in .{}", FILE_EXTENSION)),
            });
        }

        let resolved = helpers::expand_home(path_ref)?;
        debug!(path = %resolved.display(), "reading config file");

        let content = fs::read_to_string(&resolved).map_err(|e| NeclError::FileError {
            message: format!("Failed to read file: {}", e),
            path: display.clone(),
            hint: Some("Check that the file exists and is readable".into()),
        })?;

        let config = Self::from_str(&content)?;
        info!(
            path = %resolved.display(),
            attributes = config.document.attributes.len(),
            blocks = config.document.blocks.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// Parse NECL text directly (no file I/O).
    pub fn from_str(content: &str) -> Result<Self, NeclError> {
        let document = parser::parse_str(content)?;
        Ok(Self {
            document,
            raw_content: content.to_string(),
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn raw_content(&self) -> &str {
        &self.raw_content
    }
}
