//! Rule sources.
//!
//! A [`RuleSource`] hands the raw public suffix dataset to the parser. Fetching
//! and refreshing the list is left to the caller; the sources here only read
//! text that is already available.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Result, SourceErrorKind, TldError};

/// Trait for supplying public suffix dataset text
pub trait RuleSource: Send + Sync {
    /// Return the full dataset text
    fn load_rules(&self) -> Result<String>;
}

/// In-memory dataset
#[derive(Debug, Clone, Default)]
pub struct MemoryRuleSource {
    text: String,
}

impl MemoryRuleSource {
    /// Create a source holding `text`
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl RuleSource for MemoryRuleSource {
    fn load_rules(&self) -> Result<String> {
        Ok(self.text.clone())
    }
}

/// Source with no rules. Every host resolves through the implicit `*` rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct NilRuleSource;

impl RuleSource for NilRuleSource {
    fn load_rules(&self) -> Result<String> {
        Ok(String::new())
    }
}

/// Dataset read from a local file, e.g. a copy of `public_suffix_list.dat`
#[derive(Debug, Clone, Default)]
pub struct FileRuleSource {
    path: Option<PathBuf>,
}

impl FileRuleSource {
    /// Create a source reading from `path`
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: Some(path.as_ref().to_path_buf()),
        }
    }

    /// Configured path, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl RuleSource for FileRuleSource {
    fn load_rules(&self) -> Result<String> {
        let path = self.path.as_ref().ok_or_else(|| {
            TldError::source_error(SourceErrorKind::NotConfigured, "rule file path not configured")
        })?;

        tracing::debug!(path = %path.display(), "loading public suffix rules");

        let text = fs::read_to_string(path).map_err(|e| {
            let kind = if e.kind() == ErrorKind::InvalidData {
                SourceErrorKind::InvalidData
            } else {
                SourceErrorKind::FileError
            };
            tracing::warn!(path = %path.display(), error = %e, "failed to read public suffix rules");
            TldError::source_error(
                kind,
                format!("Failed to read rules file '{}': {}", path.display(), e),
            )
        })?;

        tracing::debug!(path = %path.display(), bytes = text.len(), "loaded public suffix rules");
        Ok(text)
    }
}
