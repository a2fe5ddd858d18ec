use thiserror::Error;

/// Classifies rule source errors for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    /// Required path not configured
    NotConfigured,
    /// File open/read failure
    FileError,
    /// Data is not valid UTF-8 text
    InvalidData,
}

/// TLD Engine error types
///
/// Hostname classification never fails; only loading a dataset from a
/// [`RuleSource`](crate::source::RuleSource) can.
#[derive(Error, Debug)]
pub enum TldError {
    #[error("Rule source error: {message}")]
    SourceError {
        kind: SourceErrorKind,
        message: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl TldError {
    /// Shorthand for a [`TldError::SourceError`].
    pub fn source_error(kind: SourceErrorKind, message: impl Into<String>) -> Self {
        TldError::SourceError {
            kind,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_error_kind_is_matchable() {
        let err = TldError::source_error(SourceErrorKind::NotConfigured, "no path");
        match &err {
            TldError::SourceError { kind, .. } => {
                assert!(matches!(kind, SourceErrorKind::NotConfigured));
            }
            _ => panic!("expected SourceError"),
        }
    }

    #[test]
    fn test_source_error_display_includes_message() {
        let err = TldError::source_error(SourceErrorKind::FileError, "Failed to open list.dat");
        let display = format!("{}", err);
        assert!(display.contains("Failed to open list.dat"), "got: {}", display);
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: TldError = io.into();
        assert!(matches!(err, TldError::IoError(_)));
        assert!(format!("{}", err).contains("missing"));
    }
}
