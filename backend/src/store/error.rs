//! Error types for document loading.
//!
//! Derivation never fails; only reading and parsing the document can. Every
//! error carries an [`ErrorContext`] describing where it happened.

use std::fmt;

/// Result type for load operations
pub type LoadResult<T> = Result<T, LoadError>;

/// Structured context for load errors.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The operation being performed (e.g., "load", "refresh")
    pub operation: Option<String>,
    /// The source involved (a file path or "bundled")
    pub source: Option<String>,
    /// Additional details about the error
    pub details: Option<String>,
    /// Whether retrying the same source could succeed
    pub retryable: bool,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Default::default()
        }
    }

    pub fn with_source(mut self, source: impl ToString) -> Self {
        self.source = Some(source.to_string());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn retryable(mut self) -> Self {
        self.retryable = true;
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(ref op) = self.operation {
            parts.push(format!("operation={}", op));
        }
        if let Some(ref source) = self.source {
            parts.push(format!("source={}", source));
        }
        if let Some(ref details) = self.details {
            parts.push(format!("details={}", details));
        }
        if self.retryable {
            parts.push("retryable=true".to_string());
        }
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Error type for document loading
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The document does not exist at the configured location.
    #[error("Not found: {message} {context}")]
    NotFound {
        message: String,
        context: ErrorContext,
    },

    /// Reading the document failed.
    #[error("I/O error: {message} {context}")]
    Io {
        message: String,
        context: ErrorContext,
    },

    /// The document is not valid JSON or lacks required fields.
    #[error("Malformed document: {message} {context}")]
    Malformed {
        message: String,
        context: ErrorContext,
    },

    /// Configuration file missing or invalid.
    #[error("Configuration error: {message} {context}")]
    Configuration {
        message: String,
        context: ErrorContext,
    },
}

impl LoadError {
    pub fn not_found(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::NotFound {
            message: message.into(),
            context,
        }
    }

    pub fn io(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::Io {
            message: message.into(),
            context: context.retryable(),
        }
    }

    pub fn malformed(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::Malformed {
            message: message.into(),
            context,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            context: ErrorContext::new("configure"),
        }
    }

    /// Map an I/O error, distinguishing a missing file.
    pub fn from_io(err: std::io::Error, context: ErrorContext) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::not_found(err.to_string(), context)
        } else {
            Self::io(err.to_string(), context)
        }
    }

    pub fn context(&self) -> &ErrorContext {
        match self {
            Self::NotFound { context, .. }
            | Self::Io { context, .. }
            | Self::Malformed { context, .. }
            | Self::Configuration { context, .. } => context,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::NotFound { message, .. }
            | Self::Io { message, .. }
            | Self::Malformed { message, .. }
            | Self::Configuration { message, .. } => message,
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.context().retryable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_display() {
        let ctx = ErrorContext::new("load")
            .with_source("/data/doc.json")
            .with_details("line 3");
        assert_eq!(
            ctx.to_string(),
            "[operation=load, source=/data/doc.json, details=line 3]"
        );
    }

    #[test]
    fn test_from_io_not_found() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let load = LoadError::from_io(err, ErrorContext::new("load"));
        assert!(matches!(load, LoadError::NotFound { .. }));
        assert!(!load.is_retryable());
    }

    #[test]
    fn test_io_is_retryable() {
        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let load = LoadError::from_io(err, ErrorContext::new("load"));
        assert!(matches!(load, LoadError::Io { .. }));
        assert!(load.is_retryable());
        assert_eq!(load.message(), "denied");
    }

    #[test]
    fn test_error_display_includes_context() {
        let err = LoadError::malformed("expected value", ErrorContext::new("parse"));
        let text = err.to_string();
        assert!(text.starts_with("Malformed document: expected value"));
        assert!(text.contains("operation=parse"));
    }
}
