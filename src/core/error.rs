use thiserror::Error;

/// Errors that can occur while editing, rendering, or storing a document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FactuurError {
    /// One or more validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),

    /// An edit referenced a line item id that is not in the document.
    #[error("unknown line item: {0}")]
    UnknownLineItem(String),

    /// Document number sequencing error.
    #[error("numbering error: {0}")]
    Numbering(String),

    /// PDF or layout rendering error.
    #[error("render error: {0}")]
    Render(String),

    /// Draft persistence error.
    #[error("store error: {0}")]
    Store(String),
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "lines[0].quantity").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
