use std::fmt;

use thiserror::Error;

use crate::llm_client::LlmError;

/// Failures surfaced by the generation pipeline. All are terminal for the
/// request; nothing is persisted when one occurs.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("LLM provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("LLM returned an empty completion")]
    EmptyCompletion,

    #[error("LLM response is not a JSON object: {0}")]
    MalformedResponse(String),

    #[error("LLM response violates the portfolio schema: {}", summarize(.0))]
    SchemaViolation(Vec<SchemaIssue>),
}

impl GenerationError {
    /// Stable machine-readable code for API responses.
    pub fn code(&self) -> &'static str {
        match self {
            GenerationError::ProviderUnavailable(_) => "LLM_UNAVAILABLE",
            GenerationError::EmptyCompletion => "LLM_EMPTY_COMPLETION",
            GenerationError::MalformedResponse(_) => "LLM_MALFORMED_RESPONSE",
            GenerationError::SchemaViolation(_) => "LLM_SCHEMA_VIOLATION",
        }
    }
}

impl From<LlmError> for GenerationError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::EmptyContent => GenerationError::EmptyCompletion,
            LlmError::Http(_) | LlmError::Api { .. } => {
                GenerationError::ProviderUnavailable(err.to_string())
            }
        }
    }
}

/// One problem found while checking the model's JSON against the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaIssue {
    /// JSON path of the offending field, e.g. `projects[2].technologies`.
    pub path: String,
    pub kind: IssueKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    Missing,
    WrongType {
        expected: &'static str,
        found: &'static str,
    },
    ThemeMismatch {
        expected: String,
        found: String,
    },
    Invalid(String),
}

impl fmt::Display for SchemaIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            IssueKind::Missing => write!(f, "{} is missing", self.path),
            IssueKind::WrongType { expected, found } => {
                write!(f, "{} should be {expected}, found {found}", self.path)
            }
            IssueKind::ThemeMismatch { expected, found } => {
                write!(f, "{} must be '{expected}', found '{found}'", self.path)
            }
            IssueKind::Invalid(reason) => write!(f, "{}: {reason}", self.path),
        }
    }
}

fn summarize(issues: &[SchemaIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
