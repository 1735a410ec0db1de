//! Form errors

use thiserror::Error;

/// Required fields left empty, in declaration order
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Missing required fields: {}", .missing.join(", "))]
pub struct ValidationError {
    pub missing: Vec<&'static str>,
}

impl ValidationError {
    pub fn is_missing(&self, field: &str) -> bool {
        self.missing.iter().any(|m| *m == field)
    }
}

/// Reported by a submitter that could not deliver the payload
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Submission failed: {reason}")]
pub struct SubmissionError {
    pub reason: String,
}

impl SubmissionError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("A submission is already in progress")]
    AlreadyPending,

    #[error("No submission is in progress")]
    NotPending,

    #[error(transparent)]
    Failed(#[from] SubmissionError),
}
