//! Submission seam
//!
//! The site has no backend yet; the frontend plugs in a submitter that
//! waits out a configured latency and acknowledges.

use async_trait::async_trait;
use serde::Serialize;

use super::draft::Draft;
use super::error::SubmissionError;

/// Validated payload handed to a submitter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    pub form: &'static str,
    pub fields: Draft,
}

impl Submission {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Acknowledgement of a delivered submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub form: &'static str,
    pub reference: String,
}

/// Delivers submissions somewhere
///
/// Not `Send`: browser timers live on the UI thread.
#[async_trait(?Send)]
pub trait Submitter {
    async fn submit(&self, submission: Submission) -> Result<Receipt, SubmissionError>;
}
