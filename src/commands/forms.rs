//! Form submission
//!
//! There is no backend; submissions are acknowledged after a fixed delay.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use kakondo_core::form::{Receipt, Submission, SubmissionError, Submitter};

static NEXT_REFERENCE: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy)]
pub struct TimerSubmitter {
    latency_ms: u32,
}

impl TimerSubmitter {
    pub fn new(latency_ms: u32) -> Self {
        Self { latency_ms }
    }
}

#[async_trait(?Send)]
impl Submitter for TimerSubmitter {
    async fn submit(&self, submission: Submission) -> Result<Receipt, SubmissionError> {
        if let Ok(json) = submission.to_json() {
            log::debug!("Submitting {}", json);
        }
        TimeoutFuture::new(self.latency_ms).await;
        let reference = NEXT_REFERENCE.fetch_add(1, Ordering::Relaxed);
        Ok(Receipt {
            form: submission.form,
            reference: format!("{}-{:04}", submission.form, reference),
        })
    }
}
