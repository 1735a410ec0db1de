//! Form State Controller
//!
//! Owns one form's draft and submission state:
//!
//! Idle -> (validate) -> Idle with hints, or Pending
//! Pending -> Submitted (draft reset) | Failed (draft kept)
//! Submitted | Failed -> Idle on dismiss or notice expiry
//!
//! At most one submission is in flight. A second submit while Pending is
//! rejected and never reaches the submitter.

use super::draft::Draft;
use super::error::{SubmissionError, SubmitError, ValidationError};
use super::reducer::{reduce, FormAction};
use super::schema::FormSchema;
use super::submitter::{Receipt, Submission, Submitter};
use super::validate::validate;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Pending,
    Submitted(Receipt),
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormController {
    draft: Draft,
    state: SubmitState,
    hints: Option<ValidationError>,
    /// Bumped on every completion so stale notice timers can be ignored
    completions: u64,
}

impl FormController {
    pub fn new(schema: &'static FormSchema) -> Self {
        Self {
            draft: Draft::new(schema),
            state: SubmitState::Idle,
            hints: None,
            completions: 0,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == SubmitState::Pending
    }

    /// Missing fields from the last rejected submit
    pub fn hints(&self) -> Option<&ValidationError> {
        self.hints.as_ref()
    }

    pub fn is_flagged(&self, field: &str) -> bool {
        self.hints.as_ref().is_some_and(|h| h.is_missing(field))
    }

    pub fn completions(&self) -> u64 {
        self.completions
    }

    pub fn dispatch(&mut self, action: FormAction) {
        self.draft = reduce(&self.draft, action);
    }

    /// Validate and move to Pending, returning the payload to deliver
    pub fn begin_submit(&mut self) -> Result<Submission, SubmitError> {
        if self.is_pending() {
            log::warn!("[{}] Submit ignored, already pending", self.schema().id);
            return Err(SubmitError::AlreadyPending);
        }
        if let Err(err) = validate(&self.draft) {
            log::info!("[{}] {}", self.schema().id, err);
            self.hints = Some(err.clone());
            self.state = SubmitState::Idle;
            return Err(err.into());
        }
        self.hints = None;
        self.state = SubmitState::Pending;
        Ok(Submission {
            form: self.schema().id,
            fields: self.draft.clone(),
        })
    }

    /// Record the submitter's outcome
    ///
    /// Only a Pending controller accepts an outcome; anything else is
    /// rejected and leaves draft and state untouched.
    pub fn complete(&mut self, outcome: Result<Receipt, SubmissionError>) -> Result<Receipt, SubmitError> {
        if !self.is_pending() {
            log::warn!("[{}] Outcome ignored, nothing pending", self.schema().id);
            return Err(SubmitError::NotPending);
        }
        self.completions += 1;
        match outcome {
            Ok(receipt) => {
                log::info!("[{}] Submitted, reference {}", self.schema().id, receipt.reference);
                self.draft = Draft::new(self.schema());
                self.state = SubmitState::Submitted(receipt.clone());
                Ok(receipt)
            }
            Err(err) => {
                log::error!("[{}] {}", self.schema().id, err);
                self.state = SubmitState::Failed { reason: err.reason.clone() };
                Err(err.into())
            }
        }
    }

    /// Clear a success or failure notice
    pub fn dismiss(&mut self) {
        if matches!(self.state, SubmitState::Submitted(_) | SubmitState::Failed { .. }) {
            self.state = SubmitState::Idle;
        }
    }

    /// Clear the notice only if no submission completed since `completions`
    pub fn expire_notice(&mut self, completions: u64) {
        if self.completions == completions {
            self.dismiss();
        }
    }

    /// Full submit cycle for callers that can hold the controller across
    /// the await
    pub async fn submit<S>(&mut self, submitter: &S) -> Result<Receipt, SubmitError>
    where
        S: Submitter + ?Sized,
    {
        let submission = self.begin_submit()?;
        let outcome = submitter.submit(submission).await;
        self.complete(outcome)
    }

    fn schema(&self) -> &'static FormSchema {
        self.draft.schema()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::schema::{GET_INVOLVED, NEWSLETTER};
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};

    /// Counts calls; fails when `fail` is set
    #[derive(Default)]
    struct CountingSubmitter {
        calls: Cell<u32>,
        fail: bool,
        last: RefCell<Option<Submission>>,
    }

    #[async_trait(?Send)]
    impl Submitter for CountingSubmitter {
        async fn submit(&self, submission: Submission) -> Result<Receipt, SubmissionError> {
            self.calls.set(self.calls.get() + 1);
            let form = submission.form;
            *self.last.borrow_mut() = Some(submission);
            if self.fail {
                return Err(SubmissionError::new("network unreachable"));
            }
            Ok(Receipt { form, reference: format!("{}-{}", form, self.calls.get()) })
        }
    }

    fn fill_application(controller: &mut FormController, agreed: bool) {
        controller.dispatch(FormAction::set("name", "Jane"));
        controller.dispatch(FormAction::set("email", "jane@example.com"));
        controller.dispatch(FormAction::set("motivation", "help"));
        controller.dispatch(FormAction::set("agreed_to_terms", agreed));
    }

    #[tokio::test]
    async fn test_application_succeeds_and_resets() {
        let submitter = CountingSubmitter::default();
        let mut controller = FormController::new(&GET_INVOLVED);
        fill_application(&mut controller, true);

        let receipt = controller.submit(&submitter).await.expect("submit failed");
        assert_eq!(receipt.reference, "get-involved-1");
        assert_eq!(submitter.calls.get(), 1);
        assert_eq!(controller.state(), &SubmitState::Submitted(receipt));
        assert!(controller.draft().is_pristine());

        let delivered = submitter.last.borrow().clone().unwrap();
        assert_eq!(delivered.fields.text("name"), "Jane");
    }

    #[tokio::test]
    async fn test_terms_not_agreed_never_reaches_submitter() {
        let submitter = CountingSubmitter::default();
        let mut controller = FormController::new(&GET_INVOLVED);
        fill_application(&mut controller, false);

        let err = controller.submit(&submitter).await.unwrap_err();
        assert_eq!(err, SubmitError::Validation(ValidationError { missing: vec!["agreed_to_terms"] }));
        assert_eq!(submitter.calls.get(), 0);
        assert_eq!(controller.state(), &SubmitState::Idle);
        assert!(controller.is_flagged("agreed_to_terms"));
        assert!(!controller.is_flagged("name"));
        assert_eq!(controller.draft().text("name"), "Jane");
    }

    #[tokio::test]
    async fn test_second_submit_while_pending_is_rejected() {
        let submitter = CountingSubmitter::default();
        let mut controller = FormController::new(&NEWSLETTER);
        controller.dispatch(FormAction::set("email", "jane@example.com"));

        let submission = controller.begin_submit().unwrap();
        assert!(controller.is_pending());
        assert_eq!(controller.begin_submit(), Err(SubmitError::AlreadyPending));
        assert_eq!(controller.submit(&submitter).await, Err(SubmitError::AlreadyPending));
        assert_eq!(submitter.calls.get(), 0);

        let outcome = submitter.submit(submission).await;
        assert!(controller.complete(outcome).is_ok());
        assert_eq!(submitter.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_failure_keeps_draft() {
        let submitter = CountingSubmitter { fail: true, ..Default::default() };
        let mut controller = FormController::new(&GET_INVOLVED);
        fill_application(&mut controller, true);

        let err = controller.submit(&submitter).await.unwrap_err();
        assert_eq!(err.to_string(), "Submission failed: network unreachable");
        assert_eq!(
            controller.state(),
            &SubmitState::Failed { reason: "network unreachable".to_string() }
        );
        assert_eq!(controller.draft().text("email"), "jane@example.com");
        // No automatic retry
        assert_eq!(submitter.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_hints_clear_on_valid_submit() {
        let submitter = CountingSubmitter::default();
        let mut controller = FormController::new(&NEWSLETTER);
        assert!(controller.submit(&submitter).await.is_err());
        assert!(controller.is_flagged("email"));

        controller.dispatch(FormAction::set("email", "jane@example.com"));
        assert!(controller.submit(&submitter).await.is_ok());
        assert!(controller.hints().is_none());
    }

    #[test]
    fn test_complete_requires_pending() {
        let receipt = || Ok(Receipt { form: "newsletter", reference: "1".into() });
        let mut controller = FormController::new(&NEWSLETTER);
        controller.dispatch(FormAction::set("email", "a@example.com"));

        // Idle: rejected, draft kept
        assert_eq!(controller.complete(receipt()), Err(SubmitError::NotPending));
        assert_eq!(controller.state(), &SubmitState::Idle);
        assert_eq!(controller.draft().text("email"), "a@example.com");
        assert_eq!(controller.completions(), 0);

        // A second outcome for one submission is rejected too
        controller.begin_submit().unwrap();
        assert!(controller.complete(receipt()).is_ok());
        controller.dispatch(FormAction::set("email", "b@example.com"));
        assert_eq!(
            controller.complete(Err(SubmissionError::new("late"))),
            Err(SubmitError::NotPending)
        );
        assert!(matches!(controller.state(), SubmitState::Submitted(_)));
        assert_eq!(controller.draft().text("email"), "b@example.com");
        assert_eq!(controller.completions(), 1);
    }

    #[test]
    fn test_dismiss_clears_notices_only() {
        let mut controller = FormController::new(&NEWSLETTER);
        controller.dismiss();
        assert_eq!(controller.state(), &SubmitState::Idle);

        controller.dispatch(FormAction::set("email", "a@example.com"));
        controller.begin_submit().unwrap();
        // Pending is not a notice
        controller.dismiss();
        assert!(controller.is_pending());

        controller.complete(Err(SubmissionError::new("offline"))).unwrap_err();
        controller.dismiss();
        assert_eq!(controller.state(), &SubmitState::Idle);
        assert_eq!(controller.draft().text("email"), "a@example.com");

        controller.begin_submit().unwrap();
        controller
            .complete(Ok(Receipt { form: "newsletter", reference: "2".into() }))
            .unwrap();
        controller.dismiss();
        assert_eq!(controller.state(), &SubmitState::Idle);
    }

    #[test]
    fn test_stale_notice_timer_is_ignored() {
        let mut controller = FormController::new(&NEWSLETTER);
        controller.dispatch(FormAction::set("email", "a@example.com"));
        controller.begin_submit().unwrap();
        controller
            .complete(Ok(Receipt { form: "newsletter", reference: "1".into() }))
            .unwrap();
        let first = controller.completions();

        controller.dispatch(FormAction::set("email", "b@example.com"));
        controller.begin_submit().unwrap();
        controller
            .complete(Ok(Receipt { form: "newsletter", reference: "2".into() }))
            .unwrap();

        controller.expire_notice(first);
        assert!(matches!(controller.state(), SubmitState::Submitted(_)));

        controller.expire_notice(controller.completions());
        assert_eq!(controller.state(), &SubmitState::Idle);
    }
}
