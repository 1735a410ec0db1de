//! Form State Controller
//!
//! Drafts are updated through a single reducer, validated against a static
//! schema and delivered through a `Submitter`.

mod controller;
mod draft;
mod error;
mod records;
mod reducer;
pub mod schema;
mod submitter;
mod validate;

pub use controller::{FormController, SubmitState};
pub use draft::{Draft, FieldValue};
pub use error::{SubmissionError, SubmitError, ValidationError};
pub use records::{cbo_from_draft, staff_from_draft};
pub use reducer::{reduce, FormAction};
pub use schema::{FieldKind, FieldSpec, FormSchema};
pub use submitter::{Receipt, Submission, Submitter};
pub use validate::validate;
