//! Command Wrappers
//!
//! Async operations the pages call, organized by domain. Failures come back
//! as `Result<_, String>` for display and are logged here.

mod config;
mod dashboard;
mod forms;

pub use config::*;
pub use dashboard::*;
pub use forms::*;
