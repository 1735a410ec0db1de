//! Domain Layer - Core Entity Trait
//!
//! Every record held in a repository has a string identifier that is
//! unique within its collection.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// Returns the entity's unique identifier
    fn id(&self) -> &str;

    /// Replaces the identifier (used when a repository assigns one)
    fn set_id(&mut self, id: String);
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(DomainError::NotFound("cbo 9".into()).to_string(), "Not found: cbo 9");
        assert_eq!(DomainError::Conflict("id 1".into()).to_string(), "Conflict: id 1");
    }
}
