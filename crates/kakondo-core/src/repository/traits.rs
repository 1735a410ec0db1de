//! Repository Layer - Core Traits
//!
//! Abstract data access for the dashboard collections.

use async_trait::async_trait;

use crate::domain::{DomainResult, Entity};

/// Core repository trait for CRUD operations
///
/// Listing order is insertion order.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// List all entities
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Find entity by ID
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<T>>;

    /// Add an entity. An empty id is replaced with a fresh one.
    async fn add(&self, entity: T) -> DomainResult<T>;

    /// Replace an existing entity with the same id
    async fn update(&self, entity: T) -> DomainResult<T>;

    /// Remove entity by ID, returning it
    async fn remove(&self, id: &str) -> DomainResult<T>;
}
