//! In-memory repository
//!
//! Seeded from the content registry and lives as long as the app.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::traits::Repository;
use crate::domain::{DomainError, DomainResult, Entity};

struct Inner<T> {
    records: Vec<T>,
    next_id: u64,
}

impl<T: Entity> Inner<T> {
    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    fn fresh_id(&mut self) -> String {
        loop {
            let candidate = self.next_id.to_string();
            self.next_id += 1;
            if self.position(&candidate).is_none() {
                return candidate;
            }
        }
    }
}

pub struct InMemoryRepository<T> {
    inner: RwLock<Inner<T>>,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::seeded(Vec::new())
    }

    /// Seed records keep their ids; generated ids start after them
    pub fn seeded(records: Vec<T>) -> Self {
        let next_id = records.len() as u64 + 1;
        Self {
            inner: RwLock::new(Inner { records, next_id }),
        }
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity + 'static> Repository<T> for InMemoryRepository<T> {
    async fn list(&self) -> DomainResult<Vec<T>> {
        Ok(self.inner.read().await.records.clone())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<T>> {
        let guard = self.inner.read().await;
        Ok(guard.position(id).map(|i| guard.records[i].clone()))
    }

    async fn add(&self, mut entity: T) -> DomainResult<T> {
        let mut guard = self.inner.write().await;
        if entity.id().is_empty() {
            let id = guard.fresh_id();
            entity.set_id(id);
        } else if guard.position(entity.id()).is_some() {
            return Err(DomainError::Conflict(format!("id {} already exists", entity.id())));
        }
        log::debug!("Adding record {}", entity.id());
        guard.records.push(entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: T) -> DomainResult<T> {
        let mut guard = self.inner.write().await;
        let index = guard
            .position(entity.id())
            .ok_or_else(|| DomainError::NotFound(entity.id().to_string()))?;
        guard.records[index] = entity.clone();
        Ok(entity)
    }

    async fn remove(&self, id: &str) -> DomainResult<T> {
        let mut guard = self.inner.write().await;
        let index = guard
            .position(id)
            .ok_or_else(|| DomainError::NotFound(id.to_string()))?;
        log::debug!("Removing record {}", id);
        Ok(guard.records.remove(index))
    }
}
