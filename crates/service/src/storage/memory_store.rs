use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::repository::{Record, Repository};

/// Process-local repository.
///
/// Keeps records in a `Vec` so listing preserves insertion order. Every call
/// takes the lock once, so each operation is atomic with respect to others.
#[derive(Clone)]
pub struct MemoryRepository<T> {
    inner: Arc<RwLock<Vec<T>>>,
}

impl<T> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self { inner: Arc::new(RwLock::new(Vec::new())) }
    }
}

impl<T: Record> MemoryRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

#[async_trait]
impl<T: Record> Repository<T> for MemoryRepository<T> {
    async fn list(&self) -> Result<Vec<T>, ServiceError> {
        Ok(self.inner.read().await.clone())
    }

    async fn get(&self, id: Uuid) -> Result<Option<T>, ServiceError> {
        let items = self.inner.read().await;
        Ok(items.iter().find(|r| r.id() == id).cloned())
    }

    async fn insert(&self, record: T) -> Result<T, ServiceError> {
        let mut items = self.inner.write().await;
        if items.iter().any(|r| r.id() == record.id()) {
            return Err(ServiceError::Internal(format!("duplicate {} id {}", T::KIND, record.id())));
        }
        items.push(record.clone());
        Ok(record)
    }

    async fn replace(&self, record: T) -> Result<Option<T>, ServiceError> {
        let mut items = self.inner.write().await;
        match items.iter_mut().find(|r| r.id() == record.id()) {
            Some(slot) => {
                *slot = record.clone();
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let mut items = self.inner.write().await;
        let before = items.len();
        items.retain(|r| r.id() != id);
        Ok(items.len() < before)
    }
}
