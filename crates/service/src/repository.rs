use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use uuid::Uuid;

use crate::errors::ServiceError;

/// A stored entity addressable by a generated UUID.
pub trait Record: Clone + Send + Sync + 'static {
    /// Resource name used in logs and not-found messages.
    const KIND: &'static str;

    fn id(&self) -> Uuid;
}

/// Storage seam shared by the in-memory and database backends.
#[async_trait]
pub trait Repository<T: Record>: Send + Sync {
    /// All records in creation order.
    async fn list(&self) -> Result<Vec<T>, ServiceError>;
    async fn get(&self, id: Uuid) -> Result<Option<T>, ServiceError>;
    async fn insert(&self, record: T) -> Result<T, ServiceError>;
    /// Overwrite the record with the same id; `None` when it no longer exists.
    async fn replace(&self, record: T) -> Result<Option<T>, ServiceError>;
    /// Returns whether a record was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError>;
}

/// Current time at microsecond precision, the finest the database keeps.
pub fn timestamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}
