use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::location::domain::{CreateLocation, Location, UpdateLocation};
use crate::repository::{timestamp, Record, Repository};

/// CRUD over pizzeria locations.
#[derive(Clone)]
pub struct LocationService {
    repo: Arc<dyn Repository<Location>>,
}

impl LocationService {
    pub fn new(repo: Arc<dyn Repository<Location>>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateLocation) -> Result<Location, ServiceError> {
        input.validate()?;
        let now = timestamp();
        let record = Location {
            id: Uuid::new_v4(),
            address: input.address,
            latitude: input.latitude,
            longitude: input.longitude,
            name: input.name,
            description: input.description,
            created_at: now,
            updated_at: now,
        };
        let created = self.repo.insert(record).await?;
        info!(id = %created.id, event = "location_created", "created location");
        Ok(created)
    }

    pub async fn find_all(&self) -> Result<Vec<Location>, ServiceError> {
        self.repo.list().await
    }

    pub async fn find_one(&self, id: Uuid) -> Result<Location, ServiceError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(Location::KIND, id))
    }

    #[instrument(skip(self, patch), fields(id = %id))]
    pub async fn update(&self, id: Uuid, patch: UpdateLocation) -> Result<Location, ServiceError> {
        patch.validate()?;
        let mut current = self.find_one(id).await?;
        patch.apply(&mut current);
        current.updated_at = timestamp();
        let updated = self
            .repo
            .replace(current)
            .await?
            .ok_or_else(|| ServiceError::not_found(Location::KIND, id))?;
        info!(event = "location_updated", "updated location");
        Ok(updated)
    }

    #[instrument(skip(self), fields(id = %id))]
    pub async fn remove(&self, id: Uuid) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found(Location::KIND, id));
        }
        info!(event = "location_removed", "removed location");
        Ok(())
    }
}
