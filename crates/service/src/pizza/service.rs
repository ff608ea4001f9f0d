use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::pizza::domain::{CreatePizza, Pizza, UpdatePizza};
use crate::repository::{timestamp, Record, Repository};

#[derive(Clone)]
pub struct PizzaService {
    repo: Arc<dyn Repository<Pizza>>,
}

impl PizzaService {
    pub fn new(repo: Arc<dyn Repository<Pizza>>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: CreatePizza) -> Result<Pizza, ServiceError> {
        input.validate()?;
        let now = timestamp();
        let record = Pizza {
            id: Uuid::new_v4(),
            name: input.name,
            image_url: input.image_url,
            price: input.price,
            description: input.description,
            created_at: now,
            updated_at: now,
        };
        let created = self.repo.insert(record).await?;
        info!(id = %created.id, event = "pizza_created", "created pizza");
        Ok(created)
    }

    pub async fn find_all(&self) -> Result<Vec<Pizza>, ServiceError> {
        self.repo.list().await
    }

    pub async fn find_one(&self, id: Uuid) -> Result<Pizza, ServiceError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(Pizza::KIND, id))
    }

    #[instrument(skip(self, patch), fields(id = %id))]
    pub async fn update(&self, id: Uuid, patch: UpdatePizza) -> Result<Pizza, ServiceError> {
        patch.validate()?;
        let mut current = self.find_one(id).await?;
        patch.apply(&mut current);
        current.updated_at = timestamp();
        let updated = self
            .repo
            .replace(current)
            .await?
            .ok_or_else(|| ServiceError::not_found(Pizza::KIND, id))?;
        info!(event = "pizza_updated", "updated pizza");
        Ok(updated)
    }

    #[instrument(skip(self), fields(id = %id))]
    pub async fn remove(&self, id: Uuid) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found(Pizza::KIND, id));
        }
        info!(event = "pizza_removed", "removed pizza");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory_store::MemoryRepository;

    fn service() -> PizzaService {
        PizzaService::new(Arc::new(MemoryRepository::<Pizza>::new()))
    }

    fn margherita() -> CreatePizza {
        CreatePizza {
            name: "Margherita".into(),
            image_url: "http://x/m.jpg".into(),
            price: 12.99,
            description: None,
        }
    }

    #[tokio::test]
    async fn margherita_lifecycle() -> Result<(), anyhow::Error> {
        let svc = service();
        let created = svc.create(margherita()).await?;
        assert_eq!(created.name, "Margherita");
        assert_eq!(created.image_url, "http://x/m.jpg");
        assert_eq!(created.price, 12.99);
        assert_eq!(svc.find_one(created.id).await?, created);

        svc.remove(created.id).await?;
        assert!(matches!(svc.find_one(created.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn ids_are_unique_tokens() -> Result<(), anyhow::Error> {
        let svc = service();
        let a = svc.create(margherita()).await?;
        let b = svc.create(margherita()).await?;
        assert_ne!(a.id, b.id);
        assert_eq!(svc.find_all().await?, vec![a, b]);
        Ok(())
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() -> Result<(), anyhow::Error> {
        assert!(service().find_all().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn update_never_changes_id() -> Result<(), anyhow::Error> {
        let svc = service();
        let created = svc.create(margherita()).await?;
        let updated = svc
            .update(created.id, UpdatePizza { name: Some("Margherita Especial".into()), ..Default::default() })
            .await?;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Margherita Especial");
        assert_eq!(updated.price, created.price);
        assert_eq!(svc.find_all().await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn price_over_cap_is_rejected_on_update() -> Result<(), anyhow::Error> {
        let svc = service();
        let created = svc.create(margherita()).await?;
        let res = svc.update(created.id, UpdatePizza { price: Some(150.0), ..Default::default() }).await;
        assert!(matches!(res, Err(ServiceError::Validation(_))));
        assert_eq!(svc.find_one(created.id).await?.price, 12.99);
        Ok(())
    }

    #[tokio::test]
    async fn absent_id_is_not_found() {
        let svc = service();
        let id = Uuid::new_v4();
        assert!(matches!(svc.find_one(id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.update(id, UpdatePizza::default()).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.remove(id).await, Err(ServiceError::NotFound(_))));
    }
}
