use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::product::domain::{CreateProduct, Product, UpdateProduct};
use crate::repository::{timestamp, Record, Repository};

#[derive(Clone)]
pub struct ProductService {
    repo: Arc<dyn Repository<Product>>,
}

impl ProductService {
    pub fn new(repo: Arc<dyn Repository<Product>>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: CreateProduct) -> Result<Product, ServiceError> {
        input.validate()?;
        let now = timestamp();
        let record = Product {
            id: Uuid::new_v4(),
            name: input.name,
            price: input.price,
            image: input.image,
            description: input.description,
            created_at: now,
            updated_at: now,
        };
        let created = self.repo.insert(record).await?;
        info!(id = %created.id, event = "product_created", "created product");
        Ok(created)
    }

    pub async fn find_all(&self) -> Result<Vec<Product>, ServiceError> {
        self.repo.list().await
    }

    pub async fn find_one(&self, id: Uuid) -> Result<Product, ServiceError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(Product::KIND, id))
    }

    #[instrument(skip(self, patch), fields(id = %id))]
    pub async fn update(&self, id: Uuid, patch: UpdateProduct) -> Result<Product, ServiceError> {
        patch.validate()?;
        let mut current = self.find_one(id).await?;
        patch.apply(&mut current);
        current.updated_at = timestamp();
        let updated = self
            .repo
            .replace(current)
            .await?
            .ok_or_else(|| ServiceError::not_found(Product::KIND, id))?;
        info!(event = "product_updated", "updated product");
        Ok(updated)
    }

    #[instrument(skip(self), fields(id = %id))]
    pub async fn remove(&self, id: Uuid) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found(Product::KIND, id));
        }
        info!(event = "product_removed", "removed product");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory_store::MemoryRepository;

    fn service() -> ProductService {
        ProductService::new(Arc::new(MemoryRepository::<Product>::new()))
    }

    fn soda() -> CreateProduct {
        CreateProduct {
            name: "Refrigerante 2L".into(),
            price: 12.0,
            image: "https://exemplo.com/refri.jpg".into(),
            description: None,
        }
    }

    #[tokio::test]
    async fn create_find_update_remove() -> Result<(), anyhow::Error> {
        let svc = service();
        let created = svc.create(soda()).await?;
        assert_eq!(svc.find_one(created.id).await?, created);

        let updated = svc
            .update(created.id, UpdateProduct { description: Some("Gelado".into()), ..Default::default() })
            .await?;
        assert_eq!(updated.description.as_deref(), Some("Gelado"));
        assert_eq!(updated.image, created.image);
        assert_eq!(updated.price, created.price);

        svc.remove(created.id).await?;
        assert!(svc.find_all().await?.is_empty());
        assert!(matches!(svc.remove(created.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn invalid_input_is_not_stored() -> Result<(), anyhow::Error> {
        let svc = service();
        let res = svc.create(CreateProduct { price: -1.0, ..soda() }).await;
        assert!(matches!(res, Err(ServiceError::Validation(_))));
        assert!(svc.find_all().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn absent_id_is_not_found() {
        let svc = service();
        let id = Uuid::new_v4();
        assert!(matches!(svc.find_one(id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.update(id, UpdateProduct::default()).await, Err(ServiceError::NotFound(_))));
    }
}
