use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use models::product::{self, Entity as ProductEntity};

use crate::errors::ServiceError;
use crate::product::domain::Product;
use crate::repository::Repository;

/// SeaORM-backed repository over the `products` table.
pub struct SeaOrmProductRepository {
    pub db: DatabaseConnection,
}

fn to_record(m: product::Model) -> Product {
    Product {
        id: m.id,
        name: m.name,
        price: m.price,
        image: m.image,
        description: m.description,
        created_at: m.created_at.with_timezone(&Utc),
        updated_at: m.updated_at.with_timezone(&Utc),
    }
}

fn to_active(r: Product) -> product::ActiveModel {
    product::ActiveModel {
        id: Set(r.id),
        name: Set(r.name),
        price: Set(r.price),
        image: Set(r.image),
        description: Set(r.description),
        created_at: Set(r.created_at.into()),
        updated_at: Set(r.updated_at.into()),
    }
}

#[async_trait]
impl Repository<Product> for SeaOrmProductRepository {
    async fn list(&self) -> Result<Vec<Product>, ServiceError> {
        let rows = ProductEntity::find()
            .order_by_asc(product::Column::CreatedAt)
            .order_by_asc(product::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(to_record).collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Product>, ServiceError> {
        Ok(ProductEntity::find_by_id(id).one(&self.db).await?.map(to_record))
    }

    async fn insert(&self, record: Product) -> Result<Product, ServiceError> {
        let created = to_active(record).insert(&self.db).await?;
        Ok(to_record(created))
    }

    async fn replace(&self, record: Product) -> Result<Option<Product>, ServiceError> {
        match to_active(record).update(&self.db).await {
            Ok(updated) => Ok(Some(to_record(updated))),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let res = ProductEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}
