use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use models::pizza::{self, Entity as PizzaEntity};

use crate::errors::ServiceError;
use crate::pizza::domain::Pizza;
use crate::repository::Repository;

/// SeaORM-backed repository over the `pizzas` table.
pub struct SeaOrmPizzaRepository {
    pub db: DatabaseConnection,
}

fn to_record(m: pizza::Model) -> Pizza {
    Pizza {
        id: m.id,
        name: m.name,
        image_url: m.image_url,
        price: m.price,
        description: m.description,
        created_at: m.created_at.with_timezone(&Utc),
        updated_at: m.updated_at.with_timezone(&Utc),
    }
}

fn to_active(r: Pizza) -> pizza::ActiveModel {
    pizza::ActiveModel {
        id: Set(r.id),
        name: Set(r.name),
        image_url: Set(r.image_url),
        price: Set(r.price),
        description: Set(r.description),
        created_at: Set(r.created_at.into()),
        updated_at: Set(r.updated_at.into()),
    }
}

#[async_trait]
impl Repository<Pizza> for SeaOrmPizzaRepository {
    async fn list(&self) -> Result<Vec<Pizza>, ServiceError> {
        let rows = PizzaEntity::find()
            .order_by_asc(pizza::Column::CreatedAt)
            .order_by_asc(pizza::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(to_record).collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Pizza>, ServiceError> {
        Ok(PizzaEntity::find_by_id(id).one(&self.db).await?.map(to_record))
    }

    async fn insert(&self, record: Pizza) -> Result<Pizza, ServiceError> {
        let created = to_active(record).insert(&self.db).await?;
        Ok(to_record(created))
    }

    async fn replace(&self, record: Pizza) -> Result<Option<Pizza>, ServiceError> {
        match to_active(record).update(&self.db).await {
            Ok(updated) => Ok(Some(to_record(updated))),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let res = PizzaEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::pizza::{CreatePizza, PizzaService, UpdatePizza};
    use crate::test_support::get_db;

    #[tokio::test]
    async fn pizza_crud_against_database() -> Result<(), anyhow::Error> {
        let svc = PizzaService::new(Arc::new(SeaOrmPizzaRepository { db: get_db().await? }));

        let created = svc
            .create(CreatePizza {
                name: "Margherita".into(),
                image_url: "http://x/m.jpg".into(),
                price: 12.99,
                description: None,
            })
            .await?;
        assert_eq!(svc.find_one(created.id).await?, created);

        let updated = svc.update(created.id, UpdatePizza { price: Some(13.5), ..Default::default() }).await?;
        assert_eq!(updated.price, 13.5);
        assert_eq!(updated.name, "Margherita");
        assert_eq!(svc.find_one(created.id).await?, updated);

        svc.remove(created.id).await?;
        assert!(svc.find_all().await?.is_empty());
        assert!(matches!(svc.update(created.id, UpdatePizza::default()).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn same_timestamp_rows_list_in_id_order() -> Result<(), anyhow::Error> {
        let repo = SeaOrmPizzaRepository { db: get_db().await? };
        let now = crate::repository::timestamp();
        let mut ids = vec![Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];
        for (i, id) in ids.iter().enumerate() {
            repo.insert(Pizza {
                id: *id,
                name: format!("Pizza {i}"),
                image_url: "http://x/p.jpg".into(),
                price: 10.0,
                description: None,
                created_at: now,
                updated_at: now,
            })
            .await?;
        }
        ids.sort();
        let listed: Vec<Uuid> = repo.list().await?.into_iter().map(|p| p.id).collect();
        assert_eq!(listed, ids);
        Ok(())
    }
}
