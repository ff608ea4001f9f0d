//! Table mappings for the persistent backend.
//!
//! Entities here describe storage layout only; the domain records live in the
//! `service` crate and are converted at the repository boundary.
pub mod db;
pub mod location;
pub mod pizza;
pub mod product;

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use migration::MigratorTrait;
    use sea_orm::{ActiveModelTrait, EntityTrait, Set};
    use uuid::Uuid;

    use crate::{db, location, pizza, product};

    #[tokio::test]
    async fn entities_match_migrated_schema() -> anyhow::Result<()> {
        let db = db::connect_url("sqlite::memory:").await?;
        migration::Migrator::up(&db, None).await?;
        let now = Utc::now();

        let loc = location::ActiveModel {
            id: Set(Uuid::new_v4()),
            address: Set("Rua das Pizzas, 123".into()),
            latitude: Set(-23.5505),
            longitude: Set(-46.6333),
            name: Set(None),
            description: Set(Some("A melhor pizzaria da cidade!".into())),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(&db)
        .await?;
        let found = location::Entity::find_by_id(loc.id).one(&db).await?.expect("location row");
        assert_eq!(found.address, "Rua das Pizzas, 123");
        assert_eq!(found.name, None);

        let p = pizza::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set("Margherita".into()),
            image_url: Set("http://x/m.jpg".into()),
            price: Set(12.99),
            description: Set(None),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(&db)
        .await?;
        assert_eq!(pizza::Entity::find().all(&db).await?.len(), 1);
        pizza::Entity::delete_by_id(p.id).exec(&db).await?;
        assert!(pizza::Entity::find().all(&db).await?.is_empty());

        let pr = product::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set("Refrigerante".into()),
            price: Set(6.5),
            image: Set("https://example.com/refri.jpg".into()),
            description: Set(None),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(&db)
        .await?;
        let found = product::Entity::find_by_id(pr.id).one(&db).await?.expect("product row");
        assert_eq!(found.price, 6.5);

        migration::Migrator::down(&db, None).await?;
        Ok(())
    }
}
