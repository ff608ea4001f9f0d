use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use models::location::{self, Entity as LocationEntity};

use crate::errors::ServiceError;
use crate::location::domain::Location;
use crate::repository::Repository;

/// SeaORM-backed repository over the `locations` table.
pub struct SeaOrmLocationRepository {
    pub db: DatabaseConnection,
}

fn to_record(m: location::Model) -> Location {
    Location {
        id: m.id,
        address: m.address,
        latitude: m.latitude,
        longitude: m.longitude,
        name: m.name,
        description: m.description,
        created_at: m.created_at.with_timezone(&Utc),
        updated_at: m.updated_at.with_timezone(&Utc),
    }
}

fn to_active(r: Location) -> location::ActiveModel {
    location::ActiveModel {
        id: Set(r.id),
        address: Set(r.address),
        latitude: Set(r.latitude),
        longitude: Set(r.longitude),
        name: Set(r.name),
        description: Set(r.description),
        created_at: Set(r.created_at.into()),
        updated_at: Set(r.updated_at.into()),
    }
}

#[async_trait]
impl Repository<Location> for SeaOrmLocationRepository {
    async fn list(&self) -> Result<Vec<Location>, ServiceError> {
        let rows = LocationEntity::find()
            .order_by_asc(location::Column::CreatedAt)
            .order_by_asc(location::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(to_record).collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Location>, ServiceError> {
        let found = LocationEntity::find_by_id(id).one(&self.db).await?;
        Ok(found.map(to_record))
    }

    async fn insert(&self, record: Location) -> Result<Location, ServiceError> {
        let created = to_active(record).insert(&self.db).await?;
        Ok(to_record(created))
    }

    async fn replace(&self, record: Location) -> Result<Option<Location>, ServiceError> {
        match to_active(record).update(&self.db).await {
            Ok(updated) => Ok(Some(to_record(updated))),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let res = LocationEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}
