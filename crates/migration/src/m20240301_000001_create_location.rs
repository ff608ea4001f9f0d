//! Create `locations` table.
//!
//! Coordinates are stored as double precision; name and description are nullable.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Locations::Table)
                    .if_not_exists()
                    .col(uuid(Locations::Id).primary_key())
                    .col(string_len(Locations::Address, 255))
                    .col(double(Locations::Latitude))
                    .col(double(Locations::Longitude))
                    .col(string_len_null(Locations::Name, 255))
                    .col(string_len_null(Locations::Description, 500))
                    .col(timestamp_with_time_zone(Locations::CreatedAt))
                    .col(timestamp_with_time_zone(Locations::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Locations::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Locations {
    Table,
    Id,
    Address,
    Latitude,
    Longitude,
    Name,
    Description,
    CreatedAt,
    UpdatedAt,
}
