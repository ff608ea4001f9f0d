//! Create `pizzas` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pizzas::Table)
                    .if_not_exists()
                    .col(uuid(Pizzas::Id).primary_key())
                    .col(string_len(Pizzas::Name, 255))
                    .col(string_len(Pizzas::ImageUrl, 255))
                    .col(double(Pizzas::Price))
                    .col(string_len_null(Pizzas::Description, 500))
                    .col(timestamp_with_time_zone(Pizzas::CreatedAt))
                    .col(timestamp_with_time_zone(Pizzas::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Pizzas::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Pizzas {
    Table,
    Id,
    Name,
    ImageUrl,
    Price,
    Description,
    CreatedAt,
    UpdatedAt,
}
