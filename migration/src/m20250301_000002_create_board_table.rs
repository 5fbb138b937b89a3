use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Board::Table)
                    .if_not_exists()
                    .col(pk_auto(Board::Id))
                    .col(string(Board::Title))
                    .col(string(Board::CreatedBy))
                    .col(timestamp_with_time_zone(Board::CreatedAt))
                    .col(string(Board::UpdatedBy))
                    .col(timestamp_with_time_zone(Board::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Board::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Board {
    Table,
    Id,
    Title,
    CreatedBy,
    CreatedAt,
    UpdatedBy,
    UpdatedAt,
}
