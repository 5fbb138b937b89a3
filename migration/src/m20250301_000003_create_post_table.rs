use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_user_table::User, m20250301_000002_create_board_table::Board,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Post::Table)
                    .if_not_exists()
                    .col(pk_auto(Post::Id))
                    .col(integer(Post::BoardId))
                    .col(integer(Post::UserId))
                    .col(string(Post::Title))
                    .col(text(Post::Content))
                    .col(string_null(Post::ThumbnailUrl))
                    .col(text_null(Post::Images))
                    .col(string(Post::CreatedBy))
                    .col(timestamp_with_time_zone(Post::CreatedAt))
                    .col(string(Post::UpdatedBy))
                    .col(timestamp_with_time_zone(Post::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_board_id")
                            .from(Post::Table, Post::BoardId)
                            .to(Board::Table, Board::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_user_id")
                            .from(Post::Table, Post::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Post::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Post {
    Table,
    Id,
    BoardId,
    UserId,
    Title,
    Content,
    ThumbnailUrl,
    Images,
    CreatedBy,
    CreatedAt,
    UpdatedBy,
    UpdatedAt,
}
