use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000003_create_post_table::Post;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PostImage::Table)
                    .if_not_exists()
                    .col(pk_auto(PostImage::Id))
                    .col(integer(PostImage::PostId))
                    .col(text(PostImage::ImageUrl))
                    .col(string(PostImage::CreatedBy))
                    .col(timestamp_with_time_zone(PostImage::CreatedAt))
                    .col(string(PostImage::UpdatedBy))
                    .col(timestamp_with_time_zone(PostImage::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_image_post_id")
                            .from(PostImage::Table, PostImage::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PostImage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PostImage {
    Table,
    Id,
    PostId,
    ImageUrl,
    CreatedBy,
    CreatedAt,
    UpdatedBy,
    UpdatedAt,
}
