use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::post::PostImage;

pub struct PostImageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostImageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the images of a post in insertion order
    pub async fn get_by_post_id(&self, post_id: i32) -> Result<Vec<PostImage>, DbErr> {
        let entities = entity::prelude::PostImage::find()
            .filter(entity::post_image::Column::PostId.eq(post_id))
            .order_by_asc(entity::post_image::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(PostImage::from_entity).collect())
    }
}
