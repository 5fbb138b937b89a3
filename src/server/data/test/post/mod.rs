use crate::server::{
    data::post::PostRepository,
    model::{
        audit::{Audit, SYSTEM_ACTOR},
        post::{CreatePostParams, NewPost},
    },
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod save;

fn new_post(board_id: i32, user_id: i32, images: Vec<&str>) -> NewPost {
    NewPost::from_params(
        CreatePostParams {
            board_id,
            title: "Title".to_string(),
            content: "Content".to_string(),
            images: images.into_iter().map(String::from).collect(),
        },
        user_id,
        Audit::stamp_new(SYSTEM_ACTOR),
    )
}
