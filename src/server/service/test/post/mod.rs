use crate::server::{
    error::AppError,
    model::post::{CreatePostParams, UpdatePostParams},
    service::post::PostService,
};
use test_utils::{builder::TestBuilder, factory};

mod get_images;
mod scenario;
mod update;

fn create_params(board_id: i32, images: &[&str]) -> CreatePostParams {
    CreatePostParams {
        board_id,
        title: "Title".to_string(),
        content: "Content".to_string(),
        images: images.iter().map(|s| s.to_string()).collect(),
    }
}
