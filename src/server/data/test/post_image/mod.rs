use crate::server::{
    data::{post::PostRepository, post_image::PostImageRepository},
    model::{
        audit::{Audit, SYSTEM_ACTOR},
        post::{CreatePostParams, NewPost},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
