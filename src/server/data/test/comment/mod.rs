use crate::server::{
    data::comment::CommentRepository,
    model::{
        audit::{Audit, SYSTEM_ACTOR},
        comment::{CreateCommentParams, NewComment},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_post_id;
