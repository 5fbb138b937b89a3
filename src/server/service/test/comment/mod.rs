use crate::server::{
    error::AppError,
    model::comment::{CreateCommentParams, UpdateCommentParams},
    service::comment::CommentService,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
