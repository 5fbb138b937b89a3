use crate::server::{
    error::AppError,
    model::{
        audit::SYSTEM_ACTOR,
        board::{CreateBoardParams, UpdateBoardParams},
    },
    service::board::BoardService,
};
use test_utils::{builder::TestBuilder, factory};

mod get_all;
mod get_by_id;
mod update;
