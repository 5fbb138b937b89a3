use crate::server::{
    data::board::BoardRepository,
    model::{
        audit::{Audit, SYSTEM_ACTOR},
        board::CreateBoardParams,
    },
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
