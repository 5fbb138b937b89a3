pub mod auth;
pub mod board;
pub mod comment;
pub mod post;
pub mod user;
