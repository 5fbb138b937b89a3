//! SeaORM entities for the orury schema.
//!
//! One module per table. Relations are declared on the child side with
//! `belongs_to` and cascade on delete, so removing a board removes its posts
//! and removing a post removes its images and comments.

pub mod prelude;

pub mod board;
pub mod comment;
pub mod post;
pub mod post_image;
pub mod user;
