//! Database repository layer for all domain entities.
//!
//! Repositories use SeaORM entity models internally and return domain models
//! so the service layer never sees entity types. All queries, inserts,
//! updates and deletes go through these repositories.

pub mod board;
pub mod comment;
pub mod post;
pub mod post_image;
pub mod user;
