//! API data transfer objects shared by every controller.
//!
//! These types are the JSON request and response bodies of the HTTP API and
//! are registered as OpenAPI schemas.

pub mod api;
pub mod board;
pub mod comment;
pub mod post;
pub mod user;
