//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary
//! and transformed to DTOs at the controller boundary. Parameter types carry
//! the input of a single service operation.

pub mod audit;
pub mod board;
pub mod comment;
pub mod post;
pub mod user;
