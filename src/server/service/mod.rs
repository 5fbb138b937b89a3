//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository)
//! layer. They resolve references, check existence, stamp audit metadata and
//! translate missing records into `AppError::NotFound`. Caller identity is
//! always passed in explicitly as an email.

pub mod board;
pub mod comment;
pub mod post;
pub mod user;

#[cfg(test)]
mod test;
