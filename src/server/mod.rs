//! HTTP backend for the community boards.
//!
//! The server follows the same layering for every resource:
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, access control and DTO conversion
//! - **Service Layer** (`service/`) - Existence checks, ownership checks and audit stamping
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session helpers and the auth guard
//!
//! Supporting modules:
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Tracing, database and session initialization
//! - **Router** (`router`, `docs`) - Route table and OpenAPI document
//!
//! A request is routed to a controller, which resolves the caller from the
//! session when needed, converts the DTO to params and calls a service. The
//! service reads and writes through repositories and hands a domain model back
//! for the controller to convert into a DTO.

pub mod config;
pub mod controller;
pub mod data;
pub mod docs;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
