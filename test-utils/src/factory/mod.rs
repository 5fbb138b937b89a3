//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*`
//! shorthand for default values. Audit columns are stamped with the system
//! actor and the current time.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let board = factory::create_board(&db).await?;
//! let post = factory::post::PostFactory::new(&db, board.id, user.id)
//!     .images(vec!["a.jpg".to_string()])
//!     .build()
//!     .await?;
//!
//! let (user, board, post) = factory::helpers::create_post_with_dependencies(&db).await?;
//! ```

pub mod board;
pub mod comment;
pub mod helpers;
pub mod post;
pub mod user;

pub use board::create_board;
pub use comment::create_comment;
pub use post::create_post;
pub use user::create_user;
