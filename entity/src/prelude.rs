pub use super::board::Entity as Board;
pub use super::comment::Entity as Comment;
pub use super::post::Entity as Post;
pub use super::post_image::Entity as PostImage;
pub use super::user::Entity as User;
