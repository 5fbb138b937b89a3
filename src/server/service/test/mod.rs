mod board;
mod comment;
mod post;
