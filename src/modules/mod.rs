pub mod auth;
pub mod chat;
pub mod comment;
pub mod community;
pub mod friendship;
pub mod post;
pub mod role;
pub mod user;
