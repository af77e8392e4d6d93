mod friendship_query;
mod friendship_repository;

pub use friendship_query::{FriendshipQuery, FriendshipQueryError};
pub use friendship_repository::{FriendshipRepository, FriendshipRepositoryError};
