mod chat_query;
mod chat_repository;
mod message_query;
mod message_repository;

pub use chat_query::{ChatQuery, ChatQueryError};
pub use chat_repository::{ChatRepository, ChatRepositoryError};
pub use message_query::{MessageQuery, MessageQueryError};
pub use message_repository::{MessageRepository, MessageRepositoryError};
