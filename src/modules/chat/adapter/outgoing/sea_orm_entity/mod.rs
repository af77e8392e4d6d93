pub mod chat_participants;
pub mod chats;
pub mod messages;
