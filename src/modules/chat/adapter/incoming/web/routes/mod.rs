mod chat_response;
mod create_group_chat;
mod create_private_chat;
mod delete_chat;
mod delete_message;
mod get_message;
mod get_messages_between;
mod get_user_chats;
mod get_user_messages;
mod send_message;

pub use chat_response::{ChatResponse, MessageResponse};
pub use create_group_chat::{
    __path_create_group_chat_handler, create_group_chat_handler, CreateGroupChatRequest,
};
pub use create_private_chat::{__path_create_private_chat_handler, create_private_chat_handler};
pub use delete_chat::{__path_delete_chat_handler, delete_chat_handler};
pub use delete_message::{__path_delete_message_handler, delete_message_handler};
pub use get_message::{__path_get_message_handler, get_message_handler};
pub use get_messages_between::{__path_get_messages_between_handler, get_messages_between_handler};
pub use get_user_chats::{__path_get_user_chats_handler, get_user_chats_handler};
pub use get_user_messages::{__path_get_user_messages_handler, get_user_messages_handler};
pub use send_message::{__path_send_message_handler, send_message_handler, SendMessageRequest};
