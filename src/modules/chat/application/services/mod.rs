mod create_group_chat_service;
mod create_private_chat_service;
mod delete_chat_service;
mod delete_message_service;
mod get_message_service;
mod get_messages_between_service;
mod get_user_chats_service;
mod get_user_messages_service;
mod send_message_service;

pub use create_group_chat_service::CreateGroupChatService;
pub use create_private_chat_service::CreatePrivateChatService;
pub use delete_chat_service::DeleteChatService;
pub use delete_message_service::DeleteMessageService;
pub use get_message_service::GetMessageService;
pub use get_messages_between_service::GetMessagesBetweenService;
pub use get_user_chats_service::GetUserChatsService;
pub use get_user_messages_service::GetUserMessagesService;
pub use send_message_service::SendMessageService;
