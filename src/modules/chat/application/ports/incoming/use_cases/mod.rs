mod create_group_chat;
mod create_private_chat;
mod delete_chat;
mod delete_message;
mod get_message;
mod get_messages_between;
mod get_user_chats;
mod get_user_messages;
mod send_message;

pub use create_group_chat::{
    CreateGroupChatCommand, CreateGroupChatCommandError, CreateGroupChatError,
    CreateGroupChatUseCase,
};
pub use create_private_chat::{CreatePrivateChatError, CreatePrivateChatUseCase, PrivateChat};
pub use delete_chat::{DeleteChatError, DeleteChatUseCase};
pub use delete_message::{DeleteMessageError, DeleteMessageUseCase};
pub use get_message::{GetMessageError, GetMessageUseCase};
pub use get_messages_between::{GetMessagesBetweenError, GetMessagesBetweenUseCase};
pub use get_user_chats::{GetUserChatsError, GetUserChatsUseCase};
pub use get_user_messages::{GetUserMessagesError, GetUserMessagesUseCase};
pub use send_message::{
    SendMessageCommand, SendMessageCommandError, SendMessageError, SendMessageUseCase,
};
