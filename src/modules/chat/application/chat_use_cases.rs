use std::sync::Arc;

use crate::chat::application::ports::incoming::use_cases::{
    CreateGroupChatUseCase, CreatePrivateChatUseCase, DeleteChatUseCase, DeleteMessageUseCase,
    GetMessageUseCase, GetMessagesBetweenUseCase, GetUserChatsUseCase, GetUserMessagesUseCase,
    SendMessageUseCase,
};

#[derive(Clone)]
pub struct ChatUseCases {
    pub create_private: Arc<dyn CreatePrivateChatUseCase + Send + Sync>,
    pub create_group: Arc<dyn CreateGroupChatUseCase + Send + Sync>,
    pub get_user_chats: Arc<dyn GetUserChatsUseCase + Send + Sync>,
    pub delete_chat: Arc<dyn DeleteChatUseCase + Send + Sync>,
    pub send_message: Arc<dyn SendMessageUseCase + Send + Sync>,
    pub get_message: Arc<dyn GetMessageUseCase + Send + Sync>,
    pub get_messages_between: Arc<dyn GetMessagesBetweenUseCase + Send + Sync>,
    pub get_user_messages: Arc<dyn GetUserMessagesUseCase + Send + Sync>,
    pub delete_message: Arc<dyn DeleteMessageUseCase + Send + Sync>,
}
