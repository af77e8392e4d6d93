use std::sync::Arc;

use crate::friendship::application::ports::incoming::use_cases::{
    AcceptFriendRequestUseCase, DeclineFriendRequestUseCase, GetFriendsUseCase,
    GetPendingRequestsUseCase, RemoveFriendUseCase, SendFriendRequestUseCase,
};

#[derive(Clone)]
pub struct FriendshipUseCases {
    pub send_request: Arc<dyn SendFriendRequestUseCase + Send + Sync>,
    pub accept: Arc<dyn AcceptFriendRequestUseCase + Send + Sync>,
    pub decline: Arc<dyn DeclineFriendRequestUseCase + Send + Sync>,
    pub remove: Arc<dyn RemoveFriendUseCase + Send + Sync>,
    pub get_friends: Arc<dyn GetFriendsUseCase + Send + Sync>,
    pub get_pending: Arc<dyn GetPendingRequestsUseCase + Send + Sync>,
}
