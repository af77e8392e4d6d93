mod get_friends_service;
mod get_pending_requests_service;
mod remove_friend_service;
mod respond_friend_request_service;
mod send_friend_request_service;

pub use get_friends_service::GetFriendsService;
pub use get_pending_requests_service::GetPendingRequestsService;
pub use remove_friend_service::RemoveFriendService;
pub use respond_friend_request_service::RespondFriendRequestService;
pub use send_friend_request_service::SendFriendRequestService;
