mod get_friends;
mod get_pending_requests;
mod remove_friend;
mod respond_friend_request;
mod send_friend_request;

pub use get_friends::{GetFriendsError, GetFriendsUseCase};
pub use get_pending_requests::{GetPendingRequestsError, GetPendingRequestsUseCase};
pub use remove_friend::{RemoveFriendError, RemoveFriendUseCase};
pub use respond_friend_request::{
    AcceptFriendRequestUseCase, DeclineFriendRequestUseCase, RespondFriendRequestError,
};
pub use send_friend_request::{SendFriendRequestError, SendFriendRequestUseCase};
