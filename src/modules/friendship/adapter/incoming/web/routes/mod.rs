mod friendship_response;
mod get_friends;
mod get_pending_requests;
mod remove_friend;
mod respond_friend_request;
mod send_friend_request;

pub use friendship_response::FriendshipResponse;
pub use get_friends::{__path_get_friends_handler, get_friends_handler};
pub use get_pending_requests::{__path_get_pending_requests_handler, get_pending_requests_handler};
pub use remove_friend::{__path_remove_friend_handler, remove_friend_handler};
pub use respond_friend_request::{
    __path_accept_friend_request_handler, __path_decline_friend_request_handler,
    accept_friend_request_handler, decline_friend_request_handler,
};
pub use send_friend_request::{__path_send_friend_request_handler, send_friend_request_handler};
