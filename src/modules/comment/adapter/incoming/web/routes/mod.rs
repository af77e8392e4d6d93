mod add_comment;
mod comment_response;
mod delete_comment;
mod get_comments;

pub use add_comment::{__path_add_comment_handler, add_comment_handler, AddCommentRequest};
pub use comment_response::CommentResponse;
pub use delete_comment::{__path_delete_comment_handler, delete_comment_handler};
pub use get_comments::{__path_get_comments_handler, get_comments_handler};
