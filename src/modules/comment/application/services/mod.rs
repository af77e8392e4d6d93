mod add_comment_service;
mod delete_comment_service;
mod get_comments_service;

pub use add_comment_service::AddCommentService;
pub use delete_comment_service::DeleteCommentService;
pub use get_comments_service::GetCommentsService;
