mod add_comment;
mod delete_comment;
mod get_comments;

pub use add_comment::{AddCommentCommand, AddCommentCommandError, AddCommentError, AddCommentUseCase};
pub use delete_comment::{DeleteCommentError, DeleteCommentUseCase};
pub use get_comments::{GetCommentsError, GetCommentsUseCase};
