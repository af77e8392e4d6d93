use std::sync::Arc;

use crate::comment::application::ports::incoming::use_cases::{
    AddCommentUseCase, DeleteCommentUseCase, GetCommentsUseCase,
};

#[derive(Clone)]
pub struct CommentUseCases {
    pub add: Arc<dyn AddCommentUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteCommentUseCase + Send + Sync>,
    pub list: Arc<dyn GetCommentsUseCase + Send + Sync>,
}
