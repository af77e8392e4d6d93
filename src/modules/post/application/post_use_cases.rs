use std::sync::Arc;

use crate::post::application::ports::incoming::use_cases::{
    CreatePostUseCase, DeletePostUseCase, GetAllPostsUseCase, GetCommunityPostsUseCase,
    GetPostUseCase, GetUserPostsUseCase, UpdatePostUseCase,
};

#[derive(Clone)]
pub struct PostUseCases {
    pub create: Arc<dyn CreatePostUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetPostUseCase + Send + Sync>,
    pub get_all: Arc<dyn GetAllPostsUseCase + Send + Sync>,
    pub get_by_author: Arc<dyn GetUserPostsUseCase + Send + Sync>,
    pub get_by_community: Arc<dyn GetCommunityPostsUseCase + Send + Sync>,
    pub update: Arc<dyn UpdatePostUseCase + Send + Sync>,
    pub delete: Arc<dyn DeletePostUseCase + Send + Sync>,
}
