use std::sync::Arc;

use crate::community::application::ports::incoming::use_cases::{
    CreateCommunityUseCase, DeleteCommunityUseCase, GetAllCommunitiesUseCase,
    GetCommunityMembersUseCase, GetUserCommunitiesUseCase, JoinCommunityUseCase,
    LeaveCommunityUseCase, UpdateCommunityUseCase,
};

#[derive(Clone)]
pub struct CommunityUseCases {
    pub create: Arc<dyn CreateCommunityUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateCommunityUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteCommunityUseCase + Send + Sync>,
    pub join: Arc<dyn JoinCommunityUseCase + Send + Sync>,
    pub leave: Arc<dyn LeaveCommunityUseCase + Send + Sync>,
    pub get_all: Arc<dyn GetAllCommunitiesUseCase + Send + Sync>,
    pub get_user_communities: Arc<dyn GetUserCommunitiesUseCase + Send + Sync>,
    pub get_members: Arc<dyn GetCommunityMembersUseCase + Send + Sync>,
}
