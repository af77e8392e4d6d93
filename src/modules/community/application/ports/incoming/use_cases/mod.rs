mod create_community;
mod delete_community;
mod get_all_communities;
mod get_community_members;
mod get_user_communities;
mod membership;
mod update_community;

pub use create_community::{
    CreateCommunityCommand, CreateCommunityError, CreateCommunityUseCase,
};
pub use delete_community::{DeleteCommunityError, DeleteCommunityUseCase};
pub use get_all_communities::{GetAllCommunitiesError, GetAllCommunitiesUseCase};
pub use get_community_members::{GetCommunityMembersError, GetCommunityMembersUseCase};
pub use get_user_communities::{GetUserCommunitiesError, GetUserCommunitiesUseCase};
pub use membership::{CommunityMembershipError, JoinCommunityUseCase, LeaveCommunityUseCase};
pub use update_community::{
    UpdateCommunityCommand, UpdateCommunityError, UpdateCommunityUseCase,
};
