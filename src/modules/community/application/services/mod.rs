mod community_membership_service;
mod create_community_service;
mod delete_community_service;
mod get_all_communities_service;
mod get_community_members_service;
mod get_user_communities_service;
mod update_community_service;

pub use community_membership_service::CommunityMembershipService;
pub use create_community_service::CreateCommunityService;
pub use delete_community_service::DeleteCommunityService;
pub use get_all_communities_service::GetAllCommunitiesService;
pub use get_community_members_service::GetCommunityMembersService;
pub use get_user_communities_service::GetUserCommunitiesService;
pub use update_community_service::UpdateCommunityService;
