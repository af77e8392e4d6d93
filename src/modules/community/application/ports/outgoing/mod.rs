mod community_query;
mod community_repository;

pub use community_query::{CommunityQuery, CommunityQueryError};
pub use community_repository::{
    CommunityRepository, CommunityRepositoryError, NewCommunity, UpdateCommunityData,
};
