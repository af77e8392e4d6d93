pub mod user_profile_repository;
pub mod user_query;

pub use user_profile_repository::{
    UpdateProfileData, UserProfileRepository, UserProfileRepositoryError,
};
pub use user_query::{UserQuery, UserQueryError, UserSearchCriteria};
