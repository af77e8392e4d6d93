pub mod role_query;
pub mod role_repository;

pub use role_query::{RoleQuery, RoleQueryError};
pub use role_repository::{RoleRepository, RoleRepositoryError};
