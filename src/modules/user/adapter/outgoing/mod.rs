mod user_profile_repository_postgres;
mod user_query_postgres;

pub use user_profile_repository_postgres::UserProfileRepositoryPostgres;
pub use user_query_postgres::UserQueryPostgres;
