mod credential_query_postgres;
pub mod jwt;
pub mod sea_orm_entity;
pub mod security;
mod user_repository_postgres;

pub use credential_query_postgres::CredentialQueryPostgres;
pub use user_repository_postgres::UserRepositoryPostgres;
