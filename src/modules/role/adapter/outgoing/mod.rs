mod role_query_postgres;
mod role_repository_postgres;
pub mod sea_orm_entity;

pub use role_query_postgres::RoleQueryPostgres;
pub use role_repository_postgres::RoleRepositoryPostgres;
