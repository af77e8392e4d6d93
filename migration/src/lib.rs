pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_users_table;
mod m20250601_000002_create_roles_tables;
mod m20250601_000003_create_friendships_table;
mod m20250601_000004_create_chats_tables;
mod m20250601_000005_create_communities_tables;
mod m20250601_000006_create_posts_table;
mod m20250601_000007_create_comments_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_users_table::Migration),
            Box::new(m20250601_000002_create_roles_tables::Migration),
            Box::new(m20250601_000003_create_friendships_table::Migration),
            Box::new(m20250601_000004_create_chats_tables::Migration),
            Box::new(m20250601_000005_create_communities_tables::Migration),
            Box::new(m20250601_000006_create_posts_table::Migration),
            Box::new(m20250601_000007_create_comments_table::Migration),
        ]
    }
}
