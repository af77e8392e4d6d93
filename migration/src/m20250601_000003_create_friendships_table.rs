use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Friendships::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Friendships::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Friendships::RequesterId).uuid().not_null())
                    .col(ColumnDef::new(Friendships::ReceiverId).uuid().not_null())
                    .col(
                        ColumnDef::new(Friendships::Status)
                            .string_len(10)
                            .not_null()
                            .default("PENDING"),
                    )
                    .col(
                        ColumnDef::new(Friendships::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Friendships::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_friendships_requester_id")
                            .from(Friendships::Table, Friendships::RequesterId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_friendships_receiver_id")
                            .from(Friendships::Table, Friendships::ReceiverId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Self-requests are rejected by the service; keep the table honest too
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE friendships
                ADD CONSTRAINT chk_friendships_not_self
                CHECK (requester_id <> receiver_id);
                "#,
            )
            .await?;

        // At most one active relationship per unordered pair
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_friendships_active_pair
                ON friendships (LEAST(requester_id, receiver_id), GREATEST(requester_id, receiver_id))
                WHERE status IN ('PENDING', 'ACCEPTED');
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_friendships_receiver_status
                ON friendships (receiver_id, status);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_friendships_requester_status
                ON friendships (requester_id, status);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_friendships_updated_at
                BEFORE UPDATE ON friendships
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                "DROP TRIGGER IF EXISTS update_friendships_updated_at ON friendships",
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_friendships_active_pair;
                DROP INDEX IF EXISTS idx_friendships_receiver_status;
                DROP INDEX IF EXISTS idx_friendships_requester_status;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Friendships::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Friendships {
    Table,
    Id,
    RequesterId,
    ReceiverId,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
