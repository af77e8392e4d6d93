use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // chats
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Chats::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Chats::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Chats::ChatType).string_len(10).not_null())
                    .col(ColumnDef::new(Chats::PrivatePairKey).string_len(73).null())
                    .col(
                        ColumnDef::new(Chats::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // At most one PRIVATE chat per unordered user pair
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_chats_private_pair_key
                ON chats (private_pair_key)
                WHERE chat_type = 'PRIVATE';
                "#,
            )
            .await?;

        // =====================================================
        // chat_participants join table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(ChatParticipants::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ChatParticipants::ChatId).uuid().not_null())
                    .col(ColumnDef::new(ChatParticipants::UserId).uuid().not_null())
                    .primary_key(
                        Index::create()
                            .col(ChatParticipants::ChatId)
                            .col(ChatParticipants::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chat_participants_chat_id")
                            .from(ChatParticipants::Table, ChatParticipants::ChatId)
                            .to(Chats::Table, Chats::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chat_participants_user_id")
                            .from(ChatParticipants::Table, ChatParticipants::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Fast lookup: all chats for a user
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_chat_participants_user_id
                ON chat_participants (user_id);
                "#,
            )
            .await?;

        // =====================================================
        // messages
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Messages::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Messages::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Messages::ChatId).uuid().not_null())
                    .col(ColumnDef::new(Messages::SenderId).uuid().not_null())
                    .col(ColumnDef::new(Messages::Content).string_len(500).not_null())
                    .col(
                        ColumnDef::new(Messages::SentAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_messages_chat_id")
                            .from(Messages::Table, Messages::ChatId)
                            .to(Chats::Table, Chats::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_messages_sender_id")
                            .from(Messages::Table, Messages::SenderId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Chat history is always read in send order
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_messages_chat_id_sent_at
                ON messages (chat_id, sent_at ASC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_messages_chat_id_sent_at;
                DROP INDEX IF EXISTS idx_chat_participants_user_id;
                DROP INDEX IF EXISTS idx_chats_private_pair_key;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Messages::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ChatParticipants::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Chats::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Chats {
    Table,
    Id,
    ChatType,
    PrivatePairKey,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ChatParticipants {
    Table,
    ChatId,
    UserId,
}

#[derive(DeriveIden)]
enum Messages {
    Table,
    Id,
    ChatId,
    SenderId,
    Content,
    SentAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
