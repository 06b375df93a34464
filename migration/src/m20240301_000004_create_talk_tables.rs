use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Event {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Talk {
    Table,
    Id,
    EventId,
    Title,
    SpeakerName,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum TalkClaim {
    Table,
    Id,
    TalkId,
    UserId,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Talk::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(Talk::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(ColumnDef::new(Talk::EventId).integer().not_null())
                .col(ColumnDef::new(Talk::Title).string().not_null())
                .col(ColumnDef::new(Talk::SpeakerName).string())
                .col(
                    ColumnDef::new(Talk::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp()),
                )
                .col(
                    ColumnDef::new(Talk::UpdatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp()),
                )
                .to_owned(),
        )
        .await?;

        m.alter_table(
            Table::alter()
                .table(Talk::Table)
                .add_foreign_key(
                    TableForeignKey::new()
                        .name("fk_talk_event")
                        .from_tbl(Talk::Table)
                        .from_col(Talk::EventId)
                        .to_tbl(Event::Table)
                        .to_col(Event::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_table(
            Table::create()
                .table(TalkClaim::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(TalkClaim::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(ColumnDef::new(TalkClaim::TalkId).integer().not_null())
                .col(ColumnDef::new(TalkClaim::UserId).integer().not_null())
                .col(
                    ColumnDef::new(TalkClaim::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp()),
                )
                .to_owned(),
        )
        .await?;

        m.alter_table(
            Table::alter()
                .table(TalkClaim::Table)
                .add_foreign_key(
                    TableForeignKey::new()
                        .name("fk_talk_claim_talk")
                        .from_tbl(TalkClaim::Table)
                        .from_col(TalkClaim::TalkId)
                        .to_tbl(Talk::Table)
                        .to_col(Talk::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .add_foreign_key(
                    TableForeignKey::new()
                        .name("fk_talk_claim_user")
                        .from_tbl(TalkClaim::Table)
                        .from_col(TalkClaim::UserId)
                        .to_tbl(User::Table)
                        .to_col(User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_talk_claim_talk_user")
                .table(TalkClaim::Table)
                .col(TalkClaim::TalkId)
                .col(TalkClaim::UserId)
                .unique()
                .to_owned(),
        )
        .await
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(TalkClaim::Table).to_owned())
            .await?;
        m.drop_table(Table::drop().table(Talk::Table).to_owned()).await
    }
}
