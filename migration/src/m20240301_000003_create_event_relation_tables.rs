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
enum EventAdmin {
    Table,
    EventId,
    UserId,
}

#[derive(DeriveIden)]
enum EventHost {
    Table,
    EventId,
    UserId,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(EventAdmin::Table)
                .if_not_exists()
                .col(ColumnDef::new(EventAdmin::EventId).integer().not_null())
                .col(ColumnDef::new(EventAdmin::UserId).integer().not_null())
                .primary_key(
                    Index::create()
                        .name("pk_event_admin")
                        .col(EventAdmin::EventId)
                        .col(EventAdmin::UserId),
                )
                .to_owned(),
        )
        .await?;

        m.alter_table(
            Table::alter()
                .table(EventAdmin::Table)
                .add_foreign_key(
                    TableForeignKey::new()
                        .name("fk_event_admin_event")
                        .from_tbl(EventAdmin::Table)
                        .from_col(EventAdmin::EventId)
                        .to_tbl(Event::Table)
                        .to_col(Event::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .add_foreign_key(
                    TableForeignKey::new()
                        .name("fk_event_admin_user")
                        .from_tbl(EventAdmin::Table)
                        .from_col(EventAdmin::UserId)
                        .to_tbl(User::Table)
                        .to_col(User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_table(
            Table::create()
                .table(EventHost::Table)
                .if_not_exists()
                .col(ColumnDef::new(EventHost::EventId).integer().not_null())
                .col(ColumnDef::new(EventHost::UserId).integer().not_null())
                .col(
                    ColumnDef::new(EventHost::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp()),
                )
                .primary_key(
                    Index::create()
                        .name("pk_event_host")
                        .col(EventHost::EventId)
                        .col(EventHost::UserId),
                )
                .to_owned(),
        )
        .await?;

        m.alter_table(
            Table::alter()
                .table(EventHost::Table)
                .add_foreign_key(
                    TableForeignKey::new()
                        .name("fk_event_host_event")
                        .from_tbl(EventHost::Table)
                        .from_col(EventHost::EventId)
                        .to_tbl(Event::Table)
                        .to_col(Event::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .add_foreign_key(
                    TableForeignKey::new()
                        .name("fk_event_host_user")
                        .from_tbl(EventHost::Table)
                        .from_col(EventHost::UserId)
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
                .name("idx_event_host_user")
                .table(EventHost::Table)
                .col(EventHost::UserId)
                .to_owned(),
        )
        .await
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(EventHost::Table).to_owned())
            .await?;
        m.drop_table(Table::drop().table(EventAdmin::Table).to_owned())
            .await
    }
}
