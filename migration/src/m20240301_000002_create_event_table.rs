use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Event {
    Table,
    Id,
    Name,
    Description,
    StartsAt,
    EndsAt,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Event::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(Event::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(ColumnDef::new(Event::Name).string().not_null())
                .col(ColumnDef::new(Event::Description).text())
                .col(ColumnDef::new(Event::StartsAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Event::EndsAt).timestamp_with_time_zone().not_null())
                .col(
                    ColumnDef::new(Event::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp()),
                )
                .col(
                    ColumnDef::new(Event::UpdatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp()),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_event_starts_at")
                .table(Event::Table)
                .col(Event::StartsAt)
                .to_owned(),
        )
        .await
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Event::Table).to_owned()).await
    }
}
