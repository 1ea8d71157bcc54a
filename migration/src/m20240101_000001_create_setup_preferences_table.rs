use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SetupPreferences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SetupPreferences::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    // JSON array of player names
                    .col(
                        ColumnDef::new(SetupPreferences::PlayerNames)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SetupPreferences::Difficulty)
                            .string()
                            .not_null()
                            .default("medium"),
                    )
                    .col(
                        ColumnDef::new(SetupPreferences::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SetupPreferences::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SetupPreferences {
    Table,
    Id,
    PlayerNames,
    Difficulty,
    UpdatedAt,
}
