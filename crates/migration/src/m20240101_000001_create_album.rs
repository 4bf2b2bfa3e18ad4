//! Create `album` table.
//!
//! Column widths follow the recordings schema the service was first run against.
use sea_orm_migration::{prelude::*, schema::*, sea_orm::DbBackend};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite only accepts AUTOINCREMENT on an INTEGER PRIMARY KEY (already 64-bit there).
        let mut id = match manager.get_database_backend() {
            DbBackend::Sqlite => integer(Album::Id),
            _ => big_integer(Album::Id),
        };
        manager
            .create_table(
                Table::create()
                    .table(Album::Table)
                    .if_not_exists()
                    .col(id.primary_key().auto_increment())
                    .col(string_len(Album::Title, 128).not_null())
                    .col(string_len(Album::Artist, 255).not_null())
                    .col(double(Album::Price).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Album::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Album {
    Table,
    Id,
    Title,
    Artist,
    Price,
}
