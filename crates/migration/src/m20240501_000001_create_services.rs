//! Create `services` table: the repair/maintenance catalog shown on the site.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists()
                    .col(uuid(Services::Id).primary_key())
                    .col(string_len(Services::ServiceId, 32).not_null())
                    .col(string_len(Services::Title, 255).not_null())
                    .col(string_len(Services::Img, 1024).not_null())
                    // Kept as text so catalog prices render exactly as entered ("20.00").
                    .col(string_len(Services::Price, 32).not_null())
                    .col(text(Services::Description).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Services::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Services { Table, Id, ServiceId, Title, Img, Price, Description }
