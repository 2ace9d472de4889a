//! Create `bookings` table.
//!
//! `email` is the owner column every protected booking route checks against.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(uuid(Bookings::Id).primary_key())
                    .col(string_len(Bookings::CustomerName, 128).not_null())
                    .col(string_len(Bookings::Email, 255).not_null())
                    .col(string_len(Bookings::ServiceId, 32).not_null())
                    .col(string_len(Bookings::Service, 255).not_null())
                    .col(date(Bookings::Date).not_null())
                    .col(string_len(Bookings::Price, 32).not_null())
                    .col(
                        ColumnDef::new(Bookings::Img)
                            .string_len(1024)
                            .null(),
                    )
                    .col(string_len(Bookings::Status, 32).not_null().default("pending"))
                    .col(timestamp_with_time_zone(Bookings::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Bookings::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Bookings::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Bookings {
    Table,
    Id,
    CustomerName,
    Email,
    ServiceId,
    Service,
    Date,
    Price,
    Img,
    Status,
    CreatedAt,
    UpdatedAt,
}
