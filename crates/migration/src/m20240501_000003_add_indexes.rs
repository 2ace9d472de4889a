use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Services: catalog code is unique
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uniq_services_service_id")
                    .table(Services::Table)
                    .col(Services::ServiceId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Bookings: owner lookups
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_bookings_email")
                    .table(Bookings::Table)
                    .col(Bookings::Email)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_bookings_email").table(Bookings::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_services_service_id").table(Services::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Services { Table, ServiceId }

#[derive(DeriveIden)]
enum Bookings { Table, Email }
