use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No unique constraint on (date, time, stylist_id): double bookings are accepted.
        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Bookings::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Bookings::Reference).string().not_null())
                    .col(ColumnDef::new(Bookings::Status).string().not_null())
                    .col(ColumnDef::new(Bookings::ServiceCategory).string().null())
                    .col(ColumnDef::new(Bookings::ServiceName).string().null())
                    .col(ColumnDef::new(Bookings::ServicePrice).string().null())
                    .col(ColumnDef::new(Bookings::ServiceDuration).integer().null())
                    .col(ColumnDef::new(Bookings::Services).json_binary().null())
                    .col(ColumnDef::new(Bookings::TotalDuration).integer().null())
                    .col(ColumnDef::new(Bookings::TotalPriceMin).string().null())
                    .col(ColumnDef::new(Bookings::Date).string().not_null())
                    .col(ColumnDef::new(Bookings::Time).string().not_null())
                    .col(ColumnDef::new(Bookings::StylistId).integer().not_null())
                    .col(ColumnDef::new(Bookings::StylistName).string().not_null())
                    .col(ColumnDef::new(Bookings::ClientFirstName).string().not_null())
                    .col(ColumnDef::new(Bookings::ClientLastName).string().not_null())
                    .col(ColumnDef::new(Bookings::ClientEmail).string().not_null())
                    .col(ColumnDef::new(Bookings::ClientPhone).string().not_null())
                    .col(ColumnDef::new(Bookings::ClientNotes).text().not_null())
                    .col(
                        ColumnDef::new(Bookings::CreatedAt)
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
            .drop_table(Table::drop().table(Bookings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Bookings {
    Table,
    Id,
    Reference,
    Status,
    ServiceCategory,
    ServiceName,
    ServicePrice,
    ServiceDuration,
    Services,
    TotalDuration,
    TotalPriceMin,
    Date,
    Time,
    StylistId,
    StylistName,
    ClientFirstName,
    ClientLastName,
    ClientEmail,
    ClientPhone,
    ClientNotes,
    CreatedAt,
}
