use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Deliveries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Deliveries::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    // One delivery per request; the unique key backs the
                    // "delivery exists iff request is assigned" invariant.
                    .col(
                        ColumnDef::new(Deliveries::RequestId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Deliveries::VolunteerId).uuid().not_null())
                    .col(
                        ColumnDef::new(Deliveries::Status)
                            .string_len(20)
                            .not_null()
                            .default("Picked"),
                    )
                    .col(
                        ColumnDef::new(Deliveries::PickupTime)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Deliveries::DeliveryTime).timestamp_with_time_zone(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_deliveries_request_id")
                            .from(Deliveries::Table, Deliveries::RequestId)
                            .to(Requests::Table, Requests::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_deliveries_volunteer_id")
                            .from(Deliveries::Table, Deliveries::VolunteerId)
                            .to(Volunteers::Table, Volunteers::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // The volunteer dashboard lists deliveries by pickup time.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_deliveries_pickup_time
                ON deliveries (pickup_time DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_deliveries_pickup_time;")
            .await?;

        manager
            .drop_table(Table::drop().table(Deliveries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Deliveries {
    Table,
    Id,
    RequestId,
    VolunteerId,
    Status,
    PickupTime,
    DeliveryTime,
}

#[derive(DeriveIden)]
enum Requests {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Volunteers {
    Table,
    Id,
}
