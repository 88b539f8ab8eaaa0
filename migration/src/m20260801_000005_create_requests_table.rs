use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Requests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Requests::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Requests::UserId).uuid().not_null())
                    .col(ColumnDef::new(Requests::FoodId).uuid().not_null())
                    .col(ColumnDef::new(Requests::ProofFile).string_len(255))
                    .col(
                        ColumnDef::new(Requests::RequestDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Requests::Status)
                            .string_len(20)
                            .not_null()
                            .default("Pending"),
                    )
                    .col(
                        ColumnDef::new(Requests::Verified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_requests_user_id")
                            .from(Requests::Table, Requests::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_requests_food_id")
                            .from(Requests::Table, Requests::FoodId)
                            .to(FoodItems::Table, FoodItems::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // The admin dashboard lists all requests newest first.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_requests_request_date
                ON requests (request_date DESC);
                "#,
            )
            .await?;

        // Per-user request history lookups.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_requests_user_id
                ON requests (user_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_requests_request_date;
                DROP INDEX IF EXISTS idx_requests_user_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Requests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Requests {
    Table,
    Id,
    UserId,
    FoodId,
    ProofFile,
    RequestDate,
    Status,
    Verified,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum FoodItems {
    Table,
    Id,
}
