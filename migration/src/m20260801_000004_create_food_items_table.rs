use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FoodItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FoodItems::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FoodItems::DonorId).uuid().not_null())
                    .col(
                        ColumnDef::new(FoodItems::FoodName)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(FoodItems::Quantity).string_len(50).not_null())
                    .col(
                        ColumnDef::new(FoodItems::Status)
                            .string_len(20)
                            .not_null()
                            .default("Available"),
                    )
                    .col(
                        ColumnDef::new(FoodItems::PostedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_food_items_donor_id")
                            .from(FoodItems::Table, FoodItems::DonorId)
                            .to(Donors::Table, Donors::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // The user dashboard filters on status and orders newest first.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_food_items_status_posted
                ON food_items (status, posted_at DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_food_items_status_posted;")
            .await?;

        manager
            .drop_table(Table::drop().table(FoodItems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum FoodItems {
    Table,
    Id,
    DonorId,
    FoodName,
    Quantity,
    Status,
    PostedAt,
}

#[derive(DeriveIden)]
enum Donors {
    Table,
    Id,
}
