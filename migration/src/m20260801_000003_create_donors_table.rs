use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Donors::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Donors::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Donors::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Donors::ContactNumber)
                            .string_len(30)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Donors::Address).text().not_null())
                    .col(
                        ColumnDef::new(Donors::CreatedAt)
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
            .drop_table(Table::drop().table(Donors::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Donors {
    Table,
    Id,
    Name,
    ContactNumber,
    Address,
    CreatedAt,
}
