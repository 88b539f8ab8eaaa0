pub use sea_orm_migration::prelude::*;

mod m20260801_000001_create_users_table;
mod m20260801_000002_create_admins_table;
mod m20260801_000003_create_donors_table;
mod m20260801_000004_create_food_items_table;
mod m20260801_000005_create_requests_table;
mod m20260801_000006_create_volunteers_table;
mod m20260801_000007_create_deliveries_table;
mod m20260801_000008_create_feedback_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_users_table::Migration),
            Box::new(m20260801_000002_create_admins_table::Migration),
            Box::new(m20260801_000003_create_donors_table::Migration),
            Box::new(m20260801_000004_create_food_items_table::Migration),
            Box::new(m20260801_000005_create_requests_table::Migration),
            Box::new(m20260801_000006_create_volunteers_table::Migration),
            Box::new(m20260801_000007_create_deliveries_table::Migration),
            Box::new(m20260801_000008_create_feedback_table::Migration),
        ]
    }
}
