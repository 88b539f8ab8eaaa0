use super::sea_orm_entity::food_items::{Entity as FoodEntity, Model as FoodModel};
use crate::modules::catalog::application::domain::food::{FoodItem, FoodStatus};
use crate::modules::catalog::application::ports::outgoing::food_query::{
    AvailableFoodRow, FoodQuery, FoodQueryError,
};
use async_trait::async_trait;
use sea_orm::{
    DatabaseBackend, DatabaseConnection, EntityTrait, FromQueryResult, Statement,
};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct FoodQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl FoodQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_food_item(model: FoodModel) -> Result<FoodItem, FoodQueryError> {
        let status = FoodStatus::parse(&model.status).ok_or_else(|| {
            FoodQueryError::DatabaseError(format!("Unknown food status: {}", model.status))
        })?;

        Ok(FoodItem {
            id: model.id,
            donor_id: model.donor_id,
            food_name: model.food_name,
            quantity: model.quantity,
            status,
            posted_at: model.posted_at.with_timezone(&chrono::Utc),
        })
    }
}

#[derive(Debug, FromQueryResult)]
struct AvailableFoodModel {
    food_id: Uuid,
    food_name: String,
    quantity: String,
    posted_at: sea_orm::prelude::DateTimeWithTimeZone,
    donor_name: Option<String>,
    donor_address: Option<String>,
}

#[async_trait]
impl FoodQuery for FoodQueryPostgres {
    async fn list_available(&self) -> Result<Vec<AvailableFoodRow>, FoodQueryError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
                f.id AS food_id,
                f.food_name,
                f.quantity,
                f.posted_at,
                d.name AS donor_name,
                d.address AS donor_address
            FROM food_items f
            LEFT JOIN donors d ON d.id = f.donor_id
            WHERE f.status = 'Available'
            ORDER BY f.posted_at DESC
            "#,
            [],
        );

        let rows = AvailableFoodModel::find_by_statement(stmt)
            .all(&*self.db)
            .await
            .map_err(|e| FoodQueryError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| AvailableFoodRow {
                food_id: row.food_id,
                food_name: row.food_name,
                quantity: row.quantity,
                posted_at: row.posted_at.with_timezone(&chrono::Utc),
                donor_name: row.donor_name,
                donor_address: row.donor_address,
            })
            .collect())
    }

    async fn find_by_id(&self, food_id: Uuid) -> Result<Option<FoodItem>, FoodQueryError> {
        let model = FoodEntity::find_by_id(food_id)
            .one(&*self.db)
            .await
            .map_err(|e| FoodQueryError::DatabaseError(e.to_string()))?;

        model.map(Self::map_to_food_item).transpose()
    }
}
