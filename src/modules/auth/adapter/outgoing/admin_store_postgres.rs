use super::sea_orm_entity::admins::{
    ActiveModel as AdminActiveModel, Column as AdminColumn, Entity as AdminEntity,
};
use crate::modules::auth::application::ports::outgoing::admin_store::{
    AdminAuthRecord, AdminStore, AdminStoreError,
};
use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct AdminStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl AdminStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AdminStore for AdminStorePostgres {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminAuthRecord>, AdminStoreError> {
        let admin = AdminEntity::find()
            .filter(AdminColumn::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(|e| AdminStoreError::DatabaseError(e.to_string()))?;

        Ok(admin.map(|model| AdminAuthRecord {
            id: model.id,
            password_hash: model.password_hash,
        }))
    }

    async fn insert_admin(
        &self,
        username: &str,
        password_hash: &str,
        role: &str,
    ) -> Result<Uuid, AdminStoreError> {
        let id = Uuid::new_v4();
        let active = AdminActiveModel {
            id: Set(id),
            username: Set(username.to_string()),
            password_hash: Set(password_hash.to_string()),
            role: Set(role.to_string()),
            created_at: NotSet,
        };

        active
            .insert(&*self.db)
            .await
            .map_err(|e| AdminStoreError::DatabaseError(e.to_string()))?;

        Ok(id)
    }
}
