use super::sea_orm_entity::users::{Column as UserColumn, Entity as UserEntity, Model as UserModel};
use crate::modules::auth::application::ports::outgoing::user_query::{
    UserAuthRecord, UserQuery, UserQueryError,
};
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_auth_record(model: UserModel) -> UserAuthRecord {
        UserAuthRecord {
            id: model.id,
            user_type: model.user_type,
            name: model.name,
            password_hash: model.password_hash,
        }
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserAuthRecord>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(user.map(Self::map_to_auth_record))
    }
}
