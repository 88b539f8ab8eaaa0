use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::outgoing::user_repository::{
    NewUser, UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::users::{ActiveModel as UserActiveModel, Model as UserModel};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_user(model: UserModel) -> User {
        User {
            id: model.id,
            user_type: model.user_type,
            name: model.name,
            contact_number: model.contact_number,
            email: model.email,
            address: model.address,
            proof_type: model.proof_type,
            proof_number: model.proof_number,
            username: model.username,
            password_hash: model.password_hash,
            created_at: model.created_at.with_timezone(&chrono::Utc),
        }
    }

    /// Which unique constraint tripped decides the conflict variant.
    fn map_insert_error(e: sea_orm::DbErr) -> UserRepositoryError {
        let err_str = e.to_string().to_lowercase();
        let is_unique_violation = err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint");

        if is_unique_violation {
            if err_str.contains("email") {
                return UserRepositoryError::EmailTaken;
            }
            return UserRepositoryError::UsernameTaken;
        }
        UserRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            user_type: Set(user.user_type),
            name: Set(user.name),
            contact_number: Set(user.contact_number),
            email: Set(user.email),
            address: Set(user.address),
            proof_type: Set(user.proof_type),
            proof_number: Set(user.proof_number),
            username: Set(user.username),
            password_hash: Set(user.password_hash),
            created_at: NotSet,
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(Self::map_insert_error)?;

        Ok(Self::map_to_user(inserted))
    }
}
