use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::delivery::application::domain::entities::Volunteer;
use crate::modules::delivery::application::ports::outgoing::volunteer_repository::{
    NewVolunteer, VolunteerRepository, VolunteerRepositoryError,
};

use super::sea_orm_entity::volunteers::ActiveModel as VolunteerActiveModel;

#[derive(Clone, Debug)]
pub struct VolunteerRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl VolunteerRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VolunteerRepository for VolunteerRepositoryPostgres {
    async fn insert(&self, new: NewVolunteer) -> Result<Volunteer, VolunteerRepositoryError> {
        let active = VolunteerActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(new.name),
            contact_number: Set(new.contact_number),
            ngo_id: Set(new.ngo_id),
            created_at: NotSet,
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(|e| VolunteerRepositoryError::DatabaseError(e.to_string()))?;

        Ok(Volunteer {
            id: inserted.id,
            name: inserted.name,
            contact_number: inserted.contact_number,
            ngo_id: inserted.ngo_id,
        })
    }
}
