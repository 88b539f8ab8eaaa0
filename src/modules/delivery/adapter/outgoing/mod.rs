pub mod delivery_query_postgres;
pub mod delivery_repository_postgres;
pub mod sea_orm_entity;
pub mod volunteer_repository_postgres;
