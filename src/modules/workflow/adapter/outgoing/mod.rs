pub mod assignment_postgres;
pub mod dashboard_query_postgres;
pub mod request_repository_postgres;
pub mod sea_orm_entity;
