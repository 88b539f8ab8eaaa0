pub mod admin_store_postgres;
pub mod sea_orm_entity;
pub mod security;
pub mod session_store_redis;
pub mod user_query_postgres;
pub mod user_repository_postgres;
