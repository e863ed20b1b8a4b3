pub mod sea_orm_entity;
pub mod service_repository_postgres;

pub use service_repository_postgres::ServiceRepositoryPostgres;
