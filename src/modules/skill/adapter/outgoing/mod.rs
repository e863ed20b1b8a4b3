pub mod sea_orm_entity;
pub mod skill_repository_postgres;
pub mod skill_store_http;
pub mod skill_store_repository;

pub use skill_repository_postgres::SkillRepositoryPostgres;
pub use skill_store_http::HttpSkillStore;
pub use skill_store_repository::RepositorySkillStore;
