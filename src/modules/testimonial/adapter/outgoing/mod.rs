pub mod sea_orm_entity;
pub mod testimonial_repository_postgres;

pub use testimonial_repository_postgres::TestimonialRepositoryPostgres;
