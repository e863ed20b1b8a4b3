pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_updated_at_function;
mod m20250601_000002_create_hero_table;
mod m20250601_000003_create_education_table;
mod m20250601_000004_create_experience_table;
mod m20250601_000005_create_project_table;
mod m20250601_000006_create_service_table;
mod m20250601_000007_create_testimonial_table;
mod m20250601_000008_create_skilltool_table;
mod m20250601_000009_create_blog_table;
mod m20250601_000010_create_message_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_updated_at_function::Migration),
            Box::new(m20250601_000002_create_hero_table::Migration),
            Box::new(m20250601_000003_create_education_table::Migration),
            Box::new(m20250601_000004_create_experience_table::Migration),
            Box::new(m20250601_000005_create_project_table::Migration),
            Box::new(m20250601_000006_create_service_table::Migration),
            Box::new(m20250601_000007_create_testimonial_table::Migration),
            Box::new(m20250601_000008_create_skilltool_table::Migration),
            Box::new(m20250601_000009_create_blog_table::Migration),
            Box::new(m20250601_000010_create_message_table::Migration),
        ]
    }
}
