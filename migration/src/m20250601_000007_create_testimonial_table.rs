use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Testimonial::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Testimonial::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Testimonial::Name).text().not_null())
                    .col(ColumnDef::new(Testimonial::Role).text().not_null())
                    .col(ColumnDef::new(Testimonial::Company).text().not_null())
                    .col(ColumnDef::new(Testimonial::Content).text().not_null())
                    .col(ColumnDef::new(Testimonial::Image).text().not_null().default(""))
                    .col(
                        ColumnDef::new(Testimonial::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Testimonial::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Testimonial {
    Table,
    Id,
    Name,
    Role,
    Company,
    Content,
    Image,
    CreatedAt,
}
