use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Blog::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Blog::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Blog::Title).text().not_null())
                    .col(ColumnDef::new(Blog::Slug).text().not_null().unique_key())
                    .col(ColumnDef::new(Blog::Excerpt).text().not_null().default(""))
                    .col(ColumnDef::new(Blog::Category).text().not_null())
                    .col(ColumnDef::new(Blog::CoverImage).text().not_null().default(""))
                    .col(
                        ColumnDef::new(Blog::Published)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Blog::Content).text().not_null())
                    .col(ColumnDef::new(Blog::PublishedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        // Listing is by publication date, undated drafts last
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_blog_published_at
                ON blog (published_at DESC NULLS LAST);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Blog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Blog {
    Table,
    Id,
    Title,
    Slug,
    Excerpt,
    Category,
    CoverImage,
    Published,
    Content,
    PublishedAt,
}
