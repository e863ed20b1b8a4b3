use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hero::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Hero::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Hero::Greeting).text().not_null().default(""))
                    .col(ColumnDef::new(Hero::Name).text().not_null().default(""))
                    .col(ColumnDef::new(Hero::Title).text().not_null().default(""))
                    .col(ColumnDef::new(Hero::Tagline).text().not_null().default(""))
                    .col(ColumnDef::new(Hero::Description).text().not_null().default(""))
                    .col(ColumnDef::new(Hero::ProfileImage).text().not_null().default(""))
                    .col(ColumnDef::new(Hero::Phone).text())
                    .col(ColumnDef::new(Hero::Email).text())
                    .col(ColumnDef::new(Hero::Address).text())
                    .col(ColumnDef::new(Hero::ResumeUrl).text())
                    .col(
                        ColumnDef::new(Hero::SocialLinks)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'{}'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Hero::Skills)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(Hero::MyStory).text())
                    .col(ColumnDef::new(Hero::MarketingPhilosophy).text())
                    .col(
                        ColumnDef::new(Hero::MarketingApproach)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Hero::UniqueTraits)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Hero::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // The hero section is a singleton that is only ever updated
        manager
            .get_connection()
            .execute_unprepared("INSERT INTO hero DEFAULT VALUES")
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_hero_updated_at
                BEFORE UPDATE ON hero
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TRIGGER IF EXISTS update_hero_updated_at ON hero")
            .await?;

        manager
            .drop_table(Table::drop().table(Hero::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Hero {
    Table,
    Id,
    Greeting,
    Name,
    Title,
    Tagline,
    Description,
    ProfileImage,
    Phone,
    Email,
    Address,
    ResumeUrl,
    SocialLinks,
    Skills,
    MyStory,
    MarketingPhilosophy,
    MarketingApproach,
    UniqueTraits,
    UpdatedAt,
}
