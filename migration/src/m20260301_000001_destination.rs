use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Destination::Table)
                    .if_not_exists()
                    .col(pk_auto(Destination::Id))
                    .col(string(Destination::Name))
                    .col(string_uniq(Destination::Slug))
                    .col(string(Destination::Country))
                    .col(text_null(Destination::Summary))
                    .col(text_null(Destination::Description))
                    .col(string_null(Destination::HeroImage))
                    .col(timestamp(Destination::CreatedAt))
                    .col(timestamp(Destination::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Destination::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Destination {
    Table,
    Id,
    Name,
    Slug,
    Country,
    Summary,
    Description,
    HeroImage,
    CreatedAt,
    UpdatedAt,
}
