use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000001_destination::Destination;

static IDX_ACCOMMODATION_DESTINATION_ID: &str = "idx-accommodation-destination_id";
static FK_ACCOMMODATION_DESTINATION_ID: &str = "fk-accommodation-destination_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Accommodation::Table)
                    .if_not_exists()
                    .col(pk_auto(Accommodation::Id))
                    .col(string(Accommodation::Name))
                    .col(string_uniq(Accommodation::Slug))
                    .col(integer_null(Accommodation::DestinationId))
                    .col(text_null(Accommodation::Description))
                    .col(small_integer_null(Accommodation::Rating))
                    .col(json_null(Accommodation::Pricing))
                    .col(timestamp(Accommodation::CreatedAt))
                    .col(timestamp(Accommodation::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ACCOMMODATION_DESTINATION_ID)
                            .from(Accommodation::Table, Accommodation::DestinationId)
                            .to(Destination::Table, Destination::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ACCOMMODATION_DESTINATION_ID)
                    .table(Accommodation::Table)
                    .col(Accommodation::DestinationId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ACCOMMODATION_DESTINATION_ID)
                    .table(Accommodation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Accommodation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Accommodation {
    Table,
    Id,
    Name,
    Slug,
    DestinationId,
    Description,
    Rating,
    Pricing,
    CreatedAt,
    UpdatedAt,
}
