use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000001_destination::Destination;

static IDX_TOUR_DESTINATION_ID: &str = "idx-tour-destination_id";
static FK_TOUR_DESTINATION_ID: &str = "fk-tour-destination_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tour::Table)
                    .if_not_exists()
                    .col(pk_auto(Tour::Id))
                    .col(string(Tour::Title))
                    .col(string_uniq(Tour::Slug))
                    .col(integer_null(Tour::DestinationId))
                    .col(text_null(Tour::Summary))
                    .col(text_null(Tour::Description))
                    .col(integer(Tour::DurationDays))
                    .col(json_null(Tour::Pricing))
                    .col(boolean(Tour::Featured))
                    .col(timestamp(Tour::CreatedAt))
                    .col(timestamp(Tour::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TOUR_DESTINATION_ID)
                            .from(Tour::Table, Tour::DestinationId)
                            .to(Destination::Table, Destination::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TOUR_DESTINATION_ID)
                    .table(Tour::Table)
                    .col(Tour::DestinationId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TOUR_DESTINATION_ID)
                    .table(Tour::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Tour::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Tour {
    Table,
    Id,
    Title,
    Slug,
    DestinationId,
    Summary,
    Description,
    DurationDays,
    Pricing,
    Featured,
    CreatedAt,
    UpdatedAt,
}
