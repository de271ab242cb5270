use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000002_tour::Tour;

static IDX_QUOTE_STATUS: &str = "idx-quote-status";
static FK_QUOTE_TOUR_ID: &str = "fk-quote-tour_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Quote::Table)
                    .if_not_exists()
                    .col(pk_auto(Quote::Id))
                    .col(string(Quote::Name))
                    .col(string(Quote::Email))
                    .col(string_null(Quote::Phone))
                    .col(integer_null(Quote::TourId))
                    .col(date_null(Quote::TravelDate))
                    .col(integer(Quote::Travelers))
                    .col(text_null(Quote::Message))
                    .col(string(Quote::Status))
                    .col(timestamp(Quote::CreatedAt))
                    .col(timestamp(Quote::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_QUOTE_TOUR_ID)
                            .from(Quote::Table, Quote::TourId)
                            .to(Tour::Table, Tour::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_QUOTE_STATUS)
                    .table(Quote::Table)
                    .col(Quote::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_QUOTE_STATUS)
                    .table(Quote::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Quote::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Quote {
    Table,
    Id,
    Name,
    Email,
    Phone,
    TourId,
    TravelDate,
    Travelers,
    Message,
    Status,
    CreatedAt,
    UpdatedAt,
}
