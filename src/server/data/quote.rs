use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::{
    model::quote::QuoteStatus,
    server::{
        data::{fetch_page, Page, PageRequest},
        util::time::now,
    },
};

/// Columns of a new quote request
#[derive(Clone, Debug)]
pub struct QuoteFields {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub tour_id: Option<i32>,
    pub travel_date: Option<NaiveDate>,
    pub travelers: i32,
    pub message: Option<String>,
}

pub struct QuoteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> QuoteRepository<'a, C> {
    /// Creates a new instance of [`QuoteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores a new quote request with status `new`
    pub async fn create(&self, fields: QuoteFields) -> Result<entity::quote::Model, DbErr> {
        let now = now();
        let quote = entity::quote::ActiveModel {
            name: ActiveValue::Set(fields.name),
            email: ActiveValue::Set(fields.email),
            phone: ActiveValue::Set(fields.phone),
            tour_id: ActiveValue::Set(fields.tour_id),
            travel_date: ActiveValue::Set(fields.travel_date),
            travelers: ActiveValue::Set(fields.travelers),
            message: ActiveValue::Set(fields.message),
            status: ActiveValue::Set(QuoteStatus::New.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        quote.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::quote::Model>, DbErr> {
        entity::prelude::Quote::find_by_id(id).one(self.db).await
    }

    /// Lists quote requests newest first
    pub async fn list(&self, page: PageRequest) -> Result<Page<entity::quote::Model>, DbErr> {
        let select = entity::prelude::Quote::find()
            .order_by_desc(entity::quote::Column::CreatedAt)
            .order_by_desc(entity::quote::Column::Id);

        fetch_page(self.db, select, page).await
    }

    pub async fn update_status(
        &self,
        id: i32,
        status: QuoteStatus,
    ) -> Result<Option<entity::quote::Model>, DbErr> {
        let Some(quote) = entity::prelude::Quote::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut quote_am = quote.into_active_model();
        quote_am.status = ActiveValue::Set(status.as_str().to_string());
        quote_am.updated_at = ActiveValue::Set(now());

        let quote = quote_am.update(self.db).await?;

        Ok(Some(quote))
    }

    /// Deletes a quote request
    ///
    /// Returns OK regardless of the quote existing, to confirm the deletion result check the
    /// [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Quote::delete_by_id(id).exec(self.db).await
    }
}
