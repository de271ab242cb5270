use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{
    model::tour::TourFilter,
    server::{
        data::{fetch_page, Page, PageRequest},
        util::time::now,
    },
};

/// Editable columns of a tour
#[derive(Clone, Debug)]
pub struct TourFields {
    pub title: String,
    pub slug: String,
    pub destination_id: Option<i32>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub duration_days: i32,
    pub pricing: Option<serde_json::Value>,
    pub featured: bool,
}

pub struct TourRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TourRepository<'a, C> {
    /// Creates a new instance of [`TourRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, fields: TourFields) -> Result<entity::tour::Model, DbErr> {
        let now = now();
        let tour = entity::tour::ActiveModel {
            title: ActiveValue::Set(fields.title),
            slug: ActiveValue::Set(fields.slug),
            destination_id: ActiveValue::Set(fields.destination_id),
            summary: ActiveValue::Set(fields.summary),
            description: ActiveValue::Set(fields.description),
            duration_days: ActiveValue::Set(fields.duration_days),
            pricing: ActiveValue::Set(fields.pricing),
            featured: ActiveValue::Set(fields.featured),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        tour.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::tour::Model>, DbErr> {
        entity::prelude::Tour::find_by_id(id).one(self.db).await
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<entity::tour::Model>, DbErr> {
        entity::prelude::Tour::find()
            .filter(entity::tour::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// Whether a tour other than `exclude_id` already uses `slug`
    pub async fn slug_exists(&self, slug: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Tour::find().filter(entity::tour::Column::Slug.eq(slug));

        if let Some(id) = exclude_id {
            query = query.filter(entity::tour::Column::Id.ne(id));
        }

        Ok(query.one(self.db).await?.is_some())
    }

    /// Lists tours newest first, narrowed by `filter`
    pub async fn list(
        &self,
        filter: TourFilter,
        page: PageRequest,
    ) -> Result<Page<entity::tour::Model>, DbErr> {
        let mut select = entity::prelude::Tour::find();

        if let Some(destination_id) = filter.destination_id {
            select = select.filter(entity::tour::Column::DestinationId.eq(destination_id));
        }
        if let Some(featured) = filter.featured {
            select = select.filter(entity::tour::Column::Featured.eq(featured));
        }

        let select = select
            .order_by_desc(entity::tour::Column::CreatedAt)
            .order_by_desc(entity::tour::Column::Id);

        fetch_page(self.db, select, page).await
    }

    /// Replaces the editable columns of a tour, returning `None` if it does not exist
    pub async fn update(
        &self,
        id: i32,
        fields: TourFields,
    ) -> Result<Option<entity::tour::Model>, DbErr> {
        let Some(tour) = entity::prelude::Tour::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut tour_am = tour.into_active_model();
        tour_am.title = ActiveValue::Set(fields.title);
        tour_am.slug = ActiveValue::Set(fields.slug);
        tour_am.destination_id = ActiveValue::Set(fields.destination_id);
        tour_am.summary = ActiveValue::Set(fields.summary);
        tour_am.description = ActiveValue::Set(fields.description);
        tour_am.duration_days = ActiveValue::Set(fields.duration_days);
        tour_am.pricing = ActiveValue::Set(fields.pricing);
        tour_am.featured = ActiveValue::Set(fields.featured);
        tour_am.updated_at = ActiveValue::Set(now());

        let tour = tour_am.update(self.db).await?;

        Ok(Some(tour))
    }

    /// Deletes a tour
    ///
    /// Returns OK regardless of the tour existing, to confirm the deletion result check the
    /// [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Tour::delete_by_id(id).exec(self.db).await
    }
}
