use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{
    model::accommodation::AccommodationFilter,
    server::{
        data::{fetch_page, Page, PageRequest},
        util::time::now,
    },
};

/// Editable columns of an accommodation
#[derive(Clone, Debug)]
pub struct AccommodationFields {
    pub name: String,
    pub slug: String,
    pub destination_id: Option<i32>,
    pub description: Option<String>,
    pub rating: Option<i16>,
    pub pricing: Option<serde_json::Value>,
}

pub struct AccommodationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccommodationRepository<'a, C> {
    /// Creates a new instance of [`AccommodationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        fields: AccommodationFields,
    ) -> Result<entity::accommodation::Model, DbErr> {
        let now = now();
        let accommodation = entity::accommodation::ActiveModel {
            name: ActiveValue::Set(fields.name),
            slug: ActiveValue::Set(fields.slug),
            destination_id: ActiveValue::Set(fields.destination_id),
            description: ActiveValue::Set(fields.description),
            rating: ActiveValue::Set(fields.rating),
            pricing: ActiveValue::Set(fields.pricing),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        accommodation.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::accommodation::Model>, DbErr> {
        entity::prelude::Accommodation::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn get_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<entity::accommodation::Model>, DbErr> {
        entity::prelude::Accommodation::find()
            .filter(entity::accommodation::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// Whether an accommodation other than `exclude_id` already uses `slug`
    pub async fn slug_exists(&self, slug: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Accommodation::find()
            .filter(entity::accommodation::Column::Slug.eq(slug));

        if let Some(id) = exclude_id {
            query = query.filter(entity::accommodation::Column::Id.ne(id));
        }

        Ok(query.one(self.db).await?.is_some())
    }

    /// Lists accommodations newest first, optionally limited to one destination
    pub async fn list(
        &self,
        filter: AccommodationFilter,
        page: PageRequest,
    ) -> Result<Page<entity::accommodation::Model>, DbErr> {
        let mut select = entity::prelude::Accommodation::find();

        if let Some(destination_id) = filter.destination_id {
            select = select.filter(entity::accommodation::Column::DestinationId.eq(destination_id));
        }

        let select = select
            .order_by_desc(entity::accommodation::Column::CreatedAt)
            .order_by_desc(entity::accommodation::Column::Id);

        fetch_page(self.db, select, page).await
    }

    /// Replaces the editable columns of an accommodation, returning `None` if it does not exist
    pub async fn update(
        &self,
        id: i32,
        fields: AccommodationFields,
    ) -> Result<Option<entity::accommodation::Model>, DbErr> {
        let Some(accommodation) = entity::prelude::Accommodation::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut accommodation_am = accommodation.into_active_model();
        accommodation_am.name = ActiveValue::Set(fields.name);
        accommodation_am.slug = ActiveValue::Set(fields.slug);
        accommodation_am.destination_id = ActiveValue::Set(fields.destination_id);
        accommodation_am.description = ActiveValue::Set(fields.description);
        accommodation_am.rating = ActiveValue::Set(fields.rating);
        accommodation_am.pricing = ActiveValue::Set(fields.pricing);
        accommodation_am.updated_at = ActiveValue::Set(now());

        let accommodation = accommodation_am.update(self.db).await?;

        Ok(Some(accommodation))
    }

    /// Deletes an accommodation
    ///
    /// Returns OK regardless of the accommodation existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Accommodation::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
