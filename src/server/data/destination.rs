use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::{
    data::{fetch_page, Page, PageRequest},
    util::time::now,
};

/// Editable columns of a destination
#[derive(Clone, Debug)]
pub struct DestinationFields {
    pub name: String,
    pub slug: String,
    pub country: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub hero_image: Option<String>,
}

pub struct DestinationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DestinationRepository<'a, C> {
    /// Creates a new instance of [`DestinationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        fields: DestinationFields,
    ) -> Result<entity::destination::Model, DbErr> {
        let now = now();
        let destination = entity::destination::ActiveModel {
            name: ActiveValue::Set(fields.name),
            slug: ActiveValue::Set(fields.slug),
            country: ActiveValue::Set(fields.country),
            summary: ActiveValue::Set(fields.summary),
            description: ActiveValue::Set(fields.description),
            hero_image: ActiveValue::Set(fields.hero_image),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        destination.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::destination::Model>, DbErr> {
        entity::prelude::Destination::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn get_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<entity::destination::Model>, DbErr> {
        entity::prelude::Destination::find()
            .filter(entity::destination::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// Whether a destination other than `exclude_id` already uses `slug`
    pub async fn slug_exists(&self, slug: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Destination::find().filter(entity::destination::Column::Slug.eq(slug));

        if let Some(id) = exclude_id {
            query = query.filter(entity::destination::Column::Id.ne(id));
        }

        Ok(query.one(self.db).await?.is_some())
    }

    /// Lists destinations alphabetically by name
    pub async fn list(&self, page: PageRequest) -> Result<Page<entity::destination::Model>, DbErr> {
        let select = entity::prelude::Destination::find()
            .order_by_asc(entity::destination::Column::Name)
            .order_by_asc(entity::destination::Column::Id);

        fetch_page(self.db, select, page).await
    }

    /// Replaces the editable columns of a destination, returning `None` if it does not exist
    pub async fn update(
        &self,
        id: i32,
        fields: DestinationFields,
    ) -> Result<Option<entity::destination::Model>, DbErr> {
        let Some(destination) = entity::prelude::Destination::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut destination_am = destination.into_active_model();
        destination_am.name = ActiveValue::Set(fields.name);
        destination_am.slug = ActiveValue::Set(fields.slug);
        destination_am.country = ActiveValue::Set(fields.country);
        destination_am.summary = ActiveValue::Set(fields.summary);
        destination_am.description = ActiveValue::Set(fields.description);
        destination_am.hero_image = ActiveValue::Set(fields.hero_image);
        destination_am.updated_at = ActiveValue::Set(now());

        let destination = destination_am.update(self.db).await?;

        Ok(Some(destination))
    }

    /// Deletes a destination
    ///
    /// Returns OK regardless of the destination existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Destination::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
