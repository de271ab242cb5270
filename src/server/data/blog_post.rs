use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::{
    data::{fetch_page, Page, PageRequest},
    util::time::now,
};

/// Editable columns of a blog post
#[derive(Clone, Debug)]
pub struct BlogPostFields {
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub body: String,
    pub author: Option<String>,
    pub published: bool,
}

pub struct BlogPostRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BlogPostRepository<'a, C> {
    /// Creates a new instance of [`BlogPostRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a post, stamping `published_at` if it is created already published
    pub async fn create(&self, fields: BlogPostFields) -> Result<entity::blog_post::Model, DbErr> {
        let now = now();
        let post = entity::blog_post::ActiveModel {
            title: ActiveValue::Set(fields.title),
            slug: ActiveValue::Set(fields.slug),
            excerpt: ActiveValue::Set(fields.excerpt),
            body: ActiveValue::Set(fields.body),
            author: ActiveValue::Set(fields.author),
            published: ActiveValue::Set(fields.published),
            published_at: ActiveValue::Set(fields.published.then_some(now)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        post.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::blog_post::Model>, DbErr> {
        entity::prelude::BlogPost::find_by_id(id).one(self.db).await
    }

    pub async fn get_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<entity::blog_post::Model>, DbErr> {
        entity::prelude::BlogPost::find()
            .filter(entity::blog_post::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// Whether a post other than `exclude_id` already uses `slug`
    pub async fn slug_exists(&self, slug: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::BlogPost::find().filter(entity::blog_post::Column::Slug.eq(slug));

        if let Some(id) = exclude_id {
            query = query.filter(entity::blog_post::Column::Id.ne(id));
        }

        Ok(query.one(self.db).await?.is_some())
    }

    /// Lists posts, most recently published first, drafts last
    pub async fn list(
        &self,
        include_drafts: bool,
        page: PageRequest,
    ) -> Result<Page<entity::blog_post::Model>, DbErr> {
        let mut select = entity::prelude::BlogPost::find();

        if !include_drafts {
            select = select.filter(entity::blog_post::Column::Published.eq(true));
        }

        let select = select
            .order_by_desc(entity::blog_post::Column::Published)
            .order_by_desc(entity::blog_post::Column::PublishedAt)
            .order_by_desc(entity::blog_post::Column::CreatedAt)
            .order_by_desc(entity::blog_post::Column::Id);

        fetch_page(self.db, select, page).await
    }

    /// Replaces the editable columns of a post, returning `None` if it does not exist
    ///
    /// `published_at` is stamped the first time the post becomes published and kept
    /// afterwards, even if the post is later unpublished.
    pub async fn update(
        &self,
        id: i32,
        fields: BlogPostFields,
    ) -> Result<Option<entity::blog_post::Model>, DbErr> {
        let Some(post) = entity::prelude::BlogPost::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let now = now();
        let published_at = post.published_at.or(fields.published.then_some(now));

        let mut post_am = post.into_active_model();
        post_am.title = ActiveValue::Set(fields.title);
        post_am.slug = ActiveValue::Set(fields.slug);
        post_am.excerpt = ActiveValue::Set(fields.excerpt);
        post_am.body = ActiveValue::Set(fields.body);
        post_am.author = ActiveValue::Set(fields.author);
        post_am.published = ActiveValue::Set(fields.published);
        post_am.published_at = ActiveValue::Set(published_at);
        post_am.updated_at = ActiveValue::Set(now);

        let post = post_am.update(self.db).await?;

        Ok(Some(post))
    }

    /// Deletes a post
    ///
    /// Returns OK regardless of the post existing, to confirm the deletion result check the
    /// [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::BlogPost::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
