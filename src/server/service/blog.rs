use crate::{
    model::{
        api::{PageDto, PaginationParams},
        blog::{BlogFilter, BlogPostDto, BlogPostInput},
    },
    server::{
        data::blog_post::{BlogPostFields, BlogPostRepository},
        error::Error,
        model::{app::AppState, db::BlogPostModel},
        service::{page_dto, page_request},
        util::{slug::slugify, validate},
    },
};

pub struct BlogService<'a> {
    state: &'a AppState,
}

impl<'a> BlogService<'a> {
    /// Creates a new instance of [`BlogService`]
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    pub async fn create(&self, input: BlogPostInput) -> Result<BlogPostDto, Error> {
        let fields = validate_input(input)?;
        let repo = BlogPostRepository::new(&self.state.db);
        let repo = &repo;

        let post = self
            .state
            .slugs
            .write_unique(
                &fields.title,
                |candidate| async move {
                    repo.slug_exists(&candidate, None)
                        .await
                        .map_err(Error::from)
                },
                |slug| {
                    let fields = BlogPostFields {
                        slug,
                        ..fields.clone()
                    };
                    async move { repo.create(fields).await }
                },
            )
            .await?;

        tracing::info!("Created blog post {} ({})", post.id, post.slug);

        Ok(blog_post_dto(post))
    }

    pub async fn get(&self, id: i32) -> Result<Option<BlogPostDto>, Error> {
        let post = BlogPostRepository::new(&self.state.db).get_by_id(id).await?;

        Ok(post.map(blog_post_dto))
    }

    /// Looks a post up by slug, consulting the slug cache first.
    ///
    /// Drafts are returned too so they can be previewed by their link.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<BlogPostDto>, Error> {
        let cache = &self.state.cache.posts;

        if let Some(post) = cache.get(&slug.to_string()) {
            return Ok(Some(blog_post_dto(post)));
        }

        let post = BlogPostRepository::new(&self.state.db)
            .get_by_slug(slug)
            .await?;
        if let Some(post) = &post {
            cache.set(post.slug.clone(), post.clone());
        }

        Ok(post.map(blog_post_dto))
    }

    /// Lists published posts, most recently published first; drafts only on request.
    pub async fn list(
        &self,
        filter: BlogFilter,
        params: PaginationParams,
    ) -> Result<PageDto<BlogPostDto>, Error> {
        let request = page_request(params)?;
        let page = BlogPostRepository::new(&self.state.db)
            .list(filter.include_drafts, request)
            .await?;

        Ok(page_dto(page, request, blog_post_dto))
    }

    pub async fn update(
        &self,
        id: i32,
        input: BlogPostInput,
    ) -> Result<Option<BlogPostDto>, Error> {
        let repo = BlogPostRepository::new(&self.state.db);
        let Some(existing) = repo.get_by_id(id).await? else {
            return Ok(None);
        };

        let fields = validate_input(input)?;
        let repo = &repo;

        let updated = if slugify(&fields.title) == slugify(&existing.title) {
            repo.update(
                id,
                BlogPostFields {
                    slug: existing.slug.clone(),
                    ..fields
                },
            )
            .await?
        } else {
            self.state
                .slugs
                .write_unique(
                    &fields.title,
                    |candidate| async move {
                        repo.slug_exists(&candidate, Some(id))
                            .await
                            .map_err(Error::from)
                    },
                    |slug| {
                        let fields = BlogPostFields {
                            slug,
                            ..fields.clone()
                        };
                        async move { repo.update(id, fields).await }
                    },
                )
                .await?
        };

        self.state.cache.posts.invalidate(&existing.slug);

        Ok(updated.map(blog_post_dto))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, Error> {
        let repo = BlogPostRepository::new(&self.state.db);
        let Some(existing) = repo.get_by_id(id).await? else {
            return Ok(false);
        };

        let result = repo.delete(id).await?;
        self.state.cache.posts.invalidate(&existing.slug);

        Ok(result.rows_affected > 0)
    }
}

fn validate_input(input: BlogPostInput) -> Result<BlogPostFields, Error> {
    Ok(BlogPostFields {
        title: validate::required("title", input.title)?,
        slug: String::new(),
        excerpt: validate::optional(input.excerpt),
        body: validate::required("body", input.body)?,
        author: validate::optional(input.author),
        published: input.published,
    })
}

fn blog_post_dto(post: BlogPostModel) -> BlogPostDto {
    BlogPostDto {
        id: post.id,
        title: post.title,
        slug: post.slug,
        excerpt: post.excerpt,
        body: post.body,
        author: post.author,
        published: post.published,
        published_at: post.published_at,
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}
