use crate::{
    model::{
        api::{PageDto, PaginationParams},
        destination::{DestinationDto, DestinationInput},
    },
    server::{
        data::destination::{DestinationFields, DestinationRepository},
        error::Error,
        model::{app::AppState, db::DestinationModel},
        service::{page_dto, page_request},
        util::{slug::slugify, validate},
    },
};

pub struct DestinationService<'a> {
    state: &'a AppState,
}

impl<'a> DestinationService<'a> {
    /// Creates a new instance of [`DestinationService`]
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    pub async fn create(&self, input: DestinationInput) -> Result<DestinationDto, Error> {
        let fields = validate_input(input)?;
        let repo = DestinationRepository::new(&self.state.db);
        let repo = &repo;

        let destination = self
            .state
            .slugs
            .write_unique(
                &fields.name,
                |candidate| async move {
                    repo.slug_exists(&candidate, None)
                        .await
                        .map_err(Error::from)
                },
                |slug| {
                    let fields = DestinationFields {
                        slug,
                        ..fields.clone()
                    };
                    async move { repo.create(fields).await }
                },
            )
            .await?;

        tracing::info!(
            "Created destination {} ({})",
            destination.id,
            destination.slug
        );

        Ok(destination_dto(destination))
    }

    pub async fn get(&self, id: i32) -> Result<Option<DestinationDto>, Error> {
        let destination = DestinationRepository::new(&self.state.db)
            .get_by_id(id)
            .await?;

        Ok(destination.map(destination_dto))
    }

    /// Looks a destination up by slug, consulting the slug cache first.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<DestinationDto>, Error> {
        let cache = &self.state.cache.destinations;

        if let Some(destination) = cache.get(&slug.to_string()) {
            return Ok(Some(destination_dto(destination)));
        }

        let destination = DestinationRepository::new(&self.state.db)
            .get_by_slug(slug)
            .await?;
        if let Some(destination) = &destination {
            cache.set(destination.slug.clone(), destination.clone());
        }

        Ok(destination.map(destination_dto))
    }

    /// Lists destinations alphabetically.
    pub async fn list(&self, params: PaginationParams) -> Result<PageDto<DestinationDto>, Error> {
        let request = page_request(params)?;
        let page = DestinationRepository::new(&self.state.db)
            .list(request)
            .await?;

        Ok(page_dto(page, request, destination_dto))
    }

    /// Replaces the editable fields of a destination, regenerating the slug on rename.
    pub async fn update(
        &self,
        id: i32,
        input: DestinationInput,
    ) -> Result<Option<DestinationDto>, Error> {
        let repo = DestinationRepository::new(&self.state.db);
        let Some(existing) = repo.get_by_id(id).await? else {
            return Ok(None);
        };

        let fields = validate_input(input)?;
        let repo = &repo;

        let updated = if slugify(&fields.name) == slugify(&existing.name) {
            repo.update(
                id,
                DestinationFields {
                    slug: existing.slug.clone(),
                    ..fields
                },
            )
            .await?
        } else {
            self.state
                .slugs
                .write_unique(
                    &fields.name,
                    |candidate| async move {
                        repo.slug_exists(&candidate, Some(id))
                            .await
                            .map_err(Error::from)
                    },
                    |slug| {
                        let fields = DestinationFields {
                            slug,
                            ..fields.clone()
                        };
                        async move { repo.update(id, fields).await }
                    },
                )
                .await?
        };

        self.state.cache.destinations.invalidate(&existing.slug);

        Ok(updated.map(destination_dto))
    }

    /// Deletes a destination, returning whether it existed.
    ///
    /// Tours and accommodations in the destination are kept with their `destination_id`
    /// cleared, so their cached copies are dropped as well.
    pub async fn delete(&self, id: i32) -> Result<bool, Error> {
        let repo = DestinationRepository::new(&self.state.db);
        let Some(existing) = repo.get_by_id(id).await? else {
            return Ok(false);
        };

        let result = repo.delete(id).await?;

        let cache = &self.state.cache;
        cache.destinations.invalidate(&existing.slug);
        cache.tours.clear();
        cache.accommodations.clear();

        Ok(result.rows_affected > 0)
    }
}

fn validate_input(input: DestinationInput) -> Result<DestinationFields, Error> {
    Ok(DestinationFields {
        name: validate::required("name", input.name)?,
        slug: String::new(),
        country: validate::required("country", input.country)?,
        summary: validate::optional(input.summary),
        description: validate::optional(input.description),
        hero_image: validate::optional(input.hero_image),
    })
}

fn destination_dto(destination: DestinationModel) -> DestinationDto {
    DestinationDto {
        id: destination.id,
        name: destination.name,
        slug: destination.slug,
        country: destination.country,
        summary: destination.summary,
        description: destination.description,
        hero_image: destination.hero_image,
        created_at: destination.created_at,
        updated_at: destination.updated_at,
    }
}
