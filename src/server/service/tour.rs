use chrono::NaiveDate;

use crate::{
    model::{
        api::{PageDto, PaginationParams},
        tour::{TourDto, TourFilter, TourInput},
    },
    server::{
        data::{
            destination::DestinationRepository,
            tour::{TourFields, TourRepository},
        },
        error::{content::ContentError, Error},
        model::{app::AppState, db::TourModel},
        pricing::{
            price::{pricing_from_json, seasonal_price},
            season::SeasonCalendar,
        },
        service::{page_dto, page_request},
        util::{slug::slugify, time::today, validate},
    },
};

pub struct TourService<'a> {
    state: &'a AppState,
}

impl<'a> TourService<'a> {
    /// Creates a new instance of [`TourService`]
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Validates `input` and stores a new tour under a freshly resolved slug.
    ///
    /// # Returns
    /// - `Ok(TourDto)` - The created tour
    /// - `Err(Error::ContentError)` - Invalid input, unknown destination or no free slug
    /// - `Err(Error::DbErr)` - Database failure
    pub async fn create(&self, input: TourInput) -> Result<TourDto, Error> {
        let fields = self.validate(input).await?;
        let repo = TourRepository::new(&self.state.db);
        let repo = &repo;

        let tour = self
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
                    let fields = TourFields {
                        slug,
                        ..fields.clone()
                    };
                    async move { repo.create(fields).await }
                },
            )
            .await?;

        tracing::info!("Created tour {} ({})", tour.id, tour.slug);

        Ok(self.to_dto(tour))
    }

    pub async fn get(&self, id: i32) -> Result<Option<TourDto>, Error> {
        let tour = TourRepository::new(&self.state.db).get_by_id(id).await?;

        Ok(tour.map(|tour| self.to_dto(tour)))
    }

    /// Looks a tour up by slug, consulting the slug cache first.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<TourDto>, Error> {
        let cache = &self.state.cache.tours;

        if let Some(tour) = cache.get(&slug.to_string()) {
            return Ok(Some(self.to_dto(tour)));
        }

        let tour = TourRepository::new(&self.state.db).get_by_slug(slug).await?;
        if let Some(tour) = &tour {
            cache.set(tour.slug.clone(), tour.clone());
        }

        Ok(tour.map(|tour| self.to_dto(tour)))
    }

    pub async fn list(
        &self,
        filter: TourFilter,
        params: PaginationParams,
    ) -> Result<PageDto<TourDto>, Error> {
        let request = page_request(params)?;
        let page = TourRepository::new(&self.state.db)
            .list(filter, request)
            .await?;

        Ok(page_dto(page, request, |tour| self.to_dto(tour)))
    }

    /// Replaces the editable fields of a tour.
    ///
    /// The slug is only regenerated when the new title slugifies differently from the old
    /// one, so links keep working across cosmetic title edits.
    ///
    /// # Returns
    /// - `Ok(Some(TourDto))` - The updated tour
    /// - `Ok(None)` - No tour with `id` exists
    /// - `Err(Error::ContentError)` - Invalid input, unknown destination or no free slug
    pub async fn update(&self, id: i32, input: TourInput) -> Result<Option<TourDto>, Error> {
        let repo = TourRepository::new(&self.state.db);
        let Some(existing) = repo.get_by_id(id).await? else {
            return Ok(None);
        };

        let fields = self.validate(input).await?;
        let repo = &repo;

        let updated = if slugify(&fields.title) == slugify(&existing.title) {
            repo.update(
                id,
                TourFields {
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
                        let fields = TourFields {
                            slug,
                            ..fields.clone()
                        };
                        async move { repo.update(id, fields).await }
                    },
                )
                .await?
        };

        self.state.cache.tours.invalidate(&existing.slug);

        Ok(updated.map(|tour| self.to_dto(tour)))
    }

    /// Deletes a tour, returning whether it existed.
    pub async fn delete(&self, id: i32) -> Result<bool, Error> {
        let repo = TourRepository::new(&self.state.db);
        let Some(existing) = repo.get_by_id(id).await? else {
            return Ok(false);
        };

        let result = repo.delete(id).await?;
        self.state.cache.tours.invalidate(&existing.slug);

        Ok(result.rows_affected > 0)
    }

    async fn validate(&self, input: TourInput) -> Result<TourFields, Error> {
        let title = validate::required("title", input.title)?;
        let duration_days = validate::in_range(
            "duration_days",
            validate::present("duration_days", input.duration_days)?,
            1,
            365,
        )?;
        let pricing = validate::pricing(input.pricing)?;

        if let Some(destination_id) = input.destination_id {
            ensure_destination_exists(self.state, destination_id).await?;
        }

        Ok(TourFields {
            title,
            slug: String::new(),
            destination_id: input.destination_id,
            summary: validate::optional(input.summary),
            description: validate::optional(input.description),
            duration_days,
            pricing,
            featured: input.featured,
        })
    }

    fn to_dto(&self, tour: TourModel) -> TourDto {
        tour_dto(tour, &self.state.seasons, today())
    }
}

/// Fails with a validation error when `destination_id` does not reference a destination.
pub(crate) async fn ensure_destination_exists(
    state: &AppState,
    destination_id: i32,
) -> Result<(), Error> {
    let destination = DestinationRepository::new(&state.db)
        .get_by_id(destination_id)
        .await?;

    match destination {
        Some(_) => Ok(()),
        None => Err(ContentError::Validation(format!(
            "destination_id {destination_id} does not reference a destination"
        ))
        .into()),
    }
}

/// Builds the response for a tour, pricing it for the season `calendar` assigns to `date`.
pub fn tour_dto(tour: TourModel, calendar: &SeasonCalendar, date: NaiveDate) -> TourDto {
    let pricing = tour.pricing.as_ref().and_then(pricing_from_json);
    let display_price = seasonal_price(pricing.as_ref(), calendar, date);

    TourDto {
        id: tour.id,
        title: tour.title,
        slug: tour.slug,
        destination_id: tour.destination_id,
        summary: tour.summary,
        description: tour.description,
        duration_days: tour.duration_days,
        pricing,
        display_price,
        featured: tour.featured,
        created_at: tour.created_at,
        updated_at: tour.updated_at,
    }
}
