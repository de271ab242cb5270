use chrono::NaiveDate;

use crate::{
    model::{
        accommodation::{AccommodationDto, AccommodationFilter, AccommodationInput},
        api::{PageDto, PaginationParams},
    },
    server::{
        data::accommodation::{AccommodationFields, AccommodationRepository},
        error::Error,
        model::{app::AppState, db::AccommodationModel},
        pricing::{
            price::{pricing_from_json, seasonal_price},
            season::SeasonCalendar,
        },
        service::{page_dto, page_request, tour::ensure_destination_exists},
        util::{slug::slugify, time::today, validate},
    },
};

pub struct AccommodationService<'a> {
    state: &'a AppState,
}

impl<'a> AccommodationService<'a> {
    /// Creates a new instance of [`AccommodationService`]
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    pub async fn create(&self, input: AccommodationInput) -> Result<AccommodationDto, Error> {
        let fields = self.validate(input).await?;
        let repo = AccommodationRepository::new(&self.state.db);
        let repo = &repo;

        let accommodation = self
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
                    let fields = AccommodationFields {
                        slug,
                        ..fields.clone()
                    };
                    async move { repo.create(fields).await }
                },
            )
            .await?;

        tracing::info!(
            "Created accommodation {} ({})",
            accommodation.id,
            accommodation.slug
        );

        Ok(self.to_dto(accommodation))
    }

    pub async fn get(&self, id: i32) -> Result<Option<AccommodationDto>, Error> {
        let accommodation = AccommodationRepository::new(&self.state.db)
            .get_by_id(id)
            .await?;

        Ok(accommodation.map(|accommodation| self.to_dto(accommodation)))
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<AccommodationDto>, Error> {
        let cache = &self.state.cache.accommodations;

        if let Some(accommodation) = cache.get(&slug.to_string()) {
            return Ok(Some(self.to_dto(accommodation)));
        }

        let accommodation = AccommodationRepository::new(&self.state.db)
            .get_by_slug(slug)
            .await?;
        if let Some(accommodation) = &accommodation {
            cache.set(accommodation.slug.clone(), accommodation.clone());
        }

        Ok(accommodation.map(|accommodation| self.to_dto(accommodation)))
    }

    pub async fn list(
        &self,
        filter: AccommodationFilter,
        params: PaginationParams,
    ) -> Result<PageDto<AccommodationDto>, Error> {
        let request = page_request(params)?;
        let page = AccommodationRepository::new(&self.state.db)
            .list(filter, request)
            .await?;

        Ok(page_dto(page, request, |accommodation| {
            self.to_dto(accommodation)
        }))
    }

    pub async fn update(
        &self,
        id: i32,
        input: AccommodationInput,
    ) -> Result<Option<AccommodationDto>, Error> {
        let repo = AccommodationRepository::new(&self.state.db);
        let Some(existing) = repo.get_by_id(id).await? else {
            return Ok(None);
        };

        let fields = self.validate(input).await?;
        let repo = &repo;

        let updated = if slugify(&fields.name) == slugify(&existing.name) {
            repo.update(
                id,
                AccommodationFields {
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
                        let fields = AccommodationFields {
                            slug,
                            ..fields.clone()
                        };
                        async move { repo.update(id, fields).await }
                    },
                )
                .await?
        };

        self.state.cache.accommodations.invalidate(&existing.slug);

        Ok(updated.map(|accommodation| self.to_dto(accommodation)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, Error> {
        let repo = AccommodationRepository::new(&self.state.db);
        let Some(existing) = repo.get_by_id(id).await? else {
            return Ok(false);
        };

        let result = repo.delete(id).await?;
        self.state.cache.accommodations.invalidate(&existing.slug);

        Ok(result.rows_affected > 0)
    }

    async fn validate(&self, input: AccommodationInput) -> Result<AccommodationFields, Error> {
        let name = validate::required("name", input.name)?;
        let rating = input
            .rating
            .map(|rating| validate::in_range("rating", rating, 1, 5))
            .transpose()?;
        let pricing = validate::pricing(input.pricing)?;

        if let Some(destination_id) = input.destination_id {
            ensure_destination_exists(self.state, destination_id).await?;
        }

        Ok(AccommodationFields {
            name,
            slug: String::new(),
            destination_id: input.destination_id,
            description: validate::optional(input.description),
            rating,
            pricing,
        })
    }

    fn to_dto(&self, accommodation: AccommodationModel) -> AccommodationDto {
        accommodation_dto(accommodation, &self.state.seasons, today())
    }
}

pub fn accommodation_dto(
    accommodation: AccommodationModel,
    calendar: &SeasonCalendar,
    date: NaiveDate,
) -> AccommodationDto {
    let pricing = accommodation.pricing.as_ref().and_then(pricing_from_json);
    let display_price = seasonal_price(pricing.as_ref(), calendar, date);

    AccommodationDto {
        id: accommodation.id,
        name: accommodation.name,
        slug: accommodation.slug,
        destination_id: accommodation.destination_id,
        description: accommodation.description,
        rating: accommodation.rating,
        pricing,
        display_price,
        created_at: accommodation.created_at,
        updated_at: accommodation.updated_at,
    }
}
