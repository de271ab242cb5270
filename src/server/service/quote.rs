use crate::{
    model::{
        api::{PageDto, PaginationParams},
        quote::{QuoteDto, QuoteInput, QuoteStatus},
    },
    server::{
        data::{
            quote::{QuoteFields, QuoteRepository},
            tour::TourRepository,
        },
        error::{config::ConfigError, content::ContentError, Error},
        model::{app::AppState, db::QuoteModel},
        service::{page_dto, page_request},
        util::validate,
    },
};

pub struct QuoteService<'a> {
    state: &'a AppState,
}

impl<'a> QuoteService<'a> {
    /// Creates a new instance of [`QuoteService`]
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Stores a quote request and notifies the agency by email.
    ///
    /// The quote is stored before the notification is attempted and stays stored if the
    /// notification fails.
    ///
    /// # Returns
    /// - `Ok(QuoteDto)` - The stored quote, agency notified
    /// - `Err(Error::ContentError)` - Invalid input or unknown tour, nothing stored
    /// - `Err(Error::ConfigError)` - Quote stored, but email settings are missing
    /// - `Err(Error::UpstreamError)` - Quote stored, but the email provider failed
    pub async fn create(&self, input: QuoteInput) -> Result<QuoteDto, Error> {
        let fields = validate_input(input)?;

        let tour = match fields.tour_id {
            Some(tour_id) => Some(
                TourRepository::new(&self.state.db)
                    .get_by_id(tour_id)
                    .await?
                    .ok_or_else(|| {
                        ContentError::Validation(format!(
                            "tour_id {tour_id} does not reference a tour"
                        ))
                    })?,
            ),
            None => None,
        };

        let quote = QuoteRepository::new(&self.state.db).create(fields).await?;
        tracing::info!("Stored quote request {} from {}", quote.id, quote.email);

        let Some(mailer) = &self.state.mailer else {
            tracing::warn!(
                "Quote request {} stored but not sent: email provider not configured",
                quote.id
            );
            return Err(ConfigError::MissingEnvVar("EMAIL_API_URL".to_string()).into());
        };

        mailer
            .notify_quote(&quote, tour.as_ref().map(|tour| tour.title.as_str()))
            .await?;

        quote_dto(quote)
    }

    pub async fn get(&self, id: i32) -> Result<Option<QuoteDto>, Error> {
        QuoteRepository::new(&self.state.db)
            .get_by_id(id)
            .await?
            .map(quote_dto)
            .transpose()
    }

    /// Lists quote requests newest first.
    pub async fn list(&self, params: PaginationParams) -> Result<PageDto<QuoteDto>, Error> {
        let request = page_request(params)?;
        let page = QuoteRepository::new(&self.state.db).list(request).await?;

        let page = page.try_map(quote_dto)?;

        Ok(page_dto(page, request, |quote| quote))
    }

    pub async fn update_status(
        &self,
        id: i32,
        status: QuoteStatus,
    ) -> Result<Option<QuoteDto>, Error> {
        let quote = QuoteRepository::new(&self.state.db)
            .update_status(id, status)
            .await?;

        if quote.is_some() {
            tracing::info!("Quote request {} marked {}", id, status.as_str());
        }

        quote.map(quote_dto).transpose()
    }

    pub async fn delete(&self, id: i32) -> Result<bool, Error> {
        let result = QuoteRepository::new(&self.state.db).delete(id).await?;

        Ok(result.rows_affected > 0)
    }
}

fn validate_input(input: QuoteInput) -> Result<QuoteFields, ContentError> {
    let travelers = validate::in_range("travelers", input.travelers.unwrap_or(1), 1, 100)?;

    Ok(QuoteFields {
        name: validate::required("name", input.name)?,
        email: validate::email("email", input.email)?,
        phone: validate::optional(input.phone),
        tour_id: input.tour_id,
        travel_date: input.travel_date,
        travelers,
        message: validate::optional(input.message),
    })
}

fn quote_dto(quote: QuoteModel) -> Result<QuoteDto, Error> {
    let status = QuoteStatus::parse(&quote.status)
        .ok_or_else(|| Error::ParseError(format!("quote status {:?}", quote.status)))?;

    Ok(QuoteDto {
        id: quote.id,
        name: quote.name,
        email: quote.email,
        phone: quote.phone,
        tour_id: quote.tour_id,
        travel_date: quote.travel_date,
        travelers: quote.travelers,
        message: quote.message,
        status,
        created_at: quote.created_at,
        updated_at: quote.updated_at,
    })
}
