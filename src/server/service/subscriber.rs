use crate::{
    model::{
        api::{PageDto, PaginationParams},
        subscriber::{SubscribeInput, SubscriberDto},
    },
    server::{
        data::subscriber::SubscriberRepository,
        error::{is_unique_violation, Error},
        model::{app::AppState, db::SubscriberModel},
        service::{page_dto, page_request},
        util::validate,
    },
};

/// Result of a subscribe request
#[derive(Debug)]
pub enum Subscription {
    Created(SubscriberDto),
    /// The address was already subscribed
    Existing(SubscriberDto),
}

pub struct SubscriberService<'a> {
    state: &'a AppState,
}

impl<'a> SubscriberService<'a> {
    /// Creates a new instance of [`SubscriberService`]
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Subscribes an email address, normalised to lowercase.
    ///
    /// Subscribing an address twice is not an error; the existing record is returned.
    pub async fn subscribe(&self, input: SubscribeInput) -> Result<Subscription, Error> {
        let email = validate::email("email", input.email)?.to_lowercase();
        let repo = SubscriberRepository::new(&self.state.db);

        if let Some(existing) = repo.get_by_email(&email).await? {
            return Ok(Subscription::Existing(subscriber_dto(existing)));
        }

        match repo.create(email.clone()).await {
            Ok(subscriber) => {
                tracing::info!("New newsletter subscriber {}", subscriber.id);
                Ok(Subscription::Created(subscriber_dto(subscriber)))
            }
            Err(err) if is_unique_violation(&err) => {
                // Subscribed concurrently between the lookup and the insert
                let existing = repo.get_by_email(&email).await?.ok_or_else(|| {
                    Error::InternalError(format!("subscriber {email:?} vanished after conflict"))
                })?;

                Ok(Subscription::Existing(subscriber_dto(existing)))
            }
            Err(err) => Err(err.into()),
        }
    }

    pub async fn list(&self, params: PaginationParams) -> Result<PageDto<SubscriberDto>, Error> {
        let request = page_request(params)?;
        let page = SubscriberRepository::new(&self.state.db)
            .list(request)
            .await?;

        Ok(page_dto(page, request, subscriber_dto))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, Error> {
        let result = SubscriberRepository::new(&self.state.db).delete(id).await?;

        Ok(result.rows_affected > 0)
    }
}

fn subscriber_dto(subscriber: SubscriberModel) -> SubscriberDto {
    SubscriberDto {
        id: subscriber.id,
        email: subscriber.email,
        created_at: subscriber.created_at,
    }
}
