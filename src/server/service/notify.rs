//! Email notifications sent through the configured provider's HTTP API.

use serde::Serialize;

use crate::server::{
    config::EmailConfig,
    error::{upstream::UpstreamError, Error},
};

const EMAIL_SERVICE: &str = "email provider";

/// JSON body accepted by the email provider.
#[derive(Debug, Serialize)]
struct EmailMessage<'a> {
    from: &'a str,
    to: &'a str,
    subject: String,
    text: String,
}

/// Sends notification emails to the agency.
#[derive(Clone, Debug)]
pub struct Mailer {
    client: reqwest::Client,
    config: EmailConfig,
}

impl Mailer {
    pub fn new(config: EmailConfig) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder().build()?;

        Ok(Self { client, config })
    }

    /// Tells the agency inbox about a newly stored quote request.
    ///
    /// # Arguments
    /// - `quote` - The stored quote
    /// - `tour_title` - Title of the requested tour, if the quote references one
    ///
    /// # Returns
    /// - `Ok(())` - The provider accepted the message
    /// - `Err(Error::UpstreamError)` - The request failed or the provider answered with a
    ///   non-success status
    pub async fn notify_quote(
        &self,
        quote: &entity::quote::Model,
        tour_title: Option<&str>,
    ) -> Result<(), Error> {
        let message = EmailMessage {
            from: &self.config.from,
            to: &self.config.notify_address,
            subject: format!("New quote request from {}", quote.name),
            text: quote_summary(quote, tour_title),
        };

        self.send(&message).await
    }

    async fn send(&self, message: &EmailMessage<'_>) -> Result<(), Error> {
        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(message)
            .send()
            .await
            .map_err(UpstreamError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                service: EMAIL_SERVICE.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        tracing::info!("Sent {:?} to {}", message.subject, message.to);

        Ok(())
    }
}

fn quote_summary(quote: &entity::quote::Model, tour_title: Option<&str>) -> String {
    let or_dash = |value: Option<&str>| value.unwrap_or("-").to_string();

    [
        format!("Name: {}", quote.name),
        format!("Email: {}", quote.email),
        format!("Phone: {}", or_dash(quote.phone.as_deref())),
        format!("Tour: {}", or_dash(tour_title)),
        format!(
            "Travel date: {}",
            quote
                .travel_date
                .map(|date| date.to_string())
                .unwrap_or_else(|| "-".to_string())
        ),
        format!("Travelers: {}", quote.travelers),
        String::new(),
        or_dash(quote.message.as_deref()),
    ]
    .join("\n")
}
