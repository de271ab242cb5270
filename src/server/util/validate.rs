//! Presence and shape checks for request bodies.
//!
//! Every failure is a [`ContentError::Validation`] naming the offending field, which the
//! error layer turns into a 400 response.

use crate::{
    model::{api::PaginationParams, pricing::PricingRecord},
    server::{data::PageRequest, error::content::ContentError},
};

/// Trimmed value of a required text field.
pub fn required(field: &str, value: Option<String>) -> Result<String, ContentError> {
    optional(value).ok_or_else(|| ContentError::Validation(format!("{field} is required")))
}

/// Value of a required non-text field.
pub fn present<T>(field: &str, value: Option<T>) -> Result<T, ContentError> {
    value.ok_or_else(|| ContentError::Validation(format!("{field} is required")))
}

/// Trimmed value of an optional text field, with blank text treated as absent.
pub fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Trimmed email address with text on both sides of a single `@`.
pub fn email(field: &str, value: Option<String>) -> Result<String, ContentError> {
    let email = required(field, value)?;

    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    };

    if valid {
        Ok(email)
    } else {
        Err(ContentError::Validation(format!(
            "{field} must be a valid email address"
        )))
    }
}

/// Checks that an integer field lies within `min..=max`.
pub fn in_range<T>(field: &str, value: T, min: T, max: T) -> Result<T, ContentError>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    if value < min || value > max {
        return Err(ContentError::Validation(format!(
            "{field} must be between {min} and {max}"
        )));
    }

    Ok(value)
}

/// Checks that a pricing table has the [`PricingRecord`] shape.
///
/// JSON `null` is treated as no pricing.
pub fn pricing(value: Option<serde_json::Value>) -> Result<Option<serde_json::Value>, ContentError> {
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(value) => match serde_json::from_value::<PricingRecord>(value.clone()) {
            Ok(_) => Ok(Some(value)),
            Err(e) => Err(ContentError::Validation(format!("pricing is malformed: {e}"))),
        },
    }
}

/// Converts 1-based page parameters into a 0-based page request.
pub fn page(params: PaginationParams) -> Result<PageRequest, ContentError> {
    let page = params.page.unwrap_or(1);
    let per_page = params.per_page.unwrap_or(PaginationParams::DEFAULT_PER_PAGE);

    if page == 0 {
        return Err(ContentError::Validation("page starts at 1".to_string()));
    }
    in_range("per_page", per_page, 1, PaginationParams::MAX_PER_PAGE)?;

    let index = page - 1;
    // OFFSET is a signed 64-bit integer in Postgres
    let offset = index
        .checked_mul(per_page)
        .filter(|offset| *offset <= i64::MAX as u64);
    if offset.is_none() {
        return Err(ContentError::Validation(format!(
            "page {page} is out of range"
        )));
    }

    Ok(PageRequest { index, per_page })
}
