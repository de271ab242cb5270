//! Display price selection.

use chrono::NaiveDate;

use crate::{
    model::pricing::{CostValue, PricingRecord},
    server::{
        pricing::season::{Season, SeasonCalendar},
        util::time::today,
    },
};

/// Shown whenever no usable price exists for the current season.
pub static PRICE_UNAVAILABLE: &str = "Price Unavailable";

/// Interprets a stored pricing JSON column.
///
/// Returns `None` when the value does not have the [`PricingRecord`] shape, which
/// callers treat the same as a record with no pricing at all.
pub fn pricing_from_json(value: &serde_json::Value) -> Option<PricingRecord> {
    serde_json::from_value(value.clone()).ok()
}

/// Formats today's "from" price of `pricing` using the default season calendar.
pub fn get_seasonal_price(pricing: Option<&PricingRecord>) -> String {
    seasonal_price(pricing, &SeasonCalendar::default(), today())
}

/// Formats the "from" price of `pricing` for the season `calendar` assigns to `date`.
pub fn seasonal_price(
    pricing: Option<&PricingRecord>,
    calendar: &SeasonCalendar,
    date: NaiveDate,
) -> String {
    price_for_season(pricing, calendar.classify(date))
}

/// Formats the first cost listed for `season`, or [`PRICE_UNAVAILABLE`].
pub fn price_for_season(pricing: Option<&PricingRecord>, season: Season) -> String {
    pricing
        .and_then(|pricing| pricing.manual.as_ref())
        .and_then(|manual| match season {
            Season::HighSeason => manual.high_season.as_ref(),
            Season::LowSeason => manual.low_season.as_ref(),
            Season::MidSeason => manual.mid_season.as_ref(),
        })
        .and_then(|costs| costs.costs.first())
        .and_then(|entry| entry.cost.as_ref())
        .and_then(cost_amount)
        .map(format_grouped)
        .unwrap_or_else(|| PRICE_UNAVAILABLE.to_string())
}

/// Numeric value of a cost, accepting numeric strings with optional grouping commas.
fn cost_amount(cost: &CostValue) -> Option<f64> {
    let amount = match cost {
        CostValue::Number(amount) => *amount,
        CostValue::Text(text) => text.trim().replace(',', "").parse::<f64>().ok()?,
    };

    amount.is_finite().then_some(amount)
}

/// Formats a number with en-US digit grouping and at most three fraction digits.
///
/// `1200.0` becomes `"1,200"` and `1234.5` becomes `"1,234.5"`.
pub fn format_grouped(amount: f64) -> String {
    let rounded = format!("{:.3}", amount.abs());
    let (whole, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3 + fraction.len() + 2);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if !fraction.is_empty() {
        grouped.push('.');
        grouped.push_str(fraction);
    }

    if amount.is_sign_negative() && grouped.chars().any(|c| matches!(c, '1'..='9')) {
        grouped.insert(0, '-');
    }

    grouped
}
