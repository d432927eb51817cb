//! Insights page: forecast headline and news filter

use rust_decimal::Decimal;

use crate::error::ModelError;
use crate::models::{ForecastDirection, ForecastOutlook, NewsItem, PricePrediction};
use crate::types::NewsCategory;

/// Summarise a forecast against today's price
///
/// The direction compares the last predicted price to `current_price`; the
/// confidence is that of the first step.
pub fn forecast_outlook(
    current_price: Decimal,
    predictions: &[PricePrediction],
) -> Result<ForecastOutlook, ModelError> {
    let (first, last) = match (predictions.first(), predictions.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(ModelError::EmptyForecast),
    };
    if current_price <= Decimal::ZERO {
        return Err(ModelError::NonPositivePrice(current_price));
    }

    let direction = if last.predicted > current_price {
        ForecastDirection::Increase
    } else {
        ForecastDirection::Decrease
    };
    let change_percent = ((last.predicted - current_price) / current_price * Decimal::ONE_HUNDRED)
        .abs()
        .round_dp(1);

    Ok(ForecastOutlook {
        direction,
        change_percent,
        confidence: first.confidence,
    })
}

/// News items in `category`, or every item when `None`
pub fn filter_news(items: &[NewsItem], category: Option<NewsCategory>) -> Vec<&NewsItem> {
    items
        .iter()
        .filter(|item| category.map_or(true, |c| item.category == c))
        .collect()
}
