use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use crate::error::AppResult;
use crate::pricing::{compute_price, PriceBreakdown};
use crate::utils::geo::haversine_distance;
use crate::utils::money::{format_meters, format_minor_units};
use crate::utils::validation::{DeliveryPriceParams, DeliveryRequest};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct DeliveryPriceResponse {
    #[serde(flatten)]
    pub breakdown: PriceBreakdown,
    pub formatted: FormattedBreakdown,
}

/// Display strings for each line of the breakdown
#[derive(Debug, Serialize)]
pub struct FormattedBreakdown {
    pub cart_value: String,
    pub small_order_surcharge: String,
    pub delivery_fee: String,
    pub delivery_distance: String,
    pub total_price: String,
}

impl FormattedBreakdown {
    pub fn new(breakdown: &PriceBreakdown, currency_symbol: &str) -> Self {
        Self {
            cart_value: format_minor_units(breakdown.cart_value, currency_symbol),
            small_order_surcharge: format_minor_units(
                breakdown.small_order_surcharge,
                currency_symbol,
            ),
            delivery_fee: format_minor_units(breakdown.delivery_fee, currency_symbol),
            delivery_distance: format_meters(breakdown.delivery_distance),
            total_price: format_minor_units(breakdown.total_price, currency_symbol),
        }
    }
}

/// Calculate the delivery order price for a venue, cart value and user location
pub async fn delivery_order_price(
    State(state): State<AppState>,
    Query(params): Query<DeliveryPriceParams>,
) -> AppResult<Json<DeliveryPriceResponse>> {
    let request = DeliveryRequest::try_from(params)?;

    let venue = state.venues.fetch_venue(&request.venue_slug).await?;

    let distance = haversine_distance(request.user_location, venue.location);
    let breakdown = compute_price(&venue.pricing, request.cart_value, distance)?;

    tracing::info!(
        venue = %venue.slug,
        cart_value = breakdown.cart_value,
        distance = breakdown.delivery_distance,
        total_price = breakdown.total_price,
        "Delivery price calculated"
    );

    Ok(Json(DeliveryPriceResponse {
        formatted: FormattedBreakdown::new(&breakdown, &state.config.currency_symbol),
        breakdown,
    }))
}
