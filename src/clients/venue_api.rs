use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::pricing::{DistanceRange, VenuePricingConfig};
use crate::utils::geo::Coordinate;

#[derive(Debug, Error)]
pub enum VenueApiError {
    #[error("Venue not found. Please check the venue slug.")]
    NotFound,

    #[error("The server is currently unavailable. Please try again later.")]
    Unavailable(StatusCode),

    #[error("An unexpected error occurred. Please try again.")]
    Unexpected(StatusCode),

    #[error("An unexpected error occurred while fetching venue information. Please try again.")]
    Transport(#[from] reqwest::Error),

    #[error("Venue data is malformed: {0}")]
    InvalidPayload(String),
}

impl VenueApiError {
    fn from_status(status: StatusCode) -> Self {
        if status == StatusCode::NOT_FOUND {
            Self::NotFound
        } else if status.is_server_error() {
            Self::Unavailable(status)
        } else {
            Self::Unexpected(status)
        }
    }
}

/// Upper bound accepted for any monetary field of a venue, in minor units
pub const MAX_VENUE_AMOUNT: i64 = 100_000_000;

// ============ Raw payloads ============

#[derive(Debug, Deserialize)]
struct StaticResponse {
    venue_raw: StaticVenue,
}

#[derive(Debug, Deserialize)]
struct StaticVenue {
    location: Location,
}

#[derive(Debug, Deserialize)]
struct Location {
    /// `[longitude, latitude]`
    coordinates: [f64; 2],
}

#[derive(Debug, Deserialize)]
struct DynamicResponse {
    venue_raw: DynamicVenue,
}

#[derive(Debug, Deserialize)]
struct DynamicVenue {
    delivery_specs: DeliverySpecs,
}

#[derive(Debug, Deserialize)]
struct DeliverySpecs {
    order_minimum_no_surcharge: i64,
    delivery_pricing: DeliveryPricing,
}

#[derive(Debug, Deserialize)]
struct DeliveryPricing {
    base_price: i64,
    distance_ranges: Vec<RawDistanceRange>,
}

#[derive(Debug, Deserialize)]
struct RawDistanceRange {
    min: f64,
    max: f64,
    a: i64,
    b: i64,
}

// ============ Typed venue ============

/// A venue resolved from the static and dynamic endpoints
#[derive(Debug, Clone, PartialEq)]
pub struct Venue {
    pub slug: String,
    pub location: Coordinate,
    pub pricing: VenuePricingConfig,
}

impl Location {
    fn into_coordinate(self) -> Result<Coordinate, VenueApiError> {
        let coordinate = Coordinate::from_lon_lat(self.coordinates);
        if !(-90.0..=90.0).contains(&coordinate.latitude)
            || !(-180.0..=180.0).contains(&coordinate.longitude)
        {
            return Err(VenueApiError::InvalidPayload(format!(
                "venue coordinates out of range [{}, {}]",
                coordinate.longitude, coordinate.latitude
            )));
        }
        Ok(coordinate)
    }
}

/// Reject negative or implausibly large amounts before they reach the pricing arithmetic
fn check_amount(field: &str, value: i64) -> Result<i64, VenueApiError> {
    if (0..=MAX_VENUE_AMOUNT).contains(&value) {
        Ok(value)
    } else {
        Err(VenueApiError::InvalidPayload(format!(
            "{} must be between 0 and {}, got {}",
            field, MAX_VENUE_AMOUNT, value
        )))
    }
}

impl DeliverySpecs {
    fn into_pricing(self) -> Result<VenuePricingConfig, VenueApiError> {
        let order_minimum_no_surcharge =
            check_amount("order_minimum_no_surcharge", self.order_minimum_no_surcharge)?;
        let base_price = check_amount("base_price", self.delivery_pricing.base_price)?;

        let ranges = self.delivery_pricing.distance_ranges;
        if ranges.is_empty() {
            return Err(VenueApiError::InvalidPayload(
                "distance_ranges is empty".to_string(),
            ));
        }

        let distance_ranges = ranges
            .into_iter()
            .map(|r| {
                if !r.min.is_finite() || !r.max.is_finite() || r.min < 0.0 || r.max < 0.0 {
                    return Err(VenueApiError::InvalidPayload(format!(
                        "invalid distance range bounds [{}, {})",
                        r.min, r.max
                    )));
                }
                Ok(DistanceRange {
                    min: r.min,
                    max: r.max,
                    a: check_amount("a", r.a)?,
                    b: check_amount("b", r.b)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(VenuePricingConfig {
            order_minimum_no_surcharge,
            base_price,
            distance_ranges,
        })
    }
}

// ============ Client ============

/// HTTP client for the remote venue API
#[derive(Clone)]
pub struct VenueClient {
    http: reqwest::Client,
    base_url: String,
}

impl VenueClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, VenueApiError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the static then the dynamic venue data and merge them into a typed `Venue`
    pub async fn fetch_venue(&self, slug: &str) -> Result<Venue, VenueApiError> {
        let url = format!("{}/{}", self.base_url, slug);

        let static_data: StaticResponse = self.get_json(&format!("{}/static", url)).await?;
        let dynamic_data: DynamicResponse = self.get_json(&format!("{}/dynamic", url)).await?;

        let location = static_data.venue_raw.location.into_coordinate()?;
        let pricing = dynamic_data.venue_raw.delivery_specs.into_pricing()?;
        for (end, start) in pricing.gaps() {
            tracing::warn!(
                venue = %slug,
                gap_start = end,
                gap_end = start,
                "Distance ranges are not contiguous; distances in the gap pay the base price only"
            );
        }

        Ok(Venue {
            slug: slug.to_string(),
            location,
            pricing,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, VenueApiError> {
        tracing::debug!(url = %url, "Fetching venue data");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = %status, "Venue API request failed");
            return Err(VenueApiError::from_status(status));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| VenueApiError::InvalidPayload(e.to_string()))
    }
}
