use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

use crate::utils::geo::Coordinate;
use crate::utils::money::parse_major_units;

static VENUE_SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z-]+$").unwrap());
static CART_VALUE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,7}([.,]\d{1,2})?$").unwrap());
static DEGREES_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+(\.\d+)?$").unwrap());

/// Raw calculator input, exactly as the client sent it
#[derive(Debug, Default, Deserialize)]
pub struct DeliveryPriceParams {
    pub venue_slug: Option<String>,
    pub cart_value: Option<String>,
    pub user_lat: Option<String>,
    pub user_lon: Option<String>,
}

/// A validated calculation request
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryRequest {
    pub venue_slug: String,
    /// Cart value in minor units
    pub cart_value: i64,
    pub user_location: Coordinate,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("Please fill in all required fields with valid values.")]
pub struct ValidationError {
    /// Names of every missing or malformed field
    pub fields: Vec<&'static str>,
}

impl TryFrom<DeliveryPriceParams> for DeliveryRequest {
    type Error = ValidationError;

    fn try_from(params: DeliveryPriceParams) -> Result<Self, Self::Error> {
        let mut fields = Vec::new();

        let venue_slug = params
            .venue_slug
            .map(|s| s.trim().to_string())
            .filter(|s| VENUE_SLUG_REGEX.is_match(s));
        if venue_slug.is_none() {
            fields.push("venue_slug");
        }

        let cart_value = params
            .cart_value
            .as_deref()
            .map(str::trim)
            .filter(|s| CART_VALUE_REGEX.is_match(s))
            .and_then(parse_major_units);
        if cart_value.is_none() {
            fields.push("cart_value");
        }

        let latitude = parse_degrees(params.user_lat.as_deref(), 90.0);
        if latitude.is_none() {
            fields.push("user_lat");
        }

        let longitude = parse_degrees(params.user_lon.as_deref(), 180.0);
        if longitude.is_none() {
            fields.push("user_lon");
        }

        match (venue_slug, cart_value, latitude, longitude) {
            (Some(venue_slug), Some(cart_value), Some(latitude), Some(longitude)) => Ok(Self {
                venue_slug,
                cart_value,
                user_location: Coordinate::new(latitude, longitude),
            }),
            _ => Err(ValidationError { fields }),
        }
    }
}

/// Parse a plain decimal degree value and check it lies within `[-limit, limit]`
fn parse_degrees(value: Option<&str>, limit: f64) -> Option<f64> {
    value
        .map(str::trim)
        .filter(|s| DEGREES_REGEX.is_match(s))
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|deg| (-limit..=limit).contains(deg))
}
