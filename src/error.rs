use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::clients::venue_api::VenueApiError;
use crate::pricing::PricingError;
use crate::utils::validation::ValidationError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    VenueApi(#[from] VenueApiError),

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String, Value) {
        match self {
            AppError::Validation(e) => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                e.to_string(),
                json!({ "fields": e.fields }),
            ),
            AppError::VenueApi(VenueApiError::NotFound) => (
                StatusCode::NOT_FOUND,
                "venue_not_found",
                self.to_string(),
                json!({}),
            ),
            AppError::VenueApi(VenueApiError::Unavailable(status)) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "upstream_unavailable",
                self.to_string(),
                json!({ "upstream_status": status.as_u16() }),
            ),
            AppError::VenueApi(VenueApiError::Unexpected(status)) => (
                StatusCode::BAD_GATEWAY,
                "upstream_error",
                self.to_string(),
                json!({ "upstream_status": status.as_u16() }),
            ),
            AppError::VenueApi(e @ VenueApiError::Transport(_)) => (
                StatusCode::BAD_GATEWAY,
                "upstream_error",
                e.to_string(),
                json!({}),
            ),
            AppError::VenueApi(VenueApiError::InvalidPayload(reason)) => (
                StatusCode::BAD_GATEWAY,
                "upstream_error",
                "An unexpected error occurred while fetching venue information. Please try again."
                    .to_string(),
                json!({ "reason": reason }),
            ),
            AppError::Pricing(PricingError::DeliveryImpossible { distance }) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "delivery_not_possible",
                "Delivery is not possible for the given distance.".to_string(),
                json!({ "delivery_distance": distance.round() as u64 }),
            ),
            AppError::Pricing(PricingError::AmountOverflow)
            | AppError::Config(_)
            | AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "Failed to calculate the delivery price. Please try again.".to_string(),
                json!({}),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = self.parts();

        if status.is_server_error() {
            tracing::error!(error = %self, code, "Request failed");
        } else {
            tracing::debug!(error = %self, code, "Request rejected");
        }

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (
                AppError::from(ValidationError { fields: vec!["cart_value"] }),
                StatusCode::BAD_REQUEST,
            ),
            (AppError::from(VenueApiError::NotFound), StatusCode::NOT_FOUND),
            (
                AppError::from(VenueApiError::Unavailable(StatusCode::INTERNAL_SERVER_ERROR)),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                AppError::from(VenueApiError::Unexpected(StatusCode::UNAUTHORIZED)),
                StatusCode::BAD_GATEWAY,
            ),
            (
                AppError::from(PricingError::DeliveryImpossible { distance: 1037.9 }),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                AppError::from(PricingError::AmountOverflow),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::Internal("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_validation_details_list_fields() {
        let error = AppError::from(ValidationError {
            fields: vec!["venue_slug", "user_lat"],
        });
        let (_, code, message, details) = error.parts();

        assert_eq!(code, "validation_error");
        assert_eq!(message, "Please fill in all required fields with valid values.");
        assert_eq!(details, json!({ "fields": ["venue_slug", "user_lat"] }));
    }

    #[test]
    fn test_delivery_impossible_message() {
        let (_, code, message, details) =
            AppError::from(PricingError::DeliveryImpossible { distance: 1037.9 }).parts();

        assert_eq!(code, "delivery_not_possible");
        assert_eq!(message, "Delivery is not possible for the given distance.");
        assert_eq!(details, json!({ "delivery_distance": 1038 }));
    }
}
