use axum::{routing::get, Router};

use crate::handlers::{calculator, health};
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route(
            "/delivery-order-price",
            get(calculator::delivery_order_price),
        )
        .route("/health", get(health::health));

    Router::new().nest("/api", api_routes).with_state(state)
}
