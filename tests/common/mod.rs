#![allow(dead_code)]

use axum_test::TestServer;
use delivery_price_calculator::{config::Config, routes::create_router, AppState};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SLUG: &str = "home-assignment-venue-helsinki";

pub const VENUE_LAT: f64 = 60.17094;
pub const VENUE_LON: f64 = 24.93087;

/// ~200 m from the venue
pub const NEAR: (&str, &str) = ("60.169757", "24.928135");
/// ~538 m from the venue
pub const MID: (&str, &str) = ("60.1665", "24.927");
/// ~1038 m from the venue
pub const FAR: (&str, &str) = ("60.1700", "24.9122");

pub fn static_body() -> Value {
    json!({
        "venue_raw": {
            "location": { "coordinates": [VENUE_LON, VENUE_LAT] }
        }
    })
}

pub fn dynamic_body(order_minimum_no_surcharge: i64) -> Value {
    json!({
        "venue_raw": {
            "delivery_specs": {
                "order_minimum_no_surcharge": order_minimum_no_surcharge,
                "delivery_pricing": {
                    "base_price": 190,
                    "distance_ranges": [
                        { "min": 0, "max": 500, "a": 0, "b": 0, "flag": null },
                        { "min": 500, "max": 1000, "a": 100, "b": 1, "flag": null },
                        { "min": 1000, "max": 0, "a": 0, "b": 0, "flag": null }
                    ]
                }
            }
        }
    })
}

pub async fn mount_venue(server: &MockServer, static_response: ResponseTemplate, dynamic_response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/venues/{}/static", SLUG)))
        .respond_with(static_response)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/venues/{}/dynamic", SLUG)))
        .respond_with(dynamic_response)
        .mount(server)
        .await;
}

pub async fn mount_helsinki(server: &MockServer, order_minimum_no_surcharge: i64) {
    mount_venue(
        server,
        ResponseTemplate::new(200).set_body_json(static_body()),
        ResponseTemplate::new(200).set_body_json(dynamic_body(order_minimum_no_surcharge)),
    )
    .await;
}

pub fn test_config(venue_api: &MockServer) -> Config {
    Config {
        venue_api_url: format!("{}/venues", venue_api.uri()),
        ..Config::default()
    }
}

pub fn create_test_server(venue_api: &MockServer) -> TestServer {
    create_test_server_with_config(test_config(venue_api))
}

pub fn create_test_server_with_config(config: Config) -> TestServer {
    let state = AppState::new(config).unwrap();

    TestServer::new(create_router(state)).unwrap()
}
