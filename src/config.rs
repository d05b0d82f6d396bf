use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{AppError, AppResult};

pub const DEFAULT_VENUE_API_URL: &str =
    "https://consumer-api.development.dev.woltapi.com/home-assignment-api/v1/venues";

#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the venue API; `/{slug}/static` and `/{slug}/dynamic` are appended
    pub venue_api_url: String,
    pub venue_api_timeout: Duration,
    pub currency_symbol: String,
    pub server_host: String,
    pub server_port: u16,
    /// Seconds per replenished request token, per client IP
    pub rate_limit_period_secs: u64,
    pub rate_limit_burst: u32,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            venue_api_url: env::var("VENUE_API_URL")
                .unwrap_or_else(|_| DEFAULT_VENUE_API_URL.to_string()),
            venue_api_timeout: Duration::from_secs(parse_var("VENUE_API_TIMEOUT_SECS", 10)?),
            currency_symbol: env::var("CURRENCY_SYMBOL").unwrap_or_else(|_| "€".to_string()),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: parse_var("SERVER_PORT", 3000)?,
            rate_limit_period_secs: parse_var("RATE_LIMIT_PERIOD_SECS", 1)?,
            rate_limit_burst: parse_var("RATE_LIMIT_BURST", 100)?,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            venue_api_url: DEFAULT_VENUE_API_URL.to_string(),
            venue_api_timeout: Duration::from_secs(10),
            currency_symbol: "€".to_string(),
            server_host: "0.0.0.0".to_string(),
            server_port: 3000,
            rate_limit_period_secs: 1,
            rate_limit_burst: 100,
        }
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> AppResult<T> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("{} must be a number, got {:?}", name, raw))),
        Err(_) => Ok(default),
    }
}
