//! Server configuration loaded from the environment.

use anyhow::{Context, Result};

const DEFAULT_BASE_URL: &str = "https://api.weather.gov";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub weather_api_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("SERVER_PORT") {
            Ok(value) => value
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
            Err(_) => DEFAULT_PORT,
        };

        let weather_api_base_url = std::env::var("WEATHER_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            port,
            weather_api_base_url,
        })
    }
}
