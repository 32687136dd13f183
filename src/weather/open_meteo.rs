//! Open-Meteo forecast client: GET hourly precipitation for a fixed point, keep the last value.

use super::{WeatherError, WeatherProvider};
use crate::config::WeatherConfig;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    hourly: HourlyData,
}

#[derive(Debug, Deserialize)]
struct HourlyData {
    precipitation: Vec<Option<f64>>,
}

/// Last element of `hourly.precipitation`. A trailing `null` counts as missing.
pub fn parse_latest_precipitation(body: &str) -> Result<f64, WeatherError> {
    let response: ForecastResponse = serde_json::from_str(body)?;
    response
        .hourly
        .precipitation
        .last()
        .copied()
        .flatten()
        .ok_or(WeatherError::MissingValue)
}

pub struct OpenMeteoClient {
    config: WeatherConfig,
    client: reqwest::blocking::Client,
}

impl OpenMeteoClient {
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &WeatherConfig {
        &self.config
    }
}

impl WeatherProvider for OpenMeteoClient {
    fn latest_precipitation(&self) -> Result<f64, WeatherError> {
        let res = self
            .client
            .get(&self.config.endpoint)
            .query(&[
                ("latitude", self.config.latitude.to_string()),
                ("longitude", self.config.longitude.to_string()),
                ("hourly", "precipitation".to_string()),
            ])
            .send()?;
        if !res.status().is_success() {
            return Err(WeatherError::Status(res.status().as_u16()));
        }
        let body = res.text()?;
        parse_latest_precipitation(&body)
    }
}
