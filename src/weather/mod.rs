//! Latest hourly precipitation from a weather provider, with a zero-rain fallback.

mod open_meteo;

pub use open_meteo::{parse_latest_precipitation, OpenMeteoClient};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("provider returned {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("no precipitation value in hourly series")]
    MissingValue,
}

/// Source of the most recent hourly precipitation (mm/h).
pub trait WeatherProvider {
    fn latest_precipitation(&self) -> Result<f64, WeatherError>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReadingStatus {
    Live,
    /// Fetch or parse failed; the reading was replaced by 0.0
    Unavailable { reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RainfallReading {
    pub mm_per_hour: f64,
    #[serde(flatten)]
    pub status: ReadingStatus,
}

impl RainfallReading {
    pub fn live(mm_per_hour: f64) -> Self {
        Self {
            mm_per_hour,
            status: ReadingStatus::Live,
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            mm_per_hour: 0.0,
            status: ReadingStatus::Unavailable {
                reason: reason.into(),
            },
        }
    }

    pub fn is_live(&self) -> bool {
        self.status == ReadingStatus::Live
    }
}

/// Fetch once. Any failure yields 0.0 mm/h marked `Unavailable`, which routes to the lowest risk bucket.
pub fn read_rainfall(provider: &dyn WeatherProvider) -> RainfallReading {
    match provider.latest_precipitation() {
        Ok(mm) => {
            debug!(mm_per_hour = mm, "rainfall reading");
            RainfallReading::live(mm)
        }
        Err(e) => {
            warn!(error = %e, "weather fetch failed; assuming 0.0 mm/h");
            RainfallReading::unavailable(e.to_string())
        }
    }
}
