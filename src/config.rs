//! Monitor configuration. Loaded once at startup; zone multipliers are never changed afterwards.

use crate::map::MapMarker;
use crate::risk::{Zone, ZoneRiskTable};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Weather provider (Open-Meteo forecast endpoint)
    pub weather: WeatherConfig,
    /// Classification threshold
    pub risk: RiskConfig,
    /// Zone multiplier table; an empty list falls back to the built-in table
    pub zones: Vec<Zone>,
    /// Map centre, zoom and markers
    pub map: MapConfig,
    /// Watch-mode refresh interval (seconds). 0 renders once.
    pub refresh_interval_secs: u64,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub endpoint: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    /// Probability strictly above this is high risk
    pub high_threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u8,
    pub markers: Vec<MapMarker>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            weather: WeatherConfig::default(),
            risk: RiskConfig::default(),
            zones: crate::risk::default_zones(),
            map: MapConfig::default(),
            refresh_interval_secs: 0,
            log: LogConfig::default(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.open-meteo.com/v1/forecast".to_string(),
            latitude: 19.284,
            longitude: -99.002,
            timeout_secs: 15,
            connect_timeout_secs: 5,
        }
    }
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            high_threshold: crate::risk::HIGH_RISK_THRESHOLD,
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_lat: 19.284,
            center_lon: -99.002,
            zoom: 12,
            markers: crate::map::default_markers(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("parsing {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl MonitorConfig {
    /// Load from JSON file if present; otherwise return default
    pub fn load(path: &Path) -> Self {
        Self::try_load(path).unwrap_or_default()
    }

    /// Like [`MonitorConfig::load`], but reports why a present file was ignored.
    /// A missing file is not an error.
    pub fn try_load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str::<MonitorConfig>(&data).map_err(|source| {
            ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Ok(config.normalized())
    }

    /// Replaces an empty or invalid zone list with the built-in table.
    fn normalized(mut self) -> Self {
        if let Err(e) = ZoneRiskTable::new(self.zones.clone()) {
            if !self.zones.is_empty() {
                tracing::warn!(error = %e, "configured zones rejected; using built-in table");
            }
            self.zones = crate::risk::default_zones();
        }
        self
    }
}
