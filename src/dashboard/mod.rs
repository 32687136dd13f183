//! One render path for both dashboard variants: fixed snapshot or live rainfall.

mod text;

pub use text::write_text;

use crate::map::MapView;
use crate::risk::{base_risk, percent, RiskEngine, RiskLevel, ZoneCard};
use crate::weather::{read_rainfall, RainfallReading, WeatherProvider};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Hand-entered probabilities shown by the non-live dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticSnapshot {
    pub zones: Vec<(String, f64)>,
    pub headline_percent: i64,
}

impl Default for StaticSnapshot {
    fn default() -> Self {
        Self {
            zones: vec![
                ("San Pedro Tláhuac".to_string(), 0.89),
                ("San Pedro Mixquic".to_string(), 0.59),
                ("Santa Catarina".to_string(), 0.90),
                ("Santiago Zacahuizco".to_string(), 0.59),
                ("La Logasca".to_string(), 0.96),
            ],
            headline_percent: 89,
        }
    }
}

pub enum RiskSource<'a> {
    Static(StaticSnapshot),
    Live(&'a dyn WeatherProvider),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Static,
    Live,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub base_percent: i64,
    /// Absent for the static snapshot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rainfall: Option<RainfallReading>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub generated_at: DateTime<Utc>,
    pub source: SourceKind,
    pub zones: Vec<ZoneCard>,
    pub summary: Summary,
    pub map: MapView,
}

impl DashboardView {
    pub fn zone(&self, name: &str) -> Option<&ZoneCard> {
        self.zones.iter().find(|c| c.zone == name)
    }
}

pub fn render(source: &RiskSource<'_>, engine: &RiskEngine, map: &MapView) -> DashboardView {
    let (kind, zones, summary) = match source {
        RiskSource::Static(snapshot) => {
            let zones = snapshot
                .zones
                .iter()
                .map(|(name, p)| engine.card(name.clone(), *p))
                .collect();
            let summary = Summary {
                base_percent: snapshot.headline_percent,
                rainfall: None,
            };
            (SourceKind::Static, zones, summary)
        }
        RiskSource::Live(provider) => {
            let reading = read_rainfall(*provider);
            let base = base_risk(reading.mm_per_hour);
            debug!(base, "base risk");
            let summary = Summary {
                base_percent: percent(base),
                rainfall: Some(reading),
            };
            (SourceKind::Live, engine.assess(base), summary)
        }
    };

    let high = zones
        .iter()
        .filter(|c| c.level == RiskLevel::High)
        .count();
    info!(source = ?kind, zones = zones.len(), high, "dashboard rendered");

    DashboardView {
        generated_at: Utc::now(),
        source: kind,
        zones,
        summary,
        map: map.clone(),
    }
}
