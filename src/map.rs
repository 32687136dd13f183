//! Fixed map markers for the dashboard map.
//!
//! Marker labels do not line up with the risk zone table ("Mixquic" vs
//! "San Pedro Mixquic", no marker for La Logasca). [`unmatched_zones`] reports
//! the gap instead of guessing a mapping.

use crate::config::MapConfig;
use crate::risk::ZoneRiskTable;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub label: String,
    pub lat: f64,
    pub lon: f64,
}

impl MapMarker {
    pub fn new(label: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            label: label.into(),
            lat,
            lon,
        }
    }
}

pub fn default_markers() -> Vec<MapMarker> {
    vec![
        MapMarker::new("San Pedro Tláhuac", 19.284, -99.008),
        MapMarker::new("Mixquic", 19.205, -98.975),
        MapMarker::new("Santa Catarina", 19.289, -99.015),
        MapMarker::new("Santiago Zacahuizco", 19.300, -99.005),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub center: (f64, f64),
    pub zoom: u8,
    pub markers: Vec<MapMarker>,
}

impl MapView {
    pub fn from_config(config: &MapConfig) -> Self {
        Self {
            center: (config.center_lat, config.center_lon),
            zoom: config.zoom,
            markers: config.markers.clone(),
        }
    }

    pub fn marker(&self, label: &str) -> Option<&MapMarker> {
        self.markers.iter().find(|m| m.label == label)
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self::from_config(&MapConfig::default())
    }
}

/// Risk zones with no marker of the same name.
pub fn unmatched_zones<'a>(table: &'a ZoneRiskTable, map: &MapView) -> Vec<&'a str> {
    table
        .zones()
        .iter()
        .filter(|z| map.marker(&z.name).is_none())
        .map(|z| z.name.as_str())
        .collect()
}
