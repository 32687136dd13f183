//! Per-zone risk multipliers for the Tláhuac borough.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub name: String,
    /// Scales the base risk; may exceed 1.0
    pub multiplier: f64,
}

impl Zone {
    pub fn new(name: impl Into<String>, multiplier: f64) -> Self {
        Self {
            name: name.into(),
            multiplier,
        }
    }
}

pub fn default_zones() -> Vec<Zone> {
    vec![
        Zone::new("San Pedro Tláhuac", 1.00),
        Zone::new("San Pedro Mixquic", 0.65),
        Zone::new("Santa Catarina", 1.05),
        Zone::new("Santiago Zacahuizco", 0.78),
        Zone::new("La Logasca", 1.15),
    ]
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ZoneTableError {
    #[error("zone table is empty")]
    Empty,
    #[error("zone {name:?} has multiplier {multiplier}; must be finite and > 0")]
    InvalidMultiplier { name: String, multiplier: f64 },
}

/// Ordered, non-empty zone table with positive multipliers. Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneRiskTable {
    zones: Vec<Zone>,
}

impl ZoneRiskTable {
    pub fn new(zones: Vec<Zone>) -> Result<Self, ZoneTableError> {
        if zones.is_empty() {
            return Err(ZoneTableError::Empty);
        }
        if let Some(bad) = zones
            .iter()
            .find(|z| !(z.multiplier.is_finite() && z.multiplier > 0.0))
        {
            return Err(ZoneTableError::InvalidMultiplier {
                name: bad.name.clone(),
                multiplier: bad.multiplier,
            });
        }
        Ok(Self { zones })
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn multiplier(&self, name: &str) -> Option<f64> {
        self.zones
            .iter()
            .find(|z| z.name == name)
            .map(|z| z.multiplier)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

impl Default for ZoneRiskTable {
    fn default() -> Self {
        Self {
            zones: default_zones(),
        }
    }
}
