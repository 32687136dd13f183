//! Maps the latest rainfall reading to a base probability, scales it per zone and labels it.

use super::zones::ZoneRiskTable;
use crate::config::RiskConfig;
use serde::{Deserialize, Serialize};

/// Probabilities strictly above this are high risk.
pub const HIGH_RISK_THRESHOLD: f64 = 0.70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    High,
}

impl RiskLevel {
    pub fn from_probability(probability: f64, config: &RiskConfig) -> Self {
        if probability > config.high_threshold {
            RiskLevel::High
        } else {
            RiskLevel::Low
        }
    }
}

/// Base flood probability for a rainfall rate in mm/h.
///
/// Lower bounds are inclusive. Anything below 5 mm/h, including negative and
/// NaN input, lands in the lowest bucket.
pub fn base_risk(rainfall_mm_h: f64) -> f64 {
    if rainfall_mm_h >= 15.0 {
        0.95
    } else if rainfall_mm_h >= 10.0 {
        0.75
    } else if rainfall_mm_h >= 5.0 {
        0.50
    } else {
        0.20
    }
}

/// Probability for a single zone. Not clamped: a multiplier above 1 can push it past 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub zone: String,
    pub probability: f64,
}

pub fn zone_risks(base: f64, table: &ZoneRiskTable) -> Vec<RiskAssessment> {
    table
        .zones()
        .iter()
        .map(|z| RiskAssessment {
            zone: z.name.clone(),
            probability: base * z.multiplier,
        })
        .collect()
}

/// High iff `probability > 0.70`.
pub fn classify(probability: f64) -> RiskLevel {
    if probability > HIGH_RISK_THRESHOLD {
        RiskLevel::High
    } else {
        RiskLevel::Low
    }
}

/// Whole percent, truncated toward zero (48.75% shows as 48).
pub fn percent(probability: f64) -> i64 {
    (probability * 100.0).trunc() as i64
}

/// One rendered zone indicator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneCard {
    pub zone: String,
    pub probability: f64,
    pub percent: i64,
    pub level: RiskLevel,
}

pub struct RiskEngine {
    config: RiskConfig,
    table: ZoneRiskTable,
}

impl RiskEngine {
    pub fn new(config: RiskConfig, table: ZoneRiskTable) -> Self {
        Self { config, table }
    }

    /// Cards for every zone in table order.
    pub fn assess(&self, base: f64) -> Vec<ZoneCard> {
        zone_risks(base, &self.table)
            .into_iter()
            .map(|a| self.card(a.zone, a.probability))
            .collect()
    }

    pub fn card(&self, zone: String, probability: f64) -> ZoneCard {
        ZoneCard {
            zone,
            probability,
            percent: percent(probability),
            level: RiskLevel::from_probability(probability, &self.config),
        }
    }

    pub fn config(&self) -> &RiskConfig {
        &self.config
    }

    pub fn table(&self) -> &ZoneRiskTable {
        &self.table
    }
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self::new(RiskConfig::default(), ZoneRiskTable::default())
    }
}
