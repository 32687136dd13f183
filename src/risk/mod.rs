//! Rainfall-driven flood risk: base risk step function, zone scaling, High/Low classification.

mod engine;
mod zones;

pub use engine::{
    base_risk, classify, percent, zone_risks, RiskAssessment, RiskEngine, RiskLevel, ZoneCard,
    HIGH_RISK_THRESHOLD,
};
pub use zones::{default_zones, Zone, ZoneRiskTable, ZoneTableError};
