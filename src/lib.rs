//! Tláhuac flood monitor: rainfall-driven zone risk, map markers and citizen reports.
//!
//! Modules:
//! - [`risk`] — Base risk step function, zone multipliers, High/Low classification
//! - [`weather`] — Open-Meteo precipitation fetch with observable fallback
//! - [`dashboard`] — Static or live dashboard view and its text rendering
//! - [`map`] — Fixed map markers
//! - [`report`] — Incident report intake (echo only)
//! - [`logging`] — tracing setup
//! - [`output`] — JSON line output

pub mod config;
pub mod dashboard;
pub mod logging;
pub mod map;
pub mod output;
pub mod report;
pub mod risk;
pub mod weather;

pub use config::MonitorConfig;
pub use dashboard::{render, DashboardView, RiskSource, StaticSnapshot};
pub use logging::StructuredLogger;
pub use map::MapView;
pub use report::{IncidentReport, ReportReceipt};
pub use risk::{base_risk, classify, zone_risks, RiskEngine, RiskLevel, ZoneRiskTable};
pub use weather::{OpenMeteoClient, RainfallReading, ReadingStatus, WeatherProvider};
