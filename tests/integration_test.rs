//! Integration test: config load, live/static dashboard render, fallback, reports, map.

use tlahuac_flood::{
    config::MonitorConfig,
    dashboard::{self, write_text, DashboardView, RiskSource, SourceKind, StaticSnapshot},
    map::{unmatched_zones, MapView},
    report::{self, IncidentReport},
    risk::{base_risk, zone_risks, RiskEngine, RiskLevel, ZoneRiskTable},
    weather::{read_rainfall, ReadingStatus, WeatherError, WeatherProvider},
};
use std::path::Path;

struct FixedRain(f64);

impl WeatherProvider for FixedRain {
    fn latest_precipitation(&self) -> Result<f64, WeatherError> {
        Ok(self.0)
    }
}

struct Outage;

impl WeatherProvider for Outage {
    fn latest_precipitation(&self) -> Result<f64, WeatherError> {
        Err(WeatherError::Status(503))
    }
}

fn text_of(view: &DashboardView) -> String {
    let mut buf = Vec::new();
    write_text(view, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn config_load_default() {
    let c = MonitorConfig::load(Path::new("nonexistent.json"));
    assert_eq!(c.zones.len(), 5);
    assert_eq!(c.risk.high_threshold, 0.70);
    assert_eq!(c.weather.latitude, 19.284);
    assert_eq!(c.refresh_interval_secs, 0);
}

#[test]
fn config_partial_file_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"refresh_interval_secs": 60, "zones": []}"#).unwrap();
    let c = MonitorConfig::try_load(&path).unwrap();
    assert_eq!(c.refresh_interval_secs, 60);
    assert_eq!(c.zones.len(), 5);
    assert_eq!(c.map.markers.len(), 4);
}

#[test]
fn config_non_positive_multipliers_use_builtin_zones() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{"zones":[{"name":"X","multiplier":-2.0},{"name":"Y","multiplier":0.0}]}"#,
    )
    .unwrap();
    let c = MonitorConfig::try_load(&path).unwrap();
    assert_eq!(c.zones, tlahuac_flood::risk::default_zones());

    let table = ZoneRiskTable::new(c.zones).unwrap();
    let engine = RiskEngine::new(c.risk, table);
    let cards = engine.assess(0.95);
    assert_eq!(cards.len(), 5);
    assert!(cards.iter().all(|card| card.probability > 0.0 && card.percent > 0));
}

#[test]
fn config_custom_zones_kept_when_valid() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"zones":[{"name":"Mixquic","multiplier":0.5}]}"#).unwrap();
    let c = MonitorConfig::try_load(&path).unwrap();
    assert_eq!(c.zones.len(), 1);
    assert_eq!(c.zones[0].name, "Mixquic");
}

#[test]
fn config_invalid_file_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(MonitorConfig::try_load(&path).is_err());
    let c = MonitorConfig::load(&path);
    assert_eq!(c.zones.len(), 5);
}

#[test]
fn live_render_at_twelve_mm() {
    let engine = RiskEngine::default();
    let provider = FixedRain(12.0);
    let view = dashboard::render(&RiskSource::Live(&provider), &engine, &MapView::default());

    assert_eq!(view.source, SourceKind::Live);
    assert_eq!(view.summary.base_percent, 75);
    let reading = view.summary.rainfall.as_ref().unwrap();
    assert!(reading.is_live());
    assert_eq!(reading.mm_per_hour, 12.0);

    let expected = [
        ("San Pedro Tláhuac", 0.75, 75, RiskLevel::High),
        ("San Pedro Mixquic", 0.4875, 48, RiskLevel::Low),
        ("Santa Catarina", 0.7875, 78, RiskLevel::High),
        ("Santiago Zacahuizco", 0.585, 58, RiskLevel::Low),
        ("La Logasca", 0.8625, 86, RiskLevel::High),
    ];
    assert_eq!(view.zones.len(), expected.len());
    for (card, (zone, p, pct, level)) in view.zones.iter().zip(expected) {
        assert_eq!(card.zone, zone);
        assert!(approx(card.probability, p), "{zone}: {}", card.probability);
        assert_eq!(card.percent, pct, "{zone}");
        assert_eq!(card.level, level, "{zone}");
    }

    let text = text_of(&view);
    assert!(text.contains("Recent rainfall: 12.0 mm/h"), "{text}");
    assert!(text.contains("[HIGH] La Logasca"), "{text}");
}

#[test]
fn fetch_failure_is_zero_rain_and_marked() {
    let reading = read_rainfall(&Outage);
    assert_eq!(reading.mm_per_hour, 0.0);
    assert!(matches!(reading.status, ReadingStatus::Unavailable { .. }));
    assert_eq!(base_risk(reading.mm_per_hour), 0.20);

    let view = dashboard::render(
        &RiskSource::Live(&Outage),
        &RiskEngine::default(),
        &MapView::default(),
    );
    assert_eq!(view.summary.base_percent, 20);
    assert!(view.zones.iter().all(|c| c.level == RiskLevel::Low));
    assert!(text_of(&view).contains("unavailable"));
}

#[test]
fn scaling_law_and_unclamped_logasca() {
    let table = ZoneRiskTable::default();
    for base in [0.20, 0.50, 0.75, 0.95] {
        for (a, z) in zone_risks(base, &table).iter().zip(table.zones()) {
            assert_eq!(a.zone, z.name);
            assert!(approx(a.probability, base * z.multiplier));
        }
    }
    let logasca = |base: f64| {
        zone_risks(base, &table)
            .into_iter()
            .find(|a| a.zone == "La Logasca")
            .unwrap()
            .probability
    };
    assert!(logasca(0.87) > 1.0);
    assert!(logasca(0.95) > 1.0);
    assert!(logasca(0.75) < 1.0);
}

#[test]
fn static_snapshot_render() {
    let view = dashboard::render(
        &RiskSource::Static(StaticSnapshot::default()),
        &RiskEngine::default(),
        &MapView::default(),
    );
    assert_eq!(view.source, SourceKind::Static);
    assert_eq!(view.summary.base_percent, 89);
    assert!(view.summary.rainfall.is_none());
    assert_eq!(view.zone("La Logasca").unwrap().level, RiskLevel::High);
    assert_eq!(view.zone("San Pedro Mixquic").unwrap().level, RiskLevel::Low);
}

#[test]
fn view_serializes_status() {
    let view = dashboard::render(
        &RiskSource::Live(&Outage),
        &RiskEngine::default(),
        &MapView::default(),
    );
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["summary"]["rainfall"]["status"], "unavailable");
    assert_eq!(json["zones"][0]["level"], "low");
}

#[test]
fn report_echoed_verbatim() {
    let input = IncidentReport {
        name: "Ana".into(),
        address: "Av. Tláhuac 123".into(),
        description: "Agua hasta la banqueta".into(),
        media: Some("foto.jpg".into()),
    };
    let receipt = report::submit(input.clone());
    assert_eq!(receipt.report, input);
    let mut buf = Vec::new();
    receipt.write_text(&mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.contains("Av. Tláhuac 123"));
    assert!(text.contains("foto.jpg"));
}

#[test]
fn receipt_json_line() {
    let receipt = report::submit(IncidentReport {
        name: "Luis".into(),
        address: "Calle 5".into(),
        description: "Encharcamiento".into(),
        media: None,
    });
    let mut buf = Vec::new();
    tlahuac_flood::output::write_json_line(&receipt, &mut buf).unwrap();
    let line = String::from_utf8(buf).unwrap();
    assert_eq!(line.lines().count(), 1);
    let json: serde_json::Value = serde_json::from_str(&line).unwrap();
    assert_eq!(json["report"]["address"], "Calle 5");
    assert!(json["report"].get("media").is_none());
}

#[test]
fn map_zone_mismatch_reported() {
    let table = ZoneRiskTable::default();
    let map = MapView::default();
    assert_eq!(map.markers.len(), 4);
    assert_eq!(unmatched_zones(&table, &map), ["San Pedro Mixquic", "La Logasca"]);
}
