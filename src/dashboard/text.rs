//! Plain-text rendering of a [`DashboardView`] for the terminal.

use super::DashboardView;
use crate::risk::RiskLevel;
use crate::weather::ReadingStatus;
use std::io::{self, Write};

const TITLE: &str = "Alcaldía Tláhuac - Flood Monitoring System";
const SUBTITLE: &str = "24h forecast • Interactive map • Citizen report";

pub fn write_text(view: &DashboardView, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{TITLE}")?;
    writeln!(out, "{SUBTITLE}")?;
    writeln!(out, "{}", "-".repeat(TITLE.chars().count()))?;
    writeln!(out)?;

    writeln!(out, "Flood probability (24h)")?;
    let width = view
        .zones
        .iter()
        .map(|c| c.zone.chars().count())
        .max()
        .unwrap_or(0);
    for card in &view.zones {
        let tag = match card.level {
            RiskLevel::High => "HIGH",
            RiskLevel::Low => "LOW ",
        };
        let pad = width - card.zone.chars().count();
        writeln!(
            out,
            "  [{tag}] {}{} {:>3}% risk",
            card.zone,
            " ".repeat(pad),
            card.percent
        )?;
    }
    writeln!(out)?;

    writeln!(out, "Average risk: {}%", view.summary.base_percent)?;
    if let Some(reading) = &view.summary.rainfall {
        match &reading.status {
            ReadingStatus::Live => {
                writeln!(out, "Recent rainfall: {:.1} mm/h", reading.mm_per_hour)?;
            }
            ReadingStatus::Unavailable { reason } => {
                writeln!(
                    out,
                    "Recent rainfall: unavailable ({reason}); risk assumes 0 mm/h"
                )?;
            }
        }
    }
    writeln!(out)?;

    writeln!(
        out,
        "Map centre {:.3}, {:.3} (zoom {})",
        view.map.center.0, view.map.center.1, view.map.zoom
    )?;
    for m in &view.map.markers {
        writeln!(out, "  * {} ({:.3}, {:.3})", m.label, m.lat, m.lon)?;
    }
    Ok(())
}
