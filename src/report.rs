//! Citizen incident reports. Accepted and echoed back; nothing is stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IncidentReport {
    pub name: String,
    pub address: String,
    pub description: String,
    /// Reference to attached photo/video (path or URL), carried as given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportReceipt {
    pub received_at: DateTime<Utc>,
    pub report: IncidentReport,
}

/// Accept a report as-is. No validation, no identifier, no persistence.
pub fn submit(report: IncidentReport) -> ReportReceipt {
    info!(has_media = report.media.is_some(), "incident report received");
    ReportReceipt {
        received_at: Utc::now(),
        report,
    }
}

impl ReportReceipt {
    pub fn write_text(&self, out: &mut impl Write) -> io::Result<()> {
        let r = &self.report;
        writeln!(out, "Report submitted.")?;
        writeln!(out, "Report summary:")?;
        writeln!(out, "  Name:        {}", r.name)?;
        writeln!(out, "  Address:     {}", r.address)?;
        writeln!(out, "  Description: {}", r.description)?;
        if let Some(media) = &r.media {
            writeln!(out, "  Media:       {}", media)?;
        }
        Ok(())
    }
}
