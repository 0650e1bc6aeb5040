//! CSV export of the ticket collection.

use anyhow::{Context, Result};
use std::io::Write;

use crate::model::ticket::Ticket;

/// Fixed header row for the export surface.
pub const CSV_HEADERS: [&str; 10] = [
    "id",
    "room",
    "occupied",
    "asset",
    "issue",
    "status",
    "urgency",
    "impact",
    "priority",
    "created_at",
];

/// Write the collection as CSV: the fixed header row, then one row per
/// ticket. All fields are quoted, matching the original export format.
pub fn write_csv<W: Write>(tickets: &[Ticket], out: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(out);

    writer
        .write_record(CSV_HEADERS)
        .context("Failed to write CSV header")?;

    for ticket in tickets {
        let status = ticket.status.to_string();
        let urgency = ticket.urgency.to_string();
        let impact = ticket.impact.to_string();
        let priority = ticket.priority.to_string();
        let created_at = ticket.created_at.to_rfc3339();
        writer
            .write_record([
                ticket.id.as_str(),
                ticket.room.as_str(),
                if ticket.occupied { "yes" } else { "no" },
                ticket.asset.as_str(),
                ticket.issue.as_str(),
                status.as_str(),
                urgency.as_str(),
                impact.as_str(),
                priority.as_str(),
                created_at.as_str(),
            ])
            .with_context(|| format!("Failed to write CSV row for {}", ticket.id))?;
    }

    writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}

/// Render the collection to a CSV string.
pub fn to_csv_string(tickets: &[Ticket]) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(tickets, &mut buf)?;
    String::from_utf8(buf).context("CSV output was not valid UTF-8")
}
