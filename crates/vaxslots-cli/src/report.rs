//! CSV rendering of collected appointments.

use std::io::Write;

use serde::Serialize;
use thiserror::Error;
use vaxslots_core::AppointmentRecord;

const HEADER: [&str; 5] = ["name", "city", "appointment_type_name", "time", "website"];

#[derive(Debug, Error)]
pub(crate) enum ReportError {
    #[error("failed to write report row: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to flush report: {0}")]
    Io(#[from] std::io::Error),
}

/// One output line; field order matches [`HEADER`].
#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    name: &'a str,
    city: &'a str,
    appointment_type_name: &'a str,
    time: String,
    website: &'a str,
}

impl<'a> From<&'a AppointmentRecord> for ReportRow<'a> {
    fn from(record: &'a AppointmentRecord) -> Self {
        Self {
            name: &record.location.display_name,
            city: &record.location.city,
            appointment_type_name: &record.category_label,
            time: record.time(),
            website: &record.website_url,
        }
    }
}

/// Sort `records` by display time and write them as CSV with every field
/// quoted. The header is written even when there are no records.
///
/// Returns the number of data rows written.
pub(crate) fn write_report<W: Write>(
    mut records: Vec<AppointmentRecord>,
    writer: W,
) -> Result<usize, ReportError> {
    // Name and label break ties so output is stable across runs.
    records.sort_by_cached_key(|r| {
        (
            r.time(),
            r.location.display_name.clone(),
            r.category_label.clone(),
        )
    });

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(writer);

    wtr.write_record(HEADER)?;
    for record in &records {
        wtr.serialize(ReportRow::from(record))?;
    }
    wtr.flush()?;

    Ok(records.len())
}
