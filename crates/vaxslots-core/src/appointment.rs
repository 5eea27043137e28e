//! Bookable appointment slots and their display projections.

use serde::Serialize;

use crate::location::Location;

/// Booking page for a store and capability.
///
/// `base` is the booking site root; a trailing slash is tolerated.
#[must_use]
pub fn booking_url(base: &str, store_number: &str, capability_id: i64) -> String {
    format!(
        "{}/{store_number}/schedule/{capability_id}",
        base.trim_end_matches('/')
    )
}

/// One available slot at a location, for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppointmentRecord {
    pub location: Location,
    pub category_label: String,
    /// Raw ISO-8601-like start timestamp, e.g. `2026-10-18T09:15:00`.
    pub start_date_time: String,
    pub end_date_time: String,
    pub website_url: String,
}

impl AppointmentRecord {
    /// Calendar date of the slot (`YYYY-MM-DD`).
    #[must_use]
    pub fn date(&self) -> &str {
        prefix(&self.start_date_time, 0, 10)
    }

    #[must_use]
    pub fn start_time(&self) -> &str {
        prefix(&self.start_date_time, 11, 16)
    }

    #[must_use]
    pub fn end_time(&self) -> &str {
        prefix(&self.end_date_time, 11, 16)
    }

    /// Display time, `"2026-10-18 09:15 - 09:30"`. Sorting on this string is
    /// chronological because every part is zero-padded.
    #[must_use]
    pub fn time(&self) -> String {
        format!("{} {} - {}", self.date(), self.start_time(), self.end_time())
    }
}

// Timestamps shorter than expected yield whatever part is present.
fn prefix(s: &str, from: usize, to: usize) -> &str {
    let end = to.min(s.len());
    s.get(from.min(end)..end).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::PrimaryCapability;

    fn record(start: &str, end: &str) -> AppointmentRecord {
        let location = Location {
            id: "abc".to_string(),
            display_name: "Queen & Spadina".to_string(),
            store_number: "1234".to_string(),
            city: "Toronto".to_string(),
            primary_capability: Some(PrimaryCapability {
                id: 42,
                waitlisted: false,
            }),
        };
        AppointmentRecord {
            website_url: booking_url("https://book.example.com", &location.store_number, 42),
            location,
            category_label: "Pfizer".to_string(),
            start_date_time: start.to_string(),
            end_date_time: end.to_string(),
        }
    }

    #[test]
    fn derives_display_fields() {
        let r = record("2026-10-18T09:15:00-04:00", "2026-10-18T09:30:00-04:00");
        assert_eq!(r.date(), "2026-10-18");
        assert_eq!(r.start_time(), "09:15");
        assert_eq!(r.end_time(), "09:30");
        assert_eq!(r.time(), "2026-10-18 09:15 - 09:30");
    }

    #[test]
    fn short_timestamps_do_not_panic() {
        let r = record("2026-10-18", "");
        assert_eq!(r.date(), "2026-10-18");
        assert_eq!(r.start_time(), "");
        assert_eq!(r.end_time(), "");
    }

    #[test]
    fn booking_url_is_deterministic() {
        let a = booking_url("https://book.example.com", "1234", 42);
        let b = booking_url("https://book.example.com", "1234", 42);
        assert_eq!(a, b);
        assert_eq!(a, "https://book.example.com/1234/schedule/42");
    }

    #[test]
    fn booking_url_tolerates_trailing_slash() {
        assert_eq!(
            booking_url("https://book.example.com/", "9", 1),
            "https://book.example.com/9/schedule/1"
        );
    }
}
