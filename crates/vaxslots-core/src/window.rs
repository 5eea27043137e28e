//! Date-range partitioning for slot lookups.
//!
//! The booking API rejects availability filters that span too many days, so
//! a search horizon is split into consecutive windows of at most
//! `window_days` days each.

use chrono::{Days, NaiveDate};
use serde::Serialize;

/// A `{start, end}` pair of calendar dates sent as one availability filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Width of the window in days.
    #[must_use]
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

/// Partition `[today, today + days]` into consecutive windows.
///
/// Each window is at most `window_days` wide and starts where the previous
/// one ended; the last window may be narrower. `days == 0` yields no
/// windows. A `window_days` of zero is treated as one.
#[must_use]
pub fn partition_days(today: NaiveDate, days: u32, window_days: u32) -> Vec<DateWindow> {
    let step = window_days.max(1);
    let mut windows = Vec::new();
    let mut offset = 0u32;

    while offset < days {
        let end_offset = offset.saturating_add(step).min(days);
        let (Some(start), Some(end)) = (
            today.checked_add_days(Days::new(u64::from(offset))),
            today.checked_add_days(Days::new(u64::from(end_offset))),
        ) else {
            break;
        };
        windows.push(DateWindow { start, end });
        offset = end_offset;
    }

    windows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
    }

    #[test]
    fn ten_days_yields_single_window() {
        let windows = partition_days(day("2026-10-16"), 10, 10);
        assert_eq!(
            windows,
            vec![DateWindow {
                start: day("2026-10-16"),
                end: day("2026-10-26"),
            }]
        );
    }

    #[test]
    fn sixty_days_yields_six_full_windows() {
        let windows = partition_days(day("2026-10-16"), 60, 10);
        assert_eq!(windows.len(), 6);
        assert!(windows.iter().all(|w| w.span_days() == 10));
        assert_eq!(windows.last().unwrap().end, day("2026-12-15"));
    }

    #[test]
    fn last_window_may_be_narrower() {
        let windows = partition_days(day("2026-12-28"), 15, 10);
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[1].start, day("2027-01-07"));
        assert_eq!(windows[1].end, day("2027-01-12"));
        assert_eq!(windows[1].span_days(), 5);
    }

    #[test]
    fn zero_days_yields_no_windows() {
        assert!(partition_days(day("2026-10-16"), 0, 10).is_empty());
    }

    #[test]
    fn zero_window_size_is_treated_as_one() {
        let windows = partition_days(day("2026-10-16"), 3, 0);
        assert_eq!(windows.len(), 3);
        assert!(windows.iter().all(|w| w.span_days() == 1));
    }

    #[test]
    fn windows_are_contiguous_and_cover_range() {
        let today = day("2026-02-20");
        for days in 1..=75 {
            for window_days in 1..=12 {
                let windows = partition_days(today, days, window_days);
                assert!(!windows.is_empty());
                assert_eq!(windows[0].start, today);
                assert_eq!(
                    windows.last().unwrap().end,
                    today + Days::new(u64::from(days)),
                    "days={days} window_days={window_days}"
                );
                for w in &windows {
                    assert!(w.span_days() >= 1);
                    assert!(w.span_days() <= i64::from(window_days));
                }
                for pair in windows.windows(2) {
                    assert_eq!(pair[0].end, pair[1].start, "gap or overlap between windows");
                }
            }
        }
    }
}
