//! Store locations and the city/waitlist filter applied before slot lookups.

use std::collections::HashSet;

use serde::Serialize;

/// The capability a location offers for the category being polled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrimaryCapability {
    pub id: i64,
    pub waitlisted: bool,
}

/// A pharmacy location returned by the location lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub id: String,
    pub display_name: String,
    pub store_number: String,
    pub city: String,
    /// First capability listed for the location, if any.
    pub primary_capability: Option<PrimaryCapability>,
}

impl Location {
    /// Whether slots can be queried for this location: it has a primary
    /// capability and that capability is not waitlisted.
    #[must_use]
    pub fn is_bookable(&self) -> bool {
        self.primary_capability
            .as_ref()
            .is_some_and(|c| !c.waitlisted)
    }
}

/// Keep locations in an allow-listed city whose primary capability is open.
///
/// City matching is exact. Input order is preserved.
#[must_use]
pub fn filter_locations(locations: Vec<Location>, allowed_cities: &[String]) -> Vec<Location> {
    let allowed: HashSet<&str> = allowed_cities.iter().map(String::as_str).collect();
    locations
        .into_iter()
        .filter(|loc| allowed.contains(loc.city.as_str()))
        .filter(Location::is_bookable)
        .collect()
}
