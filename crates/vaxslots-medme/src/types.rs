//! Wire types for booking API responses.
//!
//! Every response is a GraphQL envelope `{"data": {...}, "errors": [...]}`.
//! Required fields are declared as such so a renamed or missing field fails
//! deserialization instead of silently producing empty values.

use serde::Deserialize;
use vaxslots_core::{Location, PrimaryCapability};

/// Top-level GraphQL envelope. `data` may be absent or `null`.
#[derive(Debug, Deserialize)]
pub struct GraphqlEnvelope<T> {
    pub data: Option<T>,
}

// ---------------------------------------------------------------------------
// publicGetEnterprisePharmacies
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PharmaciesData {
    #[serde(default)]
    pub public_get_enterprise_pharmacies: Option<Vec<PharmacyNode>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PharmacyNode {
    pub id: String,
    pub name: String,
    pub store_no: String,
    pub pharmacy_address: PharmacyAddress,
    #[serde(default)]
    pub pharmacy_contact: Option<PharmacyContact>,
    /// Capabilities for the requested appointment type; the first entry is
    /// the one slot lookups are made against.
    #[serde(default)]
    pub appointment_types: Vec<AppointmentTypeNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PharmacyAddress {
    pub city: String,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub street_number: Option<String>,
    #[serde(default)]
    pub street_name: Option<String>,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PharmacyContact {
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentTypeNode {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_waitlisted: bool,
}

impl From<PharmacyNode> for Location {
    fn from(node: PharmacyNode) -> Self {
        let primary_capability = node
            .appointment_types
            .first()
            .map(|t| PrimaryCapability {
                id: t.id,
                waitlisted: t.is_waitlisted,
            });
        Location {
            id: node.id,
            display_name: node.name,
            store_number: node.store_no,
            city: node.pharmacy_address.city,
            primary_capability,
        }
    }
}

// ---------------------------------------------------------------------------
// publicGetAvailableTimes
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableTimesData {
    #[serde(default)]
    pub public_get_available_times: Option<Vec<AvailableSlot>>,
}

/// One open slot as returned by the availability query.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableSlot {
    pub start_date_time: String,
    pub end_date_time: String,
}
