//! GraphQL payloads for the two lookups the poller performs.

use serde::Serialize;
use serde_json::json;
use vaxslots_core::DateWindow;

/// Party size sent with every availability query.
pub const PARTY_SIZE: u32 = 1;

pub(crate) const LOCATIONS_OPERATION: &str = "publicGetEnterprisePharmacies";
pub(crate) const SLOTS_OPERATION: &str = "publicGetAvailableTimes";

const LOCATIONS_QUERY: &str = r"query publicGetEnterprisePharmacies($appointmentTypeName: String, $enterpriseName: String!) {
  publicGetEnterprisePharmacies(appointmentTypeName: $appointmentTypeName, enterpriseName: $enterpriseName) {
    id
    name
    storeNo
    pharmacyAddress {
      unit
      streetNumber
      streetName
      city
      province
      country
      postalCode
    }
    pharmacyContact {
      phone
      email
    }
    appointmentTypes {
      id
      name
      isWaitlisted
    }
  }
}";

const SLOTS_QUERY: &str = r"query publicGetAvailableTimes($pharmacyId: String, $appointmentTypeId: Int!, $noOfPeople: Int!, $filter: AvailabilityFilter!) {
  publicGetAvailableTimes(pharmacyId: $pharmacyId, appointmentTypeId: $appointmentTypeId, noOfPeople: $noOfPeople, filter: $filter) {
    startDateTime
    endDateTime
  }
}";

/// A GraphQL request body: `{"operationName", "query", "variables"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest {
    pub operation_name: &'static str,
    pub query: &'static str,
    pub variables: serde_json::Value,
}

/// Locations offering `appointment_type_name` for the given enterprise.
#[must_use]
pub fn location_lookup(appointment_type_name: &str, enterprise: &str) -> GraphqlRequest {
    GraphqlRequest {
        operation_name: LOCATIONS_OPERATION,
        query: LOCATIONS_QUERY,
        variables: json!({
            "appointmentTypeName": appointment_type_name,
            "enterpriseName": enterprise,
        }),
    }
}

/// Open slots for one location and capability inside `window`.
#[must_use]
pub fn slot_lookup(location_id: &str, capability_id: i64, window: &DateWindow) -> GraphqlRequest {
    GraphqlRequest {
        operation_name: SLOTS_OPERATION,
        query: SLOTS_QUERY,
        variables: json!({
            "pharmacyId": location_id,
            "appointmentTypeId": capability_id,
            "noOfPeople": PARTY_SIZE,
            "filter": {
                "startDate": window.start.format("%Y-%m-%d").to_string(),
                "endDate": window.end.format("%Y-%m-%d").to_string(),
            },
        }),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn location_lookup_carries_name_and_enterprise() {
        let req = location_lookup("COVID-19 Vaccine (Pfizer)", "SDM");
        assert_eq!(req.operation_name, "publicGetEnterprisePharmacies");
        assert_eq!(
            req.variables,
            json!({
                "appointmentTypeName": "COVID-19 Vaccine (Pfizer)",
                "enterpriseName": "SDM",
            })
        );
    }

    #[test]
    fn slot_lookup_formats_window_dates() {
        let window = DateWindow {
            start: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
            end: NaiveDate::from_ymd_opt(2026, 10, 26).unwrap(),
        };
        let req = slot_lookup("ph-1", 42, &window);
        assert_eq!(req.operation_name, "publicGetAvailableTimes");
        assert_eq!(req.variables["pharmacyId"], "ph-1");
        assert_eq!(req.variables["appointmentTypeId"], 42);
        assert_eq!(req.variables["noOfPeople"], 1);
        assert_eq!(req.variables["filter"]["startDate"], "2026-10-16");
        assert_eq!(req.variables["filter"]["endDate"], "2026-10-26");
    }

    #[test]
    fn request_serializes_with_camel_case_keys() {
        let req = location_lookup("x", "SDM");
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["operationName"], "publicGetEnterprisePharmacies");
        assert!(body["query"]
            .as_str()
            .unwrap()
            .contains("publicGetEnterprisePharmacies("));
        assert_eq!(body["variables"]["enterpriseName"], "SDM");
    }
}
