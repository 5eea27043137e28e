//! HTTP client for the pharmacy booking GraphQL API.
//!
//! Wraps `reqwest` with the tenant headers the API expects, a fixed request
//! timeout, and typed response deserialization. A request that times out is
//! reported as `Ok(None)` so the caller can carry on with reduced coverage;
//! every other failure is an error.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use vaxslots_core::{AppConfig, DateWindow, Location};

use crate::error::MedmeError;
use crate::queries::{self, GraphqlRequest};
use crate::types::{AvailableSlot, AvailableTimesData, GraphqlEnvelope, PharmaciesData};

const TENANT_HEADER: &str = "x-tenantid";
const PHARMACY_HEADER: &str = "x-pharmacyid";

/// Client for the booking API.
///
/// Use [`MedmeClient::from_config`] in the binary, or [`MedmeClient::new`]
/// to point at a mock server in tests.
pub struct MedmeClient {
    client: Client,
    endpoint: Url,
    tenant_id: String,
}

impl MedmeClient {
    /// Creates a client for `endpoint` that identifies as `tenant_id`.
    ///
    /// # Errors
    ///
    /// Returns [`MedmeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`MedmeError::InvalidEndpoint`] if
    /// `endpoint` is not a valid URL.
    pub fn new(
        endpoint: &str,
        tenant_id: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, MedmeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.min(10)))
            .user_agent(user_agent)
            .build()?;

        let endpoint = Url::parse(endpoint).map_err(|e| MedmeError::InvalidEndpoint {
            endpoint: endpoint.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            endpoint,
            tenant_id: tenant_id.to_owned(),
        })
    }

    /// Creates a client from the run configuration.
    ///
    /// # Errors
    ///
    /// See [`MedmeClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, MedmeError> {
        Self::new(
            &config.endpoint,
            &config.tenant_id,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Lists every location of `enterprise` offering `appointment_type_name`.
    ///
    /// Returns `Ok(None)` if the request timed out. A `null` result is an
    /// empty list.
    ///
    /// # Errors
    ///
    /// - [`MedmeError::Http`] on network failure or non-2xx HTTP status.
    /// - [`MedmeError::ApiError`] if the response carries GraphQL errors.
    /// - [`MedmeError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn fetch_locations(
        &self,
        appointment_type_name: &str,
        enterprise: &str,
    ) -> Result<Option<Vec<Location>>, MedmeError> {
        let request = queries::location_lookup(appointment_type_name, enterprise);
        let Some(envelope) = self.execute::<PharmaciesData>(&request, None).await? else {
            return Ok(None);
        };

        let locations = envelope
            .data
            .and_then(|d| d.public_get_enterprise_pharmacies)
            .unwrap_or_default()
            .into_iter()
            .map(Location::from)
            .collect();
        Ok(Some(locations))
    }

    /// Lists open slots for one location and capability inside `window`.
    ///
    /// Returns `Ok(None)` if the request timed out. A `null` result is an
    /// empty list.
    ///
    /// # Errors
    ///
    /// Same as [`MedmeClient::fetch_locations`].
    pub async fn fetch_slots(
        &self,
        location_id: &str,
        capability_id: i64,
        window: &DateWindow,
    ) -> Result<Option<Vec<AvailableSlot>>, MedmeError> {
        let request = queries::slot_lookup(location_id, capability_id, window);
        let Some(envelope) = self
            .execute::<AvailableTimesData>(&request, Some(location_id))
            .await?
        else {
            return Ok(None);
        };

        Ok(Some(
            envelope
                .data
                .and_then(|d| d.public_get_available_times)
                .unwrap_or_default(),
        ))
    }

    /// Posts `request` and decodes the envelope, mapping a timeout to `None`.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: &GraphqlRequest,
        pharmacy_id: Option<&str>,
    ) -> Result<Option<GraphqlEnvelope<T>>, MedmeError> {
        tracing::debug!(
            operation = request.operation_name,
            pharmacy_id,
            variables = %request.variables,
            "sending booking API query"
        );

        let mut builder = self
            .client
            .post(self.endpoint.clone())
            .header(TENANT_HEADER, &self.tenant_id)
            .header(reqwest::header::AUTHORIZATION, "")
            .json(request);
        if let Some(id) = pharmacy_id {
            builder = builder.header(PHARMACY_HEADER, id);
        }

        let body = match Self::request_json(builder, request.operation_name).await {
            Ok(body) => body,
            Err(MedmeError::Http(e)) if e.is_timeout() => {
                tracing::debug!(
                    operation = request.operation_name,
                    pharmacy_id,
                    "booking API query timed out; treating as no data"
                );
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        Self::check_api_error(&body)?;

        let envelope = serde_json::from_value::<GraphqlEnvelope<T>>(body).map_err(|e| {
            MedmeError::Deserialize {
                context: request.operation_name.to_string(),
                source: e,
            }
        })?;
        Ok(Some(envelope))
    }

    /// Sends the request, asserts a 2xx status, and parses the body as JSON.
    async fn request_json(
        builder: RequestBuilder,
        context: &str,
    ) -> Result<serde_json::Value, MedmeError> {
        let response = builder.send().await?.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| MedmeError::Deserialize {
            context: context.to_string(),
            source: e,
        })
    }

    /// Returns an error if the body carries a non-empty GraphQL `errors` array.
    fn check_api_error(body: &serde_json::Value) -> Result<(), MedmeError> {
        let Some(errors) = body
            .get("errors")
            .and_then(serde_json::Value::as_array)
            .filter(|errors| !errors.is_empty())
        else {
            return Ok(());
        };

        let messages: Vec<&str> = errors
            .iter()
            .map(|e| {
                e.get("message")
                    .and_then(serde_json::Value::as_str)
                    .unwrap_or("unknown error")
            })
            .collect();
        Err(MedmeError::ApiError(messages.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn new_rejects_invalid_endpoint() {
        let result = MedmeClient::new("not a url", "tenant", 5, "vaxslots-test/0.1");
        assert!(matches!(result, Err(MedmeError::InvalidEndpoint { .. })));
    }

    #[test]
    fn check_api_error_accepts_body_without_errors() {
        assert!(MedmeClient::check_api_error(&json!({ "data": {} })).is_ok());
        assert!(MedmeClient::check_api_error(&json!({ "data": {}, "errors": [] })).is_ok());
    }

    #[test]
    fn check_api_error_joins_messages() {
        let body = json!({
            "data": null,
            "errors": [
                { "message": "Variable \"$filter\" is invalid" },
                { "message": "Date range too large" },
                { "path": ["x"] }
            ]
        });
        let err = MedmeClient::check_api_error(&body).unwrap_err();
        match err {
            MedmeError::ApiError(msg) => assert_eq!(
                msg,
                "Variable \"$filter\" is invalid; Date range too large; unknown error"
            ),
            other => panic!("expected ApiError, got {other:?}"),
        }
    }
}
