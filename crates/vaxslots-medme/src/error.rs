use thiserror::Error;

/// Errors returned by the booking API client.
///
/// Request timeouts are not errors; the client reports them as an absent
/// result so a slow location does not abort the run.
#[derive(Debug, Error)]
pub enum MedmeError {
    /// Network or TLS failure, or a non-2xx HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response carried a GraphQL `errors` array.
    #[error("booking API error: {0}")]
    ApiError(String),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid endpoint URL '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}
