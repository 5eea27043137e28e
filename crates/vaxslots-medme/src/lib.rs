//! Client for the pharmacy booking GraphQL API.

pub mod client;
pub mod error;
pub mod queries;
pub mod types;

pub use client::MedmeClient;
pub use error::MedmeError;
pub use queries::GraphqlRequest;
pub use types::AvailableSlot;
