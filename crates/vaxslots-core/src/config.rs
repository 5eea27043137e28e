use std::path::Path;

use crate::app_config::AppConfig;
use crate::categories::{load_categories, CategoryCatalog};
use crate::ConfigError;

const DEFAULT_ENDPOINT: &str = "https://gql.medscheduler.ca/graphql";
const DEFAULT_TENANT_ID: &str = "edfbb1a3-aca2-4ee4-bbbb-9237237736c4";
const DEFAULT_ENTERPRISE: &str = "SDM";
const DEFAULT_BOOKING_BASE_URL: &str = "https://shoppersdrugmart.medmeapp.com";
const DEFAULT_CITIES: &str = "Toronto,North York,Scarborough,Etobicoke,East York,York,Mississauga";
const DEFAULT_CATEGORIES: &str = "moderna,pfizer";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is invalid or the categories file cannot
/// be loaded.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is invalid or the categories file cannot
/// be loaded.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a working
/// configuration pointed at the production booking API.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let endpoint = or_default("VAXSLOTS_ENDPOINT", DEFAULT_ENDPOINT);
    let tenant_id = or_default("VAXSLOTS_TENANT_ID", DEFAULT_TENANT_ID);
    let enterprise = or_default("VAXSLOTS_ENTERPRISE", DEFAULT_ENTERPRISE);
    let booking_base_url = or_default("VAXSLOTS_BOOKING_BASE_URL", DEFAULT_BOOKING_BASE_URL);
    let user_agent = or_default("VAXSLOTS_USER_AGENT", "vaxslots/0.1 (availability-report)");
    let log_level = or_default("VAXSLOTS_LOG_LEVEL", "warn");

    let request_timeout_secs = parse_u64("VAXSLOTS_REQUEST_TIMEOUT_SECS", "10")?;
    if request_timeout_secs == 0 {
        return Err(invalid(
            "VAXSLOTS_REQUEST_TIMEOUT_SECS",
            "must be at least 1".to_string(),
        ));
    }

    let max_concurrent_requests = parse_usize("VAXSLOTS_MAX_CONCURRENT_REQUESTS", "8")?.max(1);

    let window_days = parse_u32("VAXSLOTS_WINDOW_DAYS", "10")?;
    if window_days == 0 {
        return Err(invalid(
            "VAXSLOTS_WINDOW_DAYS",
            "must be at least 1".to_string(),
        ));
    }

    let debug = parse_flag(&or_default("VAXSLOTS_DEBUG", ""));

    let categories = match lookup("VAXSLOTS_CATEGORIES_PATH") {
        Ok(path) if !path.trim().is_empty() => load_categories(Path::new(path.trim()))?,
        _ => CategoryCatalog::default(),
    };

    let default_cities = split_list(&or_default("VAXSLOTS_DEFAULT_CITIES", DEFAULT_CITIES));
    let default_categories =
        split_list(&or_default("VAXSLOTS_DEFAULT_CATEGORIES", DEFAULT_CATEGORIES));

    Ok(AppConfig {
        endpoint,
        tenant_id,
        enterprise,
        booking_base_url,
        request_timeout_secs,
        user_agent,
        max_concurrent_requests,
        window_days,
        log_level,
        debug,
        categories,
        default_cities,
        default_categories,
    })
}

/// Interpret a boolean toggle. Anything other than `1`, `true`, `yes` or
/// `on` (case-insensitive) is off.
fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Split a comma-separated list, trimming entries and dropping empty ones.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
