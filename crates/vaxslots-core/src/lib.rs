mod app_config;
pub mod appointment;
pub mod categories;
mod config;
mod error;
pub mod location;
pub mod window;

pub use app_config::AppConfig;
pub use appointment::{booking_url, AppointmentRecord};
pub use categories::{load_categories, Category, CategoryCatalog};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use location::{filter_locations, Location, PrimaryCapability};
pub use window::{partition_days, DateWindow};
