//! Appointment category catalog.
//!
//! Each category maps a short CLI-facing key (`moderna`) to the capability
//! name the booking API understands and the label printed in reports. The
//! built-in catalog can be replaced by a YAML file with the same shape.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Key used on the command line, e.g. `pfizer`.
    pub key: String,
    /// Appointment-type name sent to the location lookup.
    pub api_name: String,
    /// Human-readable label used in the report.
    pub label: String,
}

impl Category {
    fn new(key: &str, api_name: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            api_name: api_name.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCatalog {
    pub categories: Vec<Category>,
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self {
            categories: vec![
                Category::new("moderna", "COVID-19 Vaccine (Moderna)", "Moderna"),
                Category::new("pfizer", "COVID-19 Vaccine (Pfizer)", "Pfizer"),
                Category::new(
                    "screening",
                    "COVID-19 Asymptomatic Screening",
                    "Asymptomatic Screening",
                ),
            ],
        }
    }
}

impl CategoryCatalog {
    /// Look up a category by its CLI key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.key == key)
    }
}

/// Load and validate a category catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_categories(path: &Path) -> Result<CategoryCatalog, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CategoriesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_categories(&content)
}

fn parse_categories(content: &str) -> Result<CategoryCatalog, ConfigError> {
    let catalog: CategoryCatalog = serde_yaml::from_str(content)?;
    validate_categories(&catalog)?;
    Ok(catalog)
}

fn validate_categories(catalog: &CategoryCatalog) -> Result<(), ConfigError> {
    if catalog.categories.is_empty() {
        return Err(ConfigError::Validation(
            "at least one category is required".to_string(),
        ));
    }

    let mut seen_keys = HashSet::new();
    for category in &catalog.categories {
        if category.key.trim().is_empty()
            || category.api_name.trim().is_empty()
            || category.label.trim().is_empty()
        {
            return Err(ConfigError::Validation(format!(
                "category '{}' must have a non-empty key, api_name and label",
                category.key
            )));
        }

        if !seen_keys.insert(category.key.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate category key: '{}'",
                category.key
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "categories_test.rs"]
mod tests;
