use std::path::Path;

use super::*;

#[test]
fn default_catalog_has_three_categories() {
    let catalog = CategoryCatalog::default();
    let keys: Vec<&str> = catalog.categories.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, ["moderna", "pfizer", "screening"]);
}

#[test]
fn get_returns_matching_category() {
    let catalog = CategoryCatalog::default();
    let pfizer = catalog.get("pfizer").expect("pfizer should exist");
    assert_eq!(pfizer.label, "Pfizer");
}

#[test]
fn get_unknown_key_returns_none() {
    assert!(CategoryCatalog::default().get("astrazeneca").is_none());
}

#[test]
fn parse_accepts_valid_catalog() {
    let yaml = r"
categories:
  - key: flu
    api_name: Flu Shot
    label: Influenza
";
    let catalog = parse_categories(yaml).expect("valid catalog");
    assert_eq!(catalog.categories.len(), 1);
    assert_eq!(catalog.get("flu").unwrap().api_name, "Flu Shot");
}

#[test]
fn parse_rejects_duplicate_keys() {
    let yaml = r"
categories:
  - key: flu
    api_name: Flu Shot
    label: Influenza
  - key: FLU
    api_name: Flu Shot 2
    label: Influenza 2
";
    let err = parse_categories(yaml).unwrap_err();
    assert!(
        matches!(err, ConfigError::Validation(ref msg) if msg.contains("duplicate")),
        "expected duplicate-key validation error, got: {err:?}"
    );
}

#[test]
fn parse_rejects_blank_label() {
    let yaml = r#"
categories:
  - key: flu
    api_name: Flu Shot
    label: "  "
"#;
    assert!(matches!(
        parse_categories(yaml),
        Err(ConfigError::Validation(_))
    ));
}

#[test]
fn parse_rejects_empty_catalog() {
    assert!(matches!(
        parse_categories("categories: []"),
        Err(ConfigError::Validation(_))
    ));
}

#[test]
fn parse_rejects_malformed_yaml() {
    assert!(matches!(
        parse_categories("categories: {not: a list"),
        Err(ConfigError::CategoriesFileParse(_))
    ));
}

#[test]
fn load_categories_from_real_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config")
        .join("categories.yaml");
    assert!(
        path.exists(),
        "categories.yaml missing at {path:?}; required for this test"
    );
    let catalog = load_categories(&path).expect("failed to load categories.yaml");
    assert_eq!(catalog, CategoryCatalog::default());
}

#[test]
fn load_categories_missing_file_is_io_error() {
    let result = load_categories(Path::new("/nonexistent/categories.yaml"));
    assert!(matches!(result, Err(ConfigError::CategoriesFileIo { .. })));
}
