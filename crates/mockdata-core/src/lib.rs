//! Core contracts for mockdata.
//!
//! This crate owns the static field catalog (which field types exist and how
//! they are grouped), the shared error type, and the small validation helpers
//! used by the generator and the CLI.

pub mod catalog;
pub mod error;
pub mod listing;
pub mod types;
pub mod validation;

pub use catalog::{
    CATEGORIES, Category, FieldRegistry, category_of, list_all_field_types, list_categories,
    resolve,
};
pub use error::{Error, Result};
pub use listing::{CategoryEntry, CategoryListing, catalog_json_schema};
pub use types::{FieldType, normalize_key};
pub use validation::{validate_catalog, validate_count};

/// Current contract version for catalog listings.
pub const CATALOG_VERSION: &str = "0.1";
