use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::Category;
use crate::error::{Error, Result};
use crate::types::normalize_key;

/// Validate internal consistency of a field catalog.
///
/// This checks:
/// - category names are non-empty and unique
/// - every category lists at least one field type
/// - no field type appears twice, in the same or another category
///   (compared case-insensitively, since dispatch is case-insensitive)
pub fn validate_catalog(categories: &[Category]) -> Result<()> {
    let mut names = BTreeSet::new();
    let mut owners: BTreeMap<String, &str> = BTreeMap::new();

    for category in categories {
        if category.name.trim().is_empty() {
            return Err(Error::InvalidCatalog(
                "category name must not be empty".to_string(),
            ));
        }
        if !names.insert(category.name) {
            return Err(Error::InvalidCatalog(format!(
                "duplicate category name: {}",
                category.name
            )));
        }
        if category.field_types.is_empty() {
            return Err(Error::InvalidCatalog(format!(
                "category {} has no field types",
                category.name
            )));
        }

        for label in category.field_types {
            if label.trim().is_empty() {
                return Err(Error::InvalidCatalog(format!(
                    "empty field type in category {}",
                    category.name
                )));
            }
            if let Some(previous) = owners.insert(normalize_key(label), category.name) {
                return Err(Error::InvalidCatalog(format!(
                    "field type {label} listed in both {previous} and {}",
                    category.name
                )));
            }
        }
    }

    Ok(())
}

/// Convert a raw row count into a usable one.
///
/// Zero is allowed and yields empty columns; negative counts are rejected.
pub fn validate_count(raw: i64) -> Result<usize> {
    if raw < 0 {
        return Err(Error::InvalidArgument(format!(
            "count must be non-negative, got {raw}"
        )));
    }
    usize::try_from(raw)
        .map_err(|_| Error::InvalidArgument(format!("count {raw} does not fit in memory")))
}
