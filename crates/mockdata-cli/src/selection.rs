use std::collections::HashSet;

use mockdata_core::{FieldRegistry, FieldType, normalize_key};
use tracing::warn;

use crate::CliError;

/// Canonicalize requested labels against the catalog.
///
/// Duplicates (case-insensitive) are rejected. Unknown labels are kept as
/// typed and generated with the fallback rule, unless `strict` is set.
pub fn resolve_selection(
    registry: &FieldRegistry,
    labels: &[String],
    strict: bool,
) -> Result<Vec<FieldType>, CliError> {
    let mut seen = HashSet::new();
    let mut selection = Vec::with_capacity(labels.len());

    for label in labels {
        let label = label.trim();
        if label.is_empty() {
            return Err(CliError::InvalidConfig("empty field name".to_string()));
        }
        if !seen.insert(normalize_key(label)) {
            return Err(CliError::InvalidConfig(format!(
                "field '{label}' selected more than once"
            )));
        }

        let field_type = if strict {
            registry.require(label)?
        } else if let Some(canonical) = registry.resolve(label) {
            canonical
        } else {
            warn!(field_type = label, "unknown field type, values will be random words");
            FieldType::from(label)
        };
        selection.push(field_type);
    }

    Ok(selection)
}
