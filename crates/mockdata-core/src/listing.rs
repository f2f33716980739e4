use schemars::{JsonSchema, schema_for};
use serde::{Deserialize, Serialize};

use crate::CATALOG_VERSION;
use crate::catalog::FieldRegistry;
use crate::types::FieldType;

/// Serializable snapshot of the field catalog.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CategoryListing {
    /// Contract version for this listing format.
    pub catalog_version: String,
    /// Categories in declaration order.
    pub categories: Vec<CategoryEntry>,
}

/// One category and its field types.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CategoryEntry {
    pub name: String,
    pub field_types: Vec<FieldType>,
}

impl CategoryListing {
    pub fn from_registry(registry: &FieldRegistry) -> Self {
        let categories = registry
            .categories()
            .iter()
            .map(|category| CategoryEntry {
                name: category.name.to_string(),
                field_types: category
                    .field_types
                    .iter()
                    .map(|&label| FieldType::from(label))
                    .collect(),
            })
            .collect();

        Self {
            catalog_version: CATALOG_VERSION.to_string(),
            categories,
        }
    }

    pub fn field_type_count(&self) -> usize {
        self.categories
            .iter()
            .map(|category| category.field_types.len())
            .sum()
    }
}

/// JSON Schema describing [`CategoryListing`].
pub fn catalog_json_schema() -> Result<serde_json::Value, serde_json::Error> {
    serde_json::to_value(schema_for!(CategoryListing))
}
