use std::collections::BTreeSet;

use mockdata_core::{
    CATEGORIES, CategoryListing, Error, FieldRegistry, category_of, catalog_json_schema,
    list_all_field_types, list_categories, resolve, validate_catalog,
};

#[test]
fn builtin_catalog_is_valid() {
    validate_catalog(CATEGORIES).expect("built-in catalog passes validation");
}

#[test]
fn categories_keep_declaration_order() {
    let names: Vec<&str> = list_categories().iter().map(|c| c.name).collect();
    assert_eq!(
        names,
        vec![
            "Personal",
            "Business",
            "Finance",
            "Internet",
            "Location",
            "Color",
            "Content",
            "Identifiers",
            "Misc",
            "Tech",
            "Health",
            "Education",
            "Time",
            "Measurement",
        ]
    );
}

#[test]
fn all_field_types_are_unique_and_owned_by_one_category() {
    let all = list_all_field_types();
    let unique: BTreeSet<String> = all.iter().map(|f| f.key()).collect();
    assert_eq!(unique.len(), all.len());

    for field_type in &all {
        let owners = list_categories()
            .iter()
            .filter(|category| category.field_types.contains(&field_type.as_str()))
            .count();
        assert_eq!(owners, 1, "{field_type} must belong to exactly one category");
    }

    let listed: usize = list_categories().iter().map(|c| c.field_types.len()).sum();
    assert_eq!(listed, all.len());
}

#[test]
fn flattened_order_follows_categories() {
    let all = list_all_field_types();
    assert_eq!(all.first().map(|f| f.as_str()), Some("Name"));
    assert_eq!(all.last().map(|f| f.as_str()), Some("Energy"));
}

#[test]
fn lookup_is_case_insensitive() {
    assert_eq!(
        resolve("hex color").map(|f| f.to_string()),
        Some("Hex Color".to_string())
    );
    assert_eq!(category_of("BLOOD TYPE").map(|c| c.name), Some("Health"));
    assert!(resolve("Image URL").is_none());
}

#[test]
fn require_rejects_unknown_field_type() {
    let registry = FieldRegistry::global();
    assert!(registry.require("email").is_ok());
    assert!(matches!(
        registry.require("Favourite Cheese"),
        Err(Error::Unsupported(_))
    ));
}

#[test]
fn listing_matches_its_json_schema() {
    let listing = CategoryListing::from_registry(FieldRegistry::global());
    assert_eq!(listing.field_type_count(), list_all_field_types().len());

    let schema = catalog_json_schema().expect("schema serializes");
    let instance = serde_json::to_value(&listing).expect("listing serializes");
    let compiled = jsonschema::JSONSchema::compile(&schema).expect("schema compiles");
    assert!(compiled.is_valid(&instance));
}
