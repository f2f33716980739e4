use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::{Error, Result};
use crate::types::{FieldType, normalize_key};
use crate::validation::validate_catalog;

/// Named group of field types. Grouping is presentational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub field_types: &'static [&'static str],
}

/// Built-in catalog in declaration order.
pub static CATEGORIES: &[Category] = &[
    Category {
        name: "Personal",
        field_types: &[
            "Name",
            "Email",
            "Phone",
            "Address",
            "Date of Birth",
            "Age",
            "Gender",
            "Nationality",
            "Occupation",
            "Social Security Number",
        ],
    },
    Category {
        name: "Business",
        field_types: &[
            "Company",
            "Job Title",
            "Department",
            "Industry",
            "Employee ID",
            "Business Phone",
            "Business Email",
            "Revenue",
            "Founded Year",
        ],
    },
    Category {
        name: "Finance",
        field_types: &[
            "Credit Card",
            "Currency",
            "Bitcoin Address",
            "Ethereum Address",
            "Bank Account",
            "IBAN",
            "Transaction Amount",
            "Stock Symbol",
            "Investment Type",
        ],
    },
    Category {
        name: "Internet",
        field_types: &[
            "IP Address",
            "MAC Address",
            "URL",
            "User Agent",
            "Domain Name",
            "Username",
            "Password",
            "Avatar URL",
            "Social Media Handle",
        ],
    },
    Category {
        name: "Location",
        field_types: &[
            "Country",
            "City",
            "Zip Code",
            "Latitude",
            "Longitude",
            "Timezone",
            "Street Name",
            "State",
            "County",
        ],
    },
    Category {
        name: "Color",
        field_types: &[
            "Color",
            "Hex Color",
            "RGB Color",
            "CMYK Color",
            "HSL Color",
            "HSV Color",
            "Pantone Color",
        ],
    },
    Category {
        name: "Content",
        field_types: &[
            "Sentence",
            "Paragraph",
            "Book Title",
            "Movie Title",
            "Music Genre",
            "Song Title",
            "Artist Name",
            "Album Name",
            "Hashtag",
        ],
    },
    Category {
        name: "Identifiers",
        field_types: &[
            "UUID",
            "ISBN",
            "File Name",
            "File Extension",
            "IMEI",
            "Product Key",
            "Serial Number",
            "License Plate",
            "Passport Number",
        ],
    },
    Category {
        name: "Misc",
        field_types: &[
            "Vehicle",
            "Animal",
            "Product",
            "Food",
            "Drink",
            "University",
            "Emoji",
            "Barcode",
        ],
    },
    Category {
        name: "Tech",
        field_types: &[
            "Programming Language",
            "Framework",
            "Database",
            "Cloud Platform",
            "Operating System",
            "Browser",
            "Smartphone Model",
            "App Name",
        ],
    },
    Category {
        name: "Health",
        field_types: &[
            "Blood Type",
            "Height",
            "BMI",
            "Disease",
            "Medication",
            "Allergy",
            "Medical Procedure",
        ],
    },
    Category {
        name: "Education",
        field_types: &[
            "Degree",
            "Major",
            "GPA",
            "School Name",
            "Graduation Year",
            "Student ID",
            "Course Name",
        ],
    },
    Category {
        name: "Time",
        field_types: &[
            "Time",
            "Date",
            "Day of Week",
            "Month",
            "Year",
            "Century",
            "Timestamp",
        ],
    },
    Category {
        name: "Measurement",
        field_types: &[
            "Length",
            "Volume",
            "Temperature",
            "Speed",
            "Pressure",
            "Energy",
        ],
    },
];

/// Indexed, validated view over a static catalog.
#[derive(Debug, Clone)]
pub struct FieldRegistry {
    categories: &'static [Category],
    index: HashMap<String, (usize, &'static str)>,
}

impl FieldRegistry {
    /// Validate `categories` and build the case-insensitive index.
    pub fn new(categories: &'static [Category]) -> Result<Self> {
        validate_catalog(categories)?;

        let mut index = HashMap::new();
        for (position, category) in categories.iter().enumerate() {
            for &label in category.field_types {
                index.insert(normalize_key(label), (position, label));
            }
        }

        Ok(Self { categories, index })
    }

    /// Process-wide registry over [`CATEGORIES`].
    pub fn global() -> &'static FieldRegistry {
        static REGISTRY: OnceLock<FieldRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| match FieldRegistry::new(CATEGORIES) {
            Ok(registry) => registry,
            // Static data; the catalog tests keep this unreachable.
            Err(err) => panic!("built-in field catalog is invalid: {err}"),
        })
    }

    pub fn categories(&self) -> &'static [Category] {
        self.categories
    }

    /// All field types, flattened in declaration order.
    pub fn field_types(&self) -> Vec<FieldType> {
        self.categories
            .iter()
            .flat_map(|category| category.field_types.iter())
            .map(|&label| FieldType::from(label))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(&normalize_key(label))
    }

    /// Canonical spelling of `label`, if the catalog knows it.
    pub fn resolve(&self, label: &str) -> Option<FieldType> {
        self.index
            .get(&normalize_key(label))
            .map(|&(_, canonical)| FieldType::from(canonical))
    }

    /// Like [`FieldRegistry::resolve`], but unknown labels are an error.
    pub fn require(&self, label: &str) -> Result<FieldType> {
        self.resolve(label)
            .ok_or_else(|| Error::Unsupported(format!("unknown field type '{label}'")))
    }

    pub fn category_of(&self, label: &str) -> Option<&'static Category> {
        self.index
            .get(&normalize_key(label))
            .and_then(|&(position, _)| self.categories.get(position))
    }
}

/// The built-in catalog in declaration order.
pub fn list_categories() -> &'static [Category] {
    FieldRegistry::global().categories()
}

/// Every built-in field type, once each, in declaration order.
pub fn list_all_field_types() -> Vec<FieldType> {
    FieldRegistry::global().field_types()
}

pub fn category_of(label: &str) -> Option<&'static Category> {
    FieldRegistry::global().category_of(label)
}

pub fn resolve(label: &str) -> Option<FieldType> {
    FieldRegistry::global().resolve(label)
}
