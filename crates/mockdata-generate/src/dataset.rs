use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

use mockdata_core::FieldType;

/// Values generated for one selected field type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub field_type: FieldType,
    pub values: Vec<String>,
}

/// Ordered field type -> values mapping produced by one generation request.
///
/// Columns keep selection order. Serializes as a JSON object whose keys
/// follow that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataSet {
    columns: Vec<Column>,
    requested_count: usize,
}

impl DataSet {
    pub fn new(requested_count: usize) -> Self {
        Self {
            columns: Vec::new(),
            requested_count,
        }
    }

    /// Add a column. A column with the same key (case-insensitive) is replaced in place.
    pub fn insert(&mut self, field_type: FieldType, values: Vec<String>) {
        let key = field_type.key();
        match self
            .columns
            .iter_mut()
            .find(|column| column.field_type.key() == key)
        {
            Some(column) => {
                column.field_type = field_type;
                column.values = values;
            }
            None => self.columns.push(Column { field_type, values }),
        }
    }

    pub fn get(&self, field_type: &str) -> Option<&[String]> {
        let key = mockdata_core::normalize_key(field_type);
        self.columns
            .iter()
            .find(|column| column.field_type.key() == key)
            .map(|column| column.values.as_slice())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn field_types(&self) -> impl Iterator<Item = &FieldType> {
        self.columns.iter().map(|column| &column.field_type)
    }

    /// Count the set was generated with; columns may be shorter after edits.
    pub fn requested_count(&self) -> usize {
        self.requested_count
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Length of the longest column, 0 when there are none.
    pub fn longest_column(&self) -> usize {
        self.columns
            .iter()
            .map(|column| column.values.len())
            .max()
            .unwrap_or(0)
    }

    /// SHA-256 over labels and values, hex encoded. Stable for equal data sets.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for column in &self.columns {
            hasher.update(column.field_type.as_str().as_bytes());
            hasher.update([0x1e]);
            for value in &column.values {
                hasher.update(value.as_bytes());
                hasher.update([0x1f]);
            }
            hasher.update([0x1d]);
        }
        hex::encode(hasher.finalize())
    }
}

impl Serialize for DataSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for column in &self.columns {
            map.serialize_entry(column.field_type.as_str(), &column.values)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for DataSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DataSetVisitor;

        impl<'de> Visitor<'de> for DataSetVisitor {
            type Value = DataSet;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of field type to value arrays")
            }

            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut dataset = DataSet::default();
                while let Some((label, values)) = map.next_entry::<String, Vec<String>>()? {
                    dataset.insert(FieldType::new(label), values);
                }
                dataset.requested_count = dataset.longest_column();
                Ok(dataset)
            }
        }

        deserializer.deserialize_map(DataSetVisitor)
    }
}
