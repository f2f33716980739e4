use crate::dataset::DataSet;
use crate::errors::SynthesisError;

/// Pretty-printed JSON object of field type -> full value array, selection order kept.
pub fn export_json(dataset: &DataSet) -> Result<String, SynthesisError> {
    Ok(serde_json::to_string_pretty(dataset)?)
}

#[cfg(test)]
mod tests {
    use mockdata_core::FieldType;

    use super::*;

    #[test]
    fn keeps_selection_order_and_indent() {
        let mut dataset = DataSet::new(1);
        dataset.insert(FieldType::from("Zip Code"), vec!["12345".to_string()]);
        dataset.insert(FieldType::from("Age"), vec!["42".to_string()]);

        let json = export_json(&dataset).expect("json");
        assert_eq!(
            json,
            "{\n  \"Zip Code\": [\n    \"12345\"\n  ],\n  \"Age\": [\n    \"42\"\n  ]\n}"
        );
    }

    #[test]
    fn empty_dataset_is_empty_object() {
        assert_eq!(export_json(&DataSet::default()).expect("json"), "{}");
    }
}
