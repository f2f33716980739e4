use crate::dataset::DataSet;

/// Each column as its label followed by one value per line; columns separated by a blank line.
pub fn export_text(dataset: &DataSet) -> String {
    dataset
        .columns()
        .iter()
        .map(|column| format!("{}\n{}", column.field_type, column.values.join("\n")))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use mockdata_core::FieldType;

    use super::*;

    #[test]
    fn copy_all_layout() {
        let mut dataset = DataSet::new(2);
        dataset.insert(
            FieldType::from("Name"),
            vec!["Ann".to_string(), "Bob".to_string()],
        );
        dataset.insert(FieldType::from("Age"), vec!["30".to_string(), "41".to_string()]);

        assert_eq!(export_text(&dataset), "Name\nAnn\nBob\n\nAge\n30\n41");
        assert_eq!(export_text(&DataSet::default()), "");
    }
}
