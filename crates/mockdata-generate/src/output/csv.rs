use mockdata_core::FieldType;
use tracing::debug;

use crate::assemble::{Row, assemble};
use crate::dataset::DataSet;
use crate::errors::SynthesisError;
use crate::output::CsvQuoting;

/// Header line plus one line per assembled row, `\n` separated, no trailing newline.
///
/// An empty data set renders as an empty string.
pub fn export_csv(
    dataset: &DataSet,
    row_count: usize,
    quoting: CsvQuoting,
) -> Result<String, SynthesisError> {
    if dataset.is_empty() {
        return Ok(String::new());
    }

    let rows = assemble(dataset, row_count);
    debug!(columns = dataset.len(), rows = rows.len(), ?quoting, "exporting csv");
    match quoting {
        CsvQuoting::None => Ok(write_plain(dataset, &rows)),
        CsvQuoting::Rfc4180 => write_quoted(dataset, &rows),
    }
}

fn write_plain(dataset: &DataSet, rows: &[Row<'_>]) -> String {
    let header: Vec<&str> = dataset.field_types().map(FieldType::as_str).collect();
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(header.join(","));
    lines.extend(rows.iter().map(|row| row.rendered().join(",")));
    lines.join("\n")
}

fn write_quoted(dataset: &DataSet, rows: &[Row<'_>]) -> Result<String, SynthesisError> {
    let header: Vec<&str> = dataset.field_types().map(FieldType::as_str).collect();
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(quote_record(&header)?);
    for row in rows {
        lines.push(quote_record(&row.rendered())?);
    }
    Ok(lines.join("\n"))
}

/// One record without its terminator. A lone empty field stays an empty line
/// instead of the `""` the csv writer emits for it.
fn quote_record(fields: &[&str]) -> Result<String, SynthesisError> {
    if matches!(fields, [only] if only.is_empty()) {
        return Ok(String::new());
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(fields)?;

    let bytes = writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))?;
    let mut line = String::from_utf8(bytes)?;
    if line.ends_with('\n') {
        line.pop();
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> DataSet {
        let mut dataset = DataSet::new(2);
        dataset.insert(
            FieldType::from("Name"),
            vec!["Doe, Jane".to_string(), "Bob".to_string()],
        );
        dataset.insert(FieldType::from("Sentence"), vec!["Say \"hi\".".to_string()]);
        dataset
    }

    #[test]
    fn plain_mode_writes_values_verbatim() {
        let csv = export_csv(&dataset(), 2, CsvQuoting::None).expect("csv");
        assert_eq!(csv, "Name,Sentence\nDoe, Jane,Say \"hi\".\nBob,");
    }

    #[test]
    fn rfc4180_mode_quotes_special_values() {
        let csv = export_csv(&dataset(), 2, CsvQuoting::Rfc4180).expect("csv");
        assert_eq!(csv, "Name,Sentence\n\"Doe, Jane\",\"Say \"\"hi\"\".\"\nBob,");
    }

    #[test]
    fn single_column_blanks_are_empty_lines_in_both_modes() {
        let mut dataset = DataSet::new(2);
        dataset.insert(
            FieldType::from("Name"),
            vec!["Ann".to_string(), String::new()],
        );

        let plain = export_csv(&dataset, 2, CsvQuoting::None).expect("csv");
        let quoted = export_csv(&dataset, 2, CsvQuoting::Rfc4180).expect("csv");
        assert_eq!(plain, "Name\nAnn\n");
        assert_eq!(quoted, plain);
    }

    #[test]
    fn empty_dataset_is_empty_document() {
        let csv = export_csv(&DataSet::default(), 10, CsvQuoting::Rfc4180).expect("csv");
        assert!(csv.is_empty());
    }
}
