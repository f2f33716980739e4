use crate::dataset::DataSet;

/// One table cell; `None` where the column has fewer values than the row index.
pub type Cell<'a> = Option<&'a str>;

/// One assembled row, a cell per column in selection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a> {
    pub cells: Vec<Cell<'a>>,
}

impl Row<'_> {
    /// Cells with missing values rendered as empty strings.
    pub fn rendered(&self) -> Vec<&str> {
        self.cells.iter().map(|cell| cell.unwrap_or("")).collect()
    }
}

/// `min(row_count, longest column)`.
pub fn effective_rows(dataset: &DataSet, row_count: usize) -> usize {
    row_count.min(dataset.longest_column())
}

/// Align the columns of `dataset` into at most `row_count` rows.
pub fn assemble(dataset: &DataSet, row_count: usize) -> Vec<Row<'_>> {
    (0..effective_rows(dataset, row_count))
        .map(|index| Row {
            cells: dataset
                .columns()
                .iter()
                .map(|column| column.values.get(index).map(String::as_str))
                .collect(),
        })
        .collect()
}
