use crate::error::{ProcessingError, Result};
use crate::utils::constants::NULL_MARKERS;

/// An in-memory table of raw field values; `None` marks a missing value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl RowTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        Self { headers, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.headers.len())
    }

    /// Position of the first column with this name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| ProcessingError::MissingColumn(name.to_string()))
    }

    /// Narrow the table to the named columns, in the order given
    pub fn select(&self, columns: &[String]) -> Result<RowTable> {
        let indices = columns
            .iter()
            .map(|c| self.require_column(c))
            .collect::<Result<Vec<_>>>()?;

        let rows = self
            .rows
            .iter()
            .map(|row| indices.iter().map(|&i| row.get(i).cloned().flatten()).collect())
            .collect();

        Ok(RowTable::new(columns.to_vec(), rows))
    }

    /// Keep only rows whose value in `column` is present
    pub fn drop_null(&self, column: &str) -> Result<RowTable> {
        let index = self.require_column(column)?;

        let rows = self
            .rows
            .iter()
            .filter(|row| matches!(row.get(index), Some(Some(_))))
            .cloned()
            .collect();

        Ok(RowTable::new(self.headers.clone(), rows))
    }

    /// Render a row the way the debug log shows it
    pub fn format_row(&self, index: usize) -> Option<String> {
        let row = self.rows.get(index)?;
        let parts: Vec<String> = self
            .headers
            .iter()
            .zip(row)
            .map(|(name, value)| format!("{}={}", name, value.as_deref().unwrap_or("NaN")))
            .collect();
        Some(parts.join(", "))
    }
}

/// Convert a raw field into a table value, mapping null markers to `None`
pub fn to_value(raw: &str) -> Option<String> {
    if NULL_MARKERS.contains(&raw) {
        None
    } else {
        Some(raw.to_string())
    }
}
