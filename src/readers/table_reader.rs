use crate::error::{ProcessingError, Result};
use crate::models::table::{to_value, RowTable};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Loads a delimited text file into a `RowTable`
pub struct TableReader {
    separator: u8,
    skip_rows: usize,
}

impl TableReader {
    pub fn new() -> Self {
        Self {
            separator: b',',
            skip_rows: 0,
        }
    }

    pub fn with_separator(mut self, separator: u8) -> Self {
        self.separator = separator;
        self
    }

    pub fn with_skip_rows(mut self, skip_rows: usize) -> Self {
        self.skip_rows = skip_rows;
        self
    }

    /// Read a table from disk; the first line after the skipped rows is the header
    pub fn read_table(&self, path: &Path) -> Result<RowTable> {
        debug!("loading data from input file {}", path.display());
        let file = File::open(path)?;
        self.read_from(BufReader::new(file))
    }

    /// Read a table from any buffered source
    pub fn read_from<R: BufRead>(&self, mut reader: R) -> Result<RowTable> {
        let mut skipped = String::new();
        for line_number in 1..=self.skip_rows {
            skipped.clear();
            if reader.read_line(&mut skipped)? == 0 {
                return Err(ProcessingError::InvalidFormat(format!(
                    "Input ended at line {} while skipping {} rows",
                    line_number, self.skip_rows
                )));
            }
        }

        self.parse_csv(reader)
    }

    fn parse_csv<R: Read>(&self, reader: R) -> Result<RowTable> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.separator)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();
        if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
            return Err(ProcessingError::InvalidFormat(
                "Input has no header line".to_string(),
            ));
        }

        let mut rows = Vec::new();
        for record_result in csv_reader.records() {
            let record = record_result?;

            if record.len() > headers.len() {
                let line = record
                    .position()
                    .map(|p| (p.line() + self.skip_rows as u64).to_string())
                    .unwrap_or_else(|| "?".to_string());
                return Err(ProcessingError::InvalidFormat(format!(
                    "Line {} has {} fields, expected {}",
                    line,
                    record.len(),
                    headers.len()
                )));
            }

            let mut row: Vec<Option<String>> = record.iter().map(to_value).collect();
            row.resize(headers.len(), None);
            rows.push(row);
        }

        Ok(RowTable::new(headers, rows))
    }
}

impl Default for TableReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_table_file() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "id,loc,name")?;
        writeln!(temp_file, "1,36000000N0079000000W,first")?;
        writeln!(temp_file, "2,,second")?;

        let table = TableReader::new().read_table(temp_file.path())?;

        assert_eq!(table.headers, vec!["id", "loc", "name"]);
        assert_eq!(table.shape(), (2, 3));
        assert_eq!(table.rows[0][1].as_deref(), Some("36000000N0079000000W"));
        assert_eq!(table.rows[1][1], None);

        Ok(())
    }

    #[test]
    fn test_skip_rows_and_separator() -> Result<()> {
        let input = "exported by station network\nversion 2\nid;loc\n7;51507400N0000127800W\n";
        let table = TableReader::new()
            .with_separator(b';')
            .with_skip_rows(2)
            .read_from(Cursor::new(input))?;

        assert_eq!(table.headers, vec!["id", "loc"]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows[0][0].as_deref(), Some("7"));

        Ok(())
    }

    #[test]
    fn test_short_rows_padded_with_nulls() -> Result<()> {
        let input = "id,loc,name\n1\n";
        let table = TableReader::new().read_from(Cursor::new(input))?;

        assert_eq!(table.rows[0], vec![Some("1".to_string()), None, None]);

        Ok(())
    }

    #[test]
    fn test_long_rows_rejected() {
        let input = "id,loc\n1,2,3\n";
        let result = TableReader::new().read_from(Cursor::new(input));

        assert!(matches!(result, Err(ProcessingError::InvalidFormat(_))));
    }

    #[test]
    fn test_skip_past_end_of_input() {
        let input = "id,loc\n";
        let result = TableReader::new()
            .with_skip_rows(3)
            .read_from(Cursor::new(input));

        assert!(matches!(result, Err(ProcessingError::InvalidFormat(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = TableReader::new().read_table(Path::new("does/not/exist.csv"));
        assert!(matches!(result, Err(ProcessingError::Io(_))));
    }
}
