use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};

use crate::errors::RuleError;
use crate::sheet::Worksheet;

const SHEET_NAME: &str = "Sheet1";

/// Single-worksheet CSV source/sink. The whole file is materialized at open;
/// rows keep their raw cell text and physical lengths.
pub struct CsvSheet {
    name: String,
    rows: Vec<Vec<String>>,
}

impl CsvSheet {
    pub fn open(path: &Path) -> Result<Self, RuleError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self {
            name: SHEET_NAME.to_string(),
            rows,
        })
    }
}

impl Worksheet for CsvSheet {
    fn name(&self) -> &str {
        &self.name
    }

    fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    fn set_cell(&mut self, row: usize, column: usize, value: &str) {
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let cells = &mut self.rows[row];
        if cells.len() <= column {
            cells.resize(column + 1, String::new());
        }
        cells[column] = value.to_string();
    }

    fn save_as(&self, path: &Path) -> Result<(), RuleError> {
        let mut writer = WriterBuilder::new().flexible(true).from_path(path)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}
