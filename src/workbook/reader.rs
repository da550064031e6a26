use std::io::Cursor;
use bytes::Bytes;
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use thiserror::Error;
use tracing::debug;
use crate::workbook::{CellValue, Table};

#[derive(Error, Debug, Clone)]
pub enum WorkbookError {
    #[error("Failed to open workbook: {0}")]
    Open(String),

    #[error("Workbook contains no worksheets")]
    NoWorksheet,

    #[error("Failed to read worksheet: {0}")]
    Worksheet(String),
}

/// Turns uploaded spreadsheet bytes into a [`Table`].
pub trait WorkbookReader: Send + Sync {
    fn read_table(&self, data: Bytes) -> Result<Table, WorkbookError>;
}

/// Reads the first worksheet of `.xlsx`/`.xls` (and the other formats
/// calamine detects) from memory.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalamineReader;

impl WorkbookReader for CalamineReader {
    fn read_table(&self, data: Bytes) -> Result<Table, WorkbookError> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(data))
            .map_err(|e| WorkbookError::Open(e.to_string()))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or(WorkbookError::NoWorksheet)?
            .map_err(|e| WorkbookError::Worksheet(e.to_string()))?;

        let rows: Vec<Vec<CellValue>> = range
            .rows()
            .map(|row| row.iter().map(cell_value).collect())
            .collect();

        let table = Table::from_rows(rows);
        debug!(
            "Read worksheet with {} columns and {} data rows",
            table.headers().len(),
            table.row_count()
        );

        Ok(table)
    }
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Int(v) => CellValue::Number(*v as f64),
        Data::Float(v) => CellValue::Number(*v),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Empty => CellValue::Empty,
        other => CellValue::Other(other.to_string()),
    }
}
