use std::collections::HashMap;

/// A worksheet cell, detached from the spreadsheet library that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Number(f64),
    Bool(bool),
    Text(String),
    /// Dates, durations and error cells; never numeric
    Other(String),
}

impl CellValue {
    /// Numeric coercion of a single cell; `None` drops the cell.
    ///
    /// Numbers pass through, booleans become 1/0 and text is parsed after
    /// trimming. Anything non-finite is dropped as well.
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            CellValue::Number(v) => *v,
            CellValue::Bool(b) => {
                if *b { 1.0 } else { 0.0 }
            }
            CellValue::Text(s) => s.trim().parse::<f64>().ok()?,
            CellValue::Empty | CellValue::Other(_) => return None,
        };

        value.is_finite().then_some(value)
    }

    fn header_text(&self, index: usize) -> String {
        match self {
            CellValue::Empty => format!("Unnamed: {}", index),
            CellValue::Number(v) if v.fract() == 0.0 && v.abs() < 1e15 => format!("{}", *v as i64),
            CellValue::Number(v) => v.to_string(),
            CellValue::Bool(b) => if *b { "True".to_string() } else { "False".to_string() },
            CellValue::Text(s) if s.is_empty() => format!("Unnamed: {}", index),
            CellValue::Text(s) | CellValue::Other(s) => s.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub cells: Vec<CellValue>,
}

impl Column {
    /// The column's values after coercion, non-numeric cells removed.
    pub fn numeric_values(&self) -> Vec<f64> {
        self.cells.iter().filter_map(CellValue::as_number).collect()
    }
}

/// A worksheet read as a header row plus named columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Builds a table from raw rows; the first row is the header.
    ///
    /// Repeated header names get `.1`, `.2`, ... suffixes in order of
    /// appearance so every column stays addressable. Short rows are padded
    /// with empty cells.
    pub fn from_rows(rows: Vec<Vec<CellValue>>) -> Self {
        let mut rows = rows.into_iter();
        let Some(header) = rows.next() else {
            return Self::default();
        };

        let mut seen: HashMap<String, usize> = HashMap::new();
        let mut columns: Vec<Column> = header
            .iter()
            .enumerate()
            .map(|(index, cell)| {
                let base = cell.header_text(index);
                let name = match seen.get_mut(&base) {
                    Some(count) => {
                        *count += 1;
                        format!("{}.{}", base, count)
                    }
                    None => {
                        seen.insert(base.clone(), 0);
                        base
                    }
                };
                Column {
                    name,
                    cells: Vec::new(),
                }
            })
            .collect();

        for row in rows {
            let mut row = row.into_iter();
            for column in columns.iter_mut() {
                column.cells.push(row.next().unwrap_or(CellValue::Empty));
            }
        }

        Self { columns }
    }

    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Exact-match lookup by header name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.cells.len())
    }
}
