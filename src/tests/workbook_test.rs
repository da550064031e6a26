use bytes::Bytes;
use crate::workbook::*;
use super::helpers::{sample_workbook, xlsx_bytes, TestCell};

fn text(s: &str) -> CellValue {
    CellValue::Text(s.to_string())
}

#[test]
fn test_cell_coercion() {
    assert_eq!(CellValue::Number(2.5).as_number(), Some(2.5));
    assert_eq!(CellValue::Bool(true).as_number(), Some(1.0));
    assert_eq!(CellValue::Bool(false).as_number(), Some(0.0));
    assert_eq!(text(" 3.25 ").as_number(), Some(3.25));
    assert_eq!(text("-1e3").as_number(), Some(-1000.0));

    assert_eq!(text("abc").as_number(), None);
    assert_eq!(text("").as_number(), None);
    assert_eq!(text("NaN").as_number(), None);
    assert_eq!(text("inf").as_number(), None);
    assert_eq!(CellValue::Number(f64::NAN).as_number(), None);
    assert_eq!(CellValue::Empty.as_number(), None);
    assert_eq!(CellValue::Other("2024-01-31".to_string()).as_number(), None);
}

#[test]
fn test_table_header_names() {
    let table = Table::from_rows(vec![
        vec![text("a"), text("a"), CellValue::Empty, text("a"), CellValue::Number(2024.0), text("b")],
        vec![CellValue::Number(1.0)],
    ]);

    assert_eq!(table.headers(), vec!["a", "a.1", "Unnamed: 2", "a.2", "2024", "b"]);
    assert_eq!(table.row_count(), 1);

    // Short rows are padded
    let b = table.column("b").unwrap();
    assert_eq!(b.cells, vec![CellValue::Empty]);

    assert!(table.column("A").is_none());
    assert!(table.column(" a").is_none());
}

#[test]
fn test_table_without_rows() {
    let table = Table::from_rows(Vec::new());
    assert!(table.headers().is_empty());
    assert_eq!(table.row_count(), 0);
    assert!(table.column("anything").is_none());
}

#[test]
fn test_calamine_reads_first_sheet() {
    let table = CalamineReader
        .read_table(Bytes::from(sample_workbook()))
        .unwrap();

    assert_eq!(table.headers(), vec!["Value", "Label", "Mixed"]);
    assert_eq!(table.row_count(), 5);

    let value = table.column("Value").unwrap();
    assert_eq!(value.numeric_values(), vec![1.0, 2.0, 3.0, 4.0, 5.0]);

    let label = table.column("Label").unwrap();
    assert!(label.numeric_values().is_empty());

    // junk text and the blank are dropped; numeric text and the boolean kept
    let mixed = table.column("Mixed").unwrap();
    assert_eq!(mixed.numeric_values(), vec![4.0, 5.0, 1.0]);
}

#[test]
fn test_calamine_duplicate_headers() {
    use TestCell::*;
    let data = xlsx_bytes(&[
        vec![Str("score"), Str("score"), Blank, Str("other")],
        vec![Num(1.0), Num(10.0), Num(100.0), Num(1000.0)],
    ]);

    let table = CalamineReader.read_table(Bytes::from(data)).unwrap();

    assert_eq!(table.headers(), vec!["score", "score.1", "Unnamed: 2", "other"]);
    assert_eq!(table.column("score.1").unwrap().numeric_values(), vec![10.0]);
    assert_eq!(table.column("Unnamed: 2").unwrap().numeric_values(), vec![100.0]);
}

#[test]
fn test_calamine_rejects_garbage() {
    let result = CalamineReader.read_table(Bytes::from_static(b"definitely not a workbook"));
    assert!(matches!(result, Err(WorkbookError::Open(_))));
}
