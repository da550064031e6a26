use bytes::Bytes;
use crate::analysis::*;
use crate::plot::DistributionComparator;
use crate::stats::ReferenceDistribution;
use crate::workbook::{CalamineReader, CellValue, Table, WorkbookError, WorkbookReader};
use crate::AnalysisError;
use super::helpers::sample_workbook;

/// Serves a fixed table regardless of the bytes it is given.
struct FixedReader(Table);

impl WorkbookReader for FixedReader {
    fn read_table(&self, _data: Bytes) -> Result<Table, WorkbookError> {
        Ok(self.0.clone())
    }
}

struct BrokenReader;

impl WorkbookReader for BrokenReader {
    fn read_table(&self, _data: Bytes) -> Result<Table, WorkbookError> {
        Err(WorkbookError::NoWorksheet)
    }
}

fn submission(filename: &str, column: &str, mean: &str, std_dev: &str) -> Submission {
    Submission {
        file: Some(Upload {
            filename: filename.to_string(),
            data: Bytes::from_static(b"xlsx"),
        }),
        column_name: Some(column.to_string()),
        ref_mean: Some(mean.to_string()),
        ref_std_dev: Some(std_dev.to_string()),
    }
}

fn standard_normal() -> ReferenceDistribution {
    ReferenceDistribution::new(0.0, 1.0).unwrap()
}

fn small_comparator() -> DistributionComparator {
    DistributionComparator::new(640, 420)
}

// --- Submission validation ---
#[test]
fn test_valid_submission() {
    let validated = submission("data.xlsx", "  Value ", " 1.5 ", "2").validate().unwrap();

    assert_eq!(validated.upload.filename, "data.xlsx");
    assert_eq!(validated.column, "Value");
    assert_eq!(validated.reference, ReferenceDistribution::new(1.5, 2.0).unwrap());
}

#[test]
fn test_accepted_extensions() {
    assert!(has_accepted_extension("data.xlsx"));
    assert!(has_accepted_extension("legacy.xls"));
    assert!(has_accepted_extension("UPPER.XLSX"));
    assert!(has_accepted_extension("Mixed.XlS"));

    assert!(!has_accepted_extension("data.csv"));
    assert!(!has_accepted_extension("data.xlsx.txt"));
    assert!(!has_accepted_extension("xlsx"));
}

#[test]
fn test_validation_errors() {
    let missing_file = Submission {
        file: None,
        ..submission("data.xlsx", "Value", "0", "1")
    };
    assert_eq!(missing_file.validate().unwrap_err(), AnalysisError::MissingFile);

    assert_eq!(
        submission("", "Value", "0", "1").validate().unwrap_err(),
        AnalysisError::EmptyFilename
    );
    assert_eq!(
        submission("data.csv", "Value", "0", "1").validate().unwrap_err(),
        AnalysisError::UnsupportedFormat("data.csv".to_string())
    );
    assert_eq!(
        submission("data.xlsx", "   ", "0", "1").validate().unwrap_err(),
        AnalysisError::MissingColumnName
    );
    assert_eq!(
        submission("data.xlsx", "Value", "abc", "1").validate().unwrap_err(),
        AnalysisError::InvalidReferenceParams {
            mean: "abc".to_string(),
            std_dev: "1".to_string()
        }
    );
    assert_eq!(
        submission("data.xlsx", "Value", "0", "0").validate().unwrap_err(),
        AnalysisError::NonPositiveStdDev(0.0)
    );
    assert_eq!(
        submission("data.xlsx", "Value", "0", "-2.5").validate().unwrap_err(),
        AnalysisError::NonPositiveStdDev(-2.5)
    );
}

#[test]
fn test_validation_order() {
    // Every field is wrong; the file check comes first
    let nothing = Submission {
        file: None,
        column_name: Some(String::new()),
        ref_mean: Some("x".to_string()),
        ref_std_dev: Some("0".to_string()),
    };
    assert_eq!(nothing.validate().unwrap_err(), AnalysisError::MissingFile);

    assert_eq!(
        submission("data.txt", "", "x", "0").validate().unwrap_err(),
        AnalysisError::UnsupportedFormat("data.txt".to_string())
    );
    assert_eq!(
        submission("data.xlsx", "", "x", "0").validate().unwrap_err(),
        AnalysisError::MissingColumnName
    );
}

#[test]
fn test_parse_reference() {
    assert_eq!(parse_reference("-3", "0.5").unwrap(), ReferenceDistribution::new(-3.0, 0.5).unwrap());
    assert_eq!(parse_reference(" 1e2 ", "\t4 ").unwrap(), ReferenceDistribution::new(100.0, 4.0).unwrap());

    assert!(matches!(parse_reference("", "1"), Err(AnalysisError::InvalidReferenceParams { .. })));
    assert!(matches!(parse_reference("0", "one"), Err(AnalysisError::InvalidReferenceParams { .. })));
    assert!(matches!(parse_reference("NaN", "1"), Err(AnalysisError::InvalidReferenceParams { .. })));
    assert!(matches!(parse_reference("0", "inf"), Err(AnalysisError::InvalidReferenceParams { .. })));
    assert_eq!(parse_reference("0", "-0").unwrap_err(), AnalysisError::NonPositiveStdDev(-0.0));
}

#[test]
fn test_echoed_params() {
    let typed = submission("data.xlsx", "Value", " 5 ", "abc ");
    assert_eq!(
        typed.echoed_params(),
        EchoedParams {
            ref_mean: "5".to_string(),
            ref_std_dev: "abc".to_string()
        }
    );

    let empty = Submission::default();
    assert_eq!(empty.echoed_params(), EchoedParams::default());
    assert_eq!(EchoedParams::default().ref_mean, "0");
    assert_eq!(EchoedParams::default().ref_std_dev, "1");
}

// --- Pipeline ---
#[test]
fn test_analyze_workbook_value_column() {
    let chart = analyze_workbook(
        &CalamineReader,
        &small_comparator(),
        Bytes::from(sample_workbook()),
        "Value",
        &standard_normal(),
    )
    .unwrap();

    assert_eq!(chart.model.label, "Value");
    assert_eq!(chart.model.data_legend(), "Normal curve (data): μ=3.00, σ=1.41");
    assert_eq!(chart.model.reference_legend(), "Reference curve: μ=0.00, σ=1.00");
    assert!(chart.image.data_uri.len() > "data:image/png;base64,".len());
}

#[test]
fn test_analyze_workbook_mixed_column() {
    let chart = analyze_workbook(
        &CalamineReader,
        &small_comparator(),
        Bytes::from(sample_workbook()),
        "Mixed",
        &standard_normal(),
    )
    .unwrap();

    // 4, " 5 " and TRUE survive coercion
    assert_eq!(chart.model.histogram.total_observations, 3);
    assert!((chart.model.data.mean - 10.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_analyze_workbook_column_errors() {
    let missing = analyze_workbook(
        &CalamineReader,
        &small_comparator(),
        Bytes::from(sample_workbook()),
        "Missing",
        &standard_normal(),
    );
    assert_eq!(missing.unwrap_err(), AnalysisError::ColumnNotFound("Missing".to_string()));

    // Lookup is exact
    let wrong_case = analyze_workbook(
        &CalamineReader,
        &small_comparator(),
        Bytes::from(sample_workbook()),
        "value",
        &standard_normal(),
    );
    assert_eq!(wrong_case.unwrap_err(), AnalysisError::ColumnNotFound("value".to_string()));

    let text_only = analyze_workbook(
        &CalamineReader,
        &small_comparator(),
        Bytes::from(sample_workbook()),
        "Label",
        &standard_normal(),
    );
    assert_eq!(text_only.unwrap_err(), AnalysisError::EmptyNumericColumn("Label".to_string()));
}

#[test]
fn test_analyze_workbook_with_custom_reader() {
    let table = Table::from_rows(vec![
        vec![CellValue::Text("x".to_string())],
        vec![CellValue::Number(7.0)],
        vec![CellValue::Number(7.0)],
    ]);

    let chart = analyze_workbook(
        &FixedReader(table),
        &small_comparator(),
        Bytes::new(),
        "x",
        &standard_normal(),
    )
    .unwrap();
    assert_eq!(chart.model.data.std_dev, 0.0);

    let failed = analyze_workbook(
        &BrokenReader,
        &small_comparator(),
        Bytes::new(),
        "x",
        &standard_normal(),
    );
    assert!(matches!(failed, Err(AnalysisError::Unexpected(_))));
}

#[test]
fn test_plot_workbook_file() {
    let dir = std::env::temp_dir().join(format!("normcurve-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let input = dir.join("sample.xlsx");
    let output = dir.join("chart.png");
    std::fs::write(&input, sample_workbook()).unwrap();

    let chart = plot_workbook_file(&input, "Value", &standard_normal(), &output).unwrap();

    let written = std::fs::read(&output).unwrap();
    assert_eq!(written, chart.image.png_bytes().unwrap());
    let decoded = image::load_from_memory(&written).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (1200, 700));

    let missing = plot_workbook_file(&dir.join("absent.xlsx"), "Value", &standard_normal(), &output);
    assert!(matches!(missing, Err(crate::Error::IO(_))));

    std::fs::remove_dir_all(&dir).ok();
}
