use std::path::Path;
use bytes::Bytes;
use tracing::{debug, info};
use crate::plot::{ComparisonChart, DistributionComparator};
use crate::stats::{ReferenceDistribution, Sample};
use crate::workbook::{CalamineReader, WorkbookReader};
use crate::{AnalysisError, Error};

/// Reads the workbook, extracts the numeric values of `column` and renders
/// the comparison chart.
///
/// Runs synchronously; async callers move it onto the blocking pool.
pub fn analyze_workbook(
    reader: &dyn WorkbookReader,
    comparator: &DistributionComparator,
    data: Bytes,
    column: &str,
    reference: &ReferenceDistribution,
) -> Result<ComparisonChart, AnalysisError> {
    let table = reader.read_table(data)?;

    let cells = table.column(column).ok_or_else(|| {
        debug!("Column '{}' not among {:?}", column, table.headers());
        AnalysisError::ColumnNotFound(column.to_string())
    })?;

    let values = cells.numeric_values();
    debug!(
        "Column '{}': {} of {} cells numeric",
        column,
        values.len(),
        cells.cells.len()
    );

    // Coercion only yields finite values, so emptiness is the one failure left
    let sample = Sample::new(values)
        .map_err(|_| AnalysisError::EmptyNumericColumn(column.to_string()))?;

    let chart = comparator.render(&sample, reference, column)?;

    info!(
        "Rendered comparison for column '{}' ({} values, μ={:.4}, σ={:.4})",
        column,
        sample.len(),
        sample.mean(),
        sample.std_dev()
    );

    Ok(chart)
}

/// Runs the pipeline on a workbook on disk and writes the chart as PNG.
pub fn plot_workbook_file(
    input: &Path,
    column: &str,
    reference: &ReferenceDistribution,
    output: &Path,
) -> Result<ComparisonChart, Error> {
    let data = std::fs::read(input)?;

    let chart = analyze_workbook(
        &CalamineReader,
        &DistributionComparator::default(),
        Bytes::from(data),
        column,
        reference,
    )?;

    let png = chart.image.png_bytes().map_err(AnalysisError::from)?;
    std::fs::write(output, png)?;

    info!("Wrote comparison chart to {}", output.display());

    Ok(chart)
}
