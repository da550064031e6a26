use thiserror::Error;
use tokio::task::JoinError;
use crate::plot::PlotError;
use crate::workbook::WorkbookError;

#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IO(String),

    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IO(err.to_string())
    }
}

/// Why a submission produced no chart.
///
/// Every variant is recoverable: it is shown to the user next to the form
/// and never takes the process down.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("No file part in the submission")]
    MissingFile,

    #[error("File part has an empty filename")]
    EmptyFilename,

    #[error("Upload exceeds the {0} byte limit")]
    UploadTooLarge(usize),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Column name is blank")]
    MissingColumnName,

    #[error("Reference parameters are not numbers: mean={mean:?}, std_dev={std_dev:?}")]
    InvalidReferenceParams { mean: String, std_dev: String },

    #[error("Reference standard deviation is not positive: {0}")]
    NonPositiveStdDev(f64),

    #[error("Column '{0}' not found")]
    ColumnNotFound(String),

    #[error("Column '{0}' has no numeric values")]
    EmptyNumericColumn(String),

    #[error("Unexpected processing error: {0}")]
    Unexpected(String),
}

impl AnalysisError {
    /// Stable machine-readable tag.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::MissingFile => "missing_file",
            AnalysisError::EmptyFilename => "empty_filename",
            AnalysisError::UploadTooLarge(_) => "upload_too_large",
            AnalysisError::UnsupportedFormat(_) => "unsupported_format",
            AnalysisError::MissingColumnName => "missing_column_name",
            AnalysisError::InvalidReferenceParams { .. } => "invalid_reference_params",
            AnalysisError::NonPositiveStdDev(_) => "non_positive_std_dev",
            AnalysisError::ColumnNotFound(_) => "column_not_found",
            AnalysisError::EmptyNumericColumn(_) => "empty_numeric_column",
            AnalysisError::Unexpected(_) => "unexpected_processing_error",
        }
    }

    /// The message shown to the user.
    ///
    /// Internal detail of unexpected failures is only included when
    /// `expose_detail` is set; otherwise it goes to the log alone.
    pub fn user_message(&self, expose_detail: bool) -> String {
        match self {
            AnalysisError::MissingFile => {
                "No file was attached. Please select an Excel file.".to_string()
            }
            AnalysisError::EmptyFilename => {
                "No file was selected. Please select an Excel file.".to_string()
            }
            AnalysisError::UploadTooLarge(_) => {
                "The uploaded file exceeds the maximum upload size.".to_string()
            }
            AnalysisError::UnsupportedFormat(_) => {
                "Unsupported file format. Please upload an .xlsx or .xls file.".to_string()
            }
            AnalysisError::MissingColumnName => {
                "Please enter the name of the column to analyze.".to_string()
            }
            AnalysisError::InvalidReferenceParams { .. } => {
                "The reference mean and standard deviation must be valid numbers.".to_string()
            }
            AnalysisError::NonPositiveStdDev(_) => {
                "The reference standard deviation must be a positive number greater than zero."
                    .to_string()
            }
            AnalysisError::ColumnNotFound(column) => {
                format!("Column '{}' was not found in the Excel file.", column)
            }
            AnalysisError::EmptyNumericColumn(column) => {
                format!("Column '{}' contains no valid numeric data to analyze.", column)
            }
            AnalysisError::Unexpected(detail) if expose_detail => {
                format!("An error occurred while processing the file or generating the plot: {}", detail)
            }
            AnalysisError::Unexpected(_) => {
                "An error occurred while processing the file or generating the plot.".to_string()
            }
        }
    }

    /// True for failures caused by the submitted input rather than the server.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, AnalysisError::Unexpected(_))
    }
}

impl From<WorkbookError> for AnalysisError {
    fn from(err: WorkbookError) -> Self {
        AnalysisError::Unexpected(err.to_string())
    }
}

impl From<PlotError> for AnalysisError {
    fn from(err: PlotError) -> Self {
        AnalysisError::Unexpected(err.to_string())
    }
}

impl From<JoinError> for AnalysisError {
    fn from(err: JoinError) -> Self {
        AnalysisError::Unexpected(err.to_string())
    }
}
