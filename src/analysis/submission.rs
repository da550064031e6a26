use bytes::Bytes;
use serde::Serialize;
use crate::constants::{ACCEPTED_EXTENSIONS, DEFAULT_REF_MEAN, DEFAULT_REF_STD_DEV};
use crate::stats::{ReferenceDistribution, ReferenceError};
use crate::AnalysisError;

#[derive(Debug, Clone)]
pub struct Upload {
    pub filename: String,
    pub data: Bytes,
}

/// The raw fields of one comparison request, as received.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    pub file: Option<Upload>,
    pub column_name: Option<String>,
    pub ref_mean: Option<String>,
    pub ref_std_dev: Option<String>,
}

/// Reference parameter strings sent back with every response so the user
/// does not retype them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EchoedParams {
    pub ref_mean: String,
    pub ref_std_dev: String,
}

impl Default for EchoedParams {
    fn default() -> Self {
        Self {
            ref_mean: DEFAULT_REF_MEAN.to_string(),
            ref_std_dev: DEFAULT_REF_STD_DEV.to_string(),
        }
    }
}

/// A submission that passed every check not requiring the workbook itself.
#[derive(Debug, Clone)]
pub struct ValidatedSubmission {
    pub upload: Upload,
    pub column: String,
    pub reference: ReferenceDistribution,
}

impl Submission {
    pub fn echoed_params(&self) -> EchoedParams {
        EchoedParams {
            ref_mean: trimmed_or(&self.ref_mean, DEFAULT_REF_MEAN),
            ref_std_dev: trimmed_or(&self.ref_std_dev, DEFAULT_REF_STD_DEV),
        }
    }

    /// Checks, in order: file present, filename present, extension,
    /// column name, reference parameters.
    pub fn validate(self) -> Result<ValidatedSubmission, AnalysisError> {
        let echoed = self.echoed_params();

        let upload = self.file.ok_or(AnalysisError::MissingFile)?;
        if upload.filename.is_empty() {
            return Err(AnalysisError::EmptyFilename);
        }
        if !has_accepted_extension(&upload.filename) {
            return Err(AnalysisError::UnsupportedFormat(upload.filename));
        }

        let column = self
            .column_name
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string();
        if column.is_empty() {
            return Err(AnalysisError::MissingColumnName);
        }

        let reference = parse_reference(&echoed.ref_mean, &echoed.ref_std_dev)?;

        Ok(ValidatedSubmission {
            upload,
            column,
            reference,
        })
    }
}

fn trimmed_or(value: &Option<String>, default: &str) -> String {
    value
        .as_deref()
        .map(|v| v.trim().to_string())
        .unwrap_or_else(|| default.to_string())
}

pub fn has_accepted_extension(filename: &str) -> bool {
    let lower = filename.to_ascii_lowercase();
    ACCEPTED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Parses the reference parameters typed into the form.
///
/// An unparseable or non-finite value is reported separately from a
/// standard deviation that is a valid number but not positive.
pub fn parse_reference(mean: &str, std_dev: &str) -> Result<ReferenceDistribution, AnalysisError> {
    let invalid = || AnalysisError::InvalidReferenceParams {
        mean: mean.to_string(),
        std_dev: std_dev.to_string(),
    };

    let mean_value: f64 = mean.trim().parse().map_err(|_| invalid())?;
    let std_dev_value: f64 = std_dev.trim().parse().map_err(|_| invalid())?;

    ReferenceDistribution::new(mean_value, std_dev_value).map_err(|e| match e {
        ReferenceError::NonFinite { .. } => invalid(),
        ReferenceError::NonPositiveStdDev(v) => AnalysisError::NonPositiveStdDev(v),
    })
}
