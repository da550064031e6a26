use std::sync::Arc;
use axum::extract::multipart::{Multipart, MultipartError, MultipartRejection};
use axum::http::StatusCode;
use tracing::{error, info, warn};
use crate::analysis::{analyze_workbook, EchoedParams, Submission, Upload};
use crate::constants::{FIELD_COLUMN, FIELD_FILE, FIELD_REF_MEAN, FIELD_REF_STD_DEV};
use crate::plot::ComparisonChart;
use crate::{AnalysisError, AppState};

/// Result of one submission plus the parameter strings to echo back.
pub struct Outcome {
    pub params: EchoedParams,
    pub result: Result<ComparisonChart, AnalysisError>,
}

/// Reads the multipart form, validates it and runs the comparison.
///
/// Every failure ends up in `Outcome::result`; nothing here panics or
/// propagates past the handler.
pub async fn run_submission(
    state: &AppState,
    multipart: Result<Multipart, MultipartRejection>,
) -> Outcome {
    let mut submission = Submission::default();

    let read = match multipart {
        Ok(mut multipart) => read_fields(&mut multipart, &mut submission)
            .await
            .map_err(|e| match e.status() {
                StatusCode::PAYLOAD_TOO_LARGE => {
                    AnalysisError::UploadTooLarge(state.config.max_upload_bytes)
                }
                _ => AnalysisError::Unexpected(format!("Failed to read upload: {}", e)),
            }),
        Err(rejection) => {
            // Not a multipart body at all: there is no file part to find
            warn!("Submission is not multipart form data: {}", rejection);
            Ok(())
        }
    };

    let params = submission.echoed_params();
    let result = match read {
        Ok(()) => process(state, submission).await,
        Err(e) => Err(e),
    };

    match &result {
        Ok(chart) => info!(
            "Comparison succeeded for column '{}' ({} values)",
            chart.model.label, chart.model.histogram.total_observations
        ),
        Err(e) if e.is_input_error() => warn!("Rejected submission ({}): {}", e.kind(), e),
        Err(e) => error!("Submission failed: {}", e),
    }

    Outcome { params, result }
}

async fn read_fields(
    multipart: &mut Multipart,
    submission: &mut Submission,
) -> Result<(), MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            // A part without a filename is a plain form value, not an upload
            FIELD_FILE => {
                if let Some(filename) = field.file_name().map(str::to_string) {
                    let data = field.bytes().await?;
                    submission.file = Some(Upload { filename, data });
                }
            }
            FIELD_COLUMN => submission.column_name = Some(field.text().await?),
            FIELD_REF_MEAN => submission.ref_mean = Some(field.text().await?),
            FIELD_REF_STD_DEV => submission.ref_std_dev = Some(field.text().await?),
            _ => {}
        }
    }

    Ok(())
}

async fn process(
    state: &AppState,
    submission: Submission,
) -> Result<ComparisonChart, AnalysisError> {
    let validated = submission.validate()?;

    let reader = Arc::clone(&state.reader);
    let comparator = state.comparator;

    tokio::task::spawn_blocking(move || {
        analyze_workbook(
            reader.as_ref(),
            &comparator,
            validated.upload.data,
            &validated.column,
            &validated.reference,
        )
    })
    .await?
}
