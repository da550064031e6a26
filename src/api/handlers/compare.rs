use std::sync::Arc;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use crate::{
    api::handlers::common::run_submission,
    AnalysisError, AppState, ComparisonResponse, ErrorResponse,
};

pub async fn compare(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let outcome = run_submission(&state, multipart).await;

    match outcome.result {
        Ok(chart) => (
            StatusCode::OK,
            Json(ComparisonResponse::new(chart, outcome.params)),
        )
            .into_response(),
        Err(e) => (
            status_for(&e),
            Json(ErrorResponse::new(&e, outcome.params, state.config.expose_error_detail)),
        )
            .into_response(),
    }
}

pub fn status_for(error: &AnalysisError) -> StatusCode {
    match error {
        AnalysisError::ColumnNotFound(_) | AnalysisError::EmptyNumericColumn(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        AnalysisError::UploadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
        AnalysisError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_REQUEST,
    }
}
