use std::sync::Arc;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    response::Html,
};
use crate::{
    api::handlers::common::run_submission,
    api::page::PageView,
    AppState,
};

pub async fn show_form() -> Html<String> {
    Html(PageView::default().render())
}

/// Form post: always answers with the page, carrying either the chart or
/// the error message, plus the reference values the user typed.
pub async fn submit_form(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Html<String> {
    let outcome = run_submission(&state, multipart).await;

    let view = match outcome.result {
        Ok(chart) => PageView::with_plot(chart.image.data_uri, outcome.params),
        Err(e) => PageView::with_error(
            e.user_message(state.config.expose_error_detail),
            outcome.params,
        ),
    };

    Html(view.render())
}

