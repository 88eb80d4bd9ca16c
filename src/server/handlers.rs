//! API handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::types::{AnalyzeRequest, AppState, ErrorResponse};
use crate::error_handling::ServerError;
use crate::fetch::Fetcher;

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// `POST /api/analyze`
///
/// Rejects a missing, null or blank `url` with 400 before the analyzer runs.
/// Everything else returns 200, including pages that could not be fetched.
pub async fn analyze_handler<F: Fetcher + 'static>(
    State(state): State<AppState<F>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Response, ServerError> {
    let Json(request) = payload.map_err(|rejection| {
        log::debug!("Rejected analyze request body: {}", rejection);
        ServerError::InvalidBody(rejection.body_text())
    })?;

    let url = request
        .url
        .filter(|url| !url.trim().is_empty())
        .ok_or(ServerError::MissingUrl)?;

    log::debug!("Analyze request for {}", url);
    let result = state.analyzer.analyze(&url).await;
    Ok((StatusCode::OK, Json(result)).into_response())
}
