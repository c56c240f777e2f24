use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::{error, info};
use xr_core::{ArticleRecord, Error};

use crate::AppState;

/// Turns a pipeline failure into a bare 500.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(error = %self.0, "Failed to collect articles");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

pub async fn list_articles(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ArticleRecord>>, ApiError> {
    let window = state.window();
    info!("📅 Fetching XR/AI news from {}...", window);

    let records = state.manager.collect(&window).await?;
    Ok(Json(records))
}
