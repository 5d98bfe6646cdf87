use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;

use super::dto::{HistoryResponse, MessageResponse, SubmitSurveyRequest};
use super::services;
use crate::{
    auth::extractors::AuthUser, error::ApiError, forecast::dto::SeriesPoint, state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/submit", post(submit_survey))
        .route("/forecast", get(get_history))
}

#[instrument(skip(state, body))]
pub async fn submit_survey(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<SubmitSurveyRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    services::submit(&state.db, &user_id, body.rating).await?;
    Ok(Json(MessageResponse {
        message: "Survey saved successfully!".into(),
    }))
}

#[instrument(skip(state))]
pub async fn get_history(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<HistoryResponse>, ApiError> {
    let entries = services::history(&state.db, &user_id).await?;
    let message = if entries.is_empty() {
        "No data available"
    } else {
        "History loaded"
    };
    let predictions: Vec<SeriesPoint> = entries.iter().map(SeriesPoint::from).collect();
    Ok(Json(HistoryResponse {
        success: true,
        predictions,
        message: message.into(),
    }))
}
