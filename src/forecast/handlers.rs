use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;

use super::dto::{current_weekday_name, SeriesPoint};
use crate::{
    auth::extractors::AuthUser,
    error::ApiError,
    state::AppState,
    survey::{dto::MessageResponse, services},
};

const FORECAST_PERIODS: u32 = 7;
const MIN_POINTS_FOR_FORECAST: usize = 2;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/dump-to-model", post(dump_to_model))
        .route("/predict-future", get(predict_future))
        .route("/staffing", get(staffing))
}

#[instrument(skip(state))]
pub async fn dump_to_model(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<MessageResponse>, ApiError> {
    let entries = services::history(&state.db, &user_id).await?;
    if entries.is_empty() {
        return Err(ApiError::NoData("No data available for this user.".into()));
    }

    let points: Vec<SeriesPoint> = entries.iter().map(SeriesPoint::from).collect();
    state.forecast.receive_data(&points).await?;

    Ok(Json(MessageResponse {
        message: format!("Data dumped successfully to {}", state.forecast.base_url()),
    }))
}

#[instrument(skip(state))]
pub async fn predict_future(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Response, ApiError> {
    let entries = services::history(&state.db, &user_id).await?;
    // A single point cannot establish a trend.
    if entries.len() < MIN_POINTS_FOR_FORECAST {
        return Err(ApiError::InsufficientData(
            "Not enough data for prediction. Need at least 2 days of history.".into(),
        ));
    }

    let points: Vec<SeriesPoint> = entries.iter().map(SeriesPoint::from).collect();
    let body = state.forecast.predict(points, FORECAST_PERIODS).await?;
    Ok(relay_json(body))
}

#[instrument(skip(state))]
pub async fn staffing(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Response, ApiError> {
    let latest = services::latest(&state.db, &user_id).await?.ok_or_else(|| {
        ApiError::NoData(
            "No survey data found. Please submit a survey first to set your staffing capacity."
                .into(),
        )
    })?;

    let body = state
        .forecast
        .staffing(latest.rating, current_weekday_name())
        .await?;
    Ok(relay_json(body))
}

/// The forecast service's response body is passed through untouched.
fn relay_json(body: String) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}
