use std::time::{Duration, Instant};

use axum::extract::State;
use woltie_core::domain::dish_analysis::{
    entities::DishAnalysis, ports::DishAnalysisService, value_objects::AnalyzeDishInput,
};

use crate::application::http::{
    dish_analysis::validators::AnalyzeDishRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

/// Seconds rounded to two decimals.
pub fn rounded_seconds(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 100.0).round() / 100.0
}

#[utoipa::path(
    post,
    path = "/analyze-dish",
    tag = "dish-analysis",
    summary = "Analyze a dish photo",
    description = "Profiles the dish in a photo (given by URL or inline base64) together with its menu title and description.",
    responses(
        (status = 200, body = DishAnalysis),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    ),
    request_body = AnalyzeDishRequest
)]
pub async fn analyze_dish(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeDishRequest>,
) -> Result<Response<DishAnalysis>, ApiError> {
    let started = Instant::now();

    let mut analysis = state
        .service
        .analyze_dish(AnalyzeDishInput {
            title: payload.title,
            description: payload.description,
            image_url: payload.image_url,
            image_base64: payload.image_base64,
            user_preferences: payload.user_preferences.unwrap_or_default(),
            known_dishes: payload.known_dishes.unwrap_or_default(),
        })
        .await
        .map_err(ApiError::from)?;

    analysis.processing_time_seconds = Some(rounded_seconds(started.elapsed()));

    Ok(Response::OK(analysis))
}
