use std::time::Instant;

use axum::extract::State;
use woltie_core::domain::dish_analysis::{entities::DishAnalysis, ports::DishAnalysisService};

use crate::application::http::{
    dish_analysis::handlers::analyze_dish::rounded_seconds,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/analyze-dish",
    tag = "dish-analysis",
    summary = "Analyze the demo dish",
    description = "Runs the photo analysis on a fixed demo dish. The image comes from DEMO_IMAGE_URL, or from a short-lived signed URL on the demo bucket.",
    responses(
        (status = 200, body = DishAnalysis),
        (status = 500, body = ApiErrorResponse)
    )
)]
pub async fn analyze_dish_demo(
    State(state): State<AppState>,
) -> Result<Response<DishAnalysis>, ApiError> {
    let started = Instant::now();

    let mut analysis = state
        .service
        .analyze_demo_dish()
        .await
        .map_err(ApiError::from)?;

    analysis.processing_time_seconds = Some(rounded_seconds(started.elapsed()));

    Ok(Response::OK(analysis))
}
