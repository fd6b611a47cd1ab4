use axum::extract::State;
use woltie_core::domain::dish_suggestion::{
    entities::DishSuggestion, ports::DishSuggestionService, value_objects::SuggestDishInput,
};

use crate::application::http::{
    dish_suggestion::validators::SuggestDishRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/suggest-dish",
    tag = "dish-suggestion",
    summary = "Suggest a dish from a description",
    description = "Identifies the dish a free-text description most likely refers to and recommends restaurants serving it.",
    responses(
        (status = 200, body = DishSuggestion),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    ),
    request_body = SuggestDishRequest
)]
pub async fn suggest_dish(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SuggestDishRequest>,
) -> Result<Response<DishSuggestion>, ApiError> {
    let suggestion = state
        .service
        .suggest_dish(SuggestDishInput {
            description: payload.description,
            user_id: payload.user_id,
            location: payload.location,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(suggestion))
}
