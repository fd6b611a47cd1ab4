use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SimilarDish {
    pub dish_name: String,
    /// In `[0, 1]`.
    pub similarity_score: f64,
    pub similarity_reason: String,
}

/// Nutritional and cultural profile of a photographed dish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DishAnalysis {
    pub dish_name: String,
    pub dish_description: String,
    pub taste_profile: String,
    pub ingredients: Vec<String>,
    pub allergens: Vec<String>,
    pub dietary_tags: Vec<String>,
    pub similar_dishes: Vec<SimilarDish>,
    pub historical_background: Option<String>,
    pub fun_facts: Option<Vec<String>>,
    pub ingredient_origins: Option<String>,
    /// Conflicts between the dish and the requester's dietary preferences.
    pub warnings: Option<Vec<String>>,
    /// Wall-clock time spent serving the request, set by the HTTP layer.
    pub processing_time_seconds: Option<f64>,
}
