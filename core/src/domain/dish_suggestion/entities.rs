use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantRecommendation {
    pub name: String,
    pub address: Option<String>,
    pub description: Option<String>,
    pub distance: Option<String>,
}

/// What the model made of a free-text dish description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DishIdentification {
    pub dish_name: String,
    pub dish_description: Option<String>,
    /// In `[0, 1]`.
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DishSuggestion {
    pub dish_name: String,
    pub dish_description: Option<String>,
    pub restaurants: Vec<RestaurantRecommendation>,
    /// In `[0, 1]`.
    pub confidence: Option<f64>,
}
