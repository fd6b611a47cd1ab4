use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    dish_suggestion::{
        entities::{DishIdentification, DishSuggestion, RestaurantRecommendation},
        value_objects::SuggestDishInput,
    },
};

/// Service trait for the description-to-dish flow
pub trait DishSuggestionService: Send + Sync {
    /// Identify the dish, then look up restaurants serving it.
    fn suggest_dish(
        &self,
        input: SuggestDishInput,
    ) -> impl Future<Output = Result<DishSuggestion, CoreError>> + Send;

    fn identify_dish_from_description(
        &self,
        description: &str,
    ) -> impl Future<Output = Result<DishIdentification, CoreError>> + Send;

    fn get_restaurant_recommendations(
        &self,
        dish_name: &str,
        location: Option<&str>,
    ) -> impl Future<Output = Result<Vec<RestaurantRecommendation>, CoreError>> + Send;
}
