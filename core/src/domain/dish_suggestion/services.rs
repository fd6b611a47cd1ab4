use tracing::instrument;

use crate::domain::{
    common::{
        ensure_not_blank, entities::app_errors::CoreError, non_blank, services::Service,
    },
    completion::ports::LLMClient,
    dish_suggestion::{
        entities::{DishIdentification, DishSuggestion, RestaurantRecommendation},
        helpers::{
            fallback_identification, fallback_restaurants, identification_from_reply,
            restaurants_from_reply,
        },
        ports::DishSuggestionService,
        prompts::{build_dish_identification_prompt, build_restaurant_recommendations_prompt},
        schema::{get_dish_identification_schema, get_restaurant_recommendations_schema},
        value_objects::SuggestDishInput,
    },
    image::ports::{ImageAnnotator, ImageFetcher},
    storage::ports::ObjectStoragePort,
};

impl<LLM, IF, IA, OS> DishSuggestionService for Service<LLM, IF, IA, OS>
where
    LLM: LLMClient,
    IF: ImageFetcher,
    IA: ImageAnnotator,
    OS: ObjectStoragePort,
{
    #[instrument(skip(self, input), fields(user_id = ?input.user_id))]
    async fn suggest_dish(&self, input: SuggestDishInput) -> Result<DishSuggestion, CoreError> {
        ensure_not_blank(&input.description, "Description is required")?;

        let identification = self
            .identify_dish_from_description(&input.description)
            .await?;

        let location = non_blank(input.location);
        let restaurants = self
            .get_restaurant_recommendations(&identification.dish_name, location.as_deref())
            .await?;

        tracing::info!(
            dish_name = %identification.dish_name,
            restaurants = restaurants.len(),
            "Dish suggestion completed"
        );

        Ok(DishSuggestion {
            dish_name: identification.dish_name,
            dish_description: identification.dish_description,
            restaurants,
            confidence: identification.confidence,
        })
    }

    #[instrument(skip(self))]
    async fn identify_dish_from_description(
        &self,
        description: &str,
    ) -> Result<DishIdentification, CoreError> {
        let prompt = build_dish_identification_prompt(description);

        match self
            .llm_client
            .generate_with_text(prompt, get_dish_identification_schema())
            .await
        {
            Ok(raw) => Ok(identification_from_reply(&raw, description)),
            Err(e) if e.is_unconfigured() => Err(e),
            Err(e) => {
                tracing::warn!(error = %e, "Dish identification failed, using fallback");
                Ok(fallback_identification(description))
            }
        }
    }

    #[instrument(skip(self))]
    async fn get_restaurant_recommendations(
        &self,
        dish_name: &str,
        location: Option<&str>,
    ) -> Result<Vec<RestaurantRecommendation>, CoreError> {
        let prompt = build_restaurant_recommendations_prompt(dish_name, location);

        match self
            .llm_client
            .generate_with_text(prompt, get_restaurant_recommendations_schema())
            .await
        {
            Ok(raw) => Ok(restaurants_from_reply(&raw, dish_name)),
            Err(e) if e.is_unconfigured() => Err(e),
            Err(e) => {
                tracing::warn!(error = %e, "Restaurant recommendations failed, using fallback");
                Ok(fallback_restaurants(dish_name))
            }
        }
    }
}
