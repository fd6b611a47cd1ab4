use serde_json::{Map, Value};

use crate::domain::{
    completion::reply::{
        optional_string_list_field, parse_json_object, score_field, string_field,
        string_list_field,
    },
    dish_analysis::entities::{DishAnalysis, SimilarDish},
};

const UNKNOWN_TASTE_PROFILE: &str = "Not available";

/// Neutral analysis echoing the menu entry, used when the reply is unusable.
pub fn fallback_analysis(title: &str, description: &str) -> DishAnalysis {
    DishAnalysis {
        dish_name: title.trim().to_string(),
        dish_description: description.trim().to_string(),
        taste_profile: UNKNOWN_TASTE_PROFILE.to_string(),
        ingredients: Vec::new(),
        allergens: Vec::new(),
        dietary_tags: Vec::new(),
        similar_dishes: Vec::new(),
        historical_background: None,
        fun_facts: None,
        ingredient_origins: None,
        warnings: None,
        processing_time_seconds: None,
    }
}

/// Maps a raw analysis reply key by key; missing keys take the fallback values.
pub fn analysis_from_reply(raw: &str, title: &str, description: &str) -> DishAnalysis {
    let object = match parse_json_object(raw) {
        Ok(object) => object,
        Err(e) => {
            tracing::warn!(error = %e, response = %raw, "Unusable dish analysis reply");
            return fallback_analysis(title, description);
        }
    };

    let fallback = fallback_analysis(title, description);

    DishAnalysis {
        dish_name: string_field(&object, "dish_name").unwrap_or(fallback.dish_name),
        dish_description: string_field(&object, "dish_description")
            .unwrap_or(fallback.dish_description),
        taste_profile: string_field(&object, "taste_profile").unwrap_or(fallback.taste_profile),
        ingredients: string_list_field(&object, "ingredients"),
        allergens: string_list_field(&object, "allergens"),
        dietary_tags: string_list_field(&object, "dietary_tags"),
        similar_dishes: object
            .get("similar_dishes")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(Value::as_object)
                    .filter_map(similar_dish_from_object)
                    .collect()
            })
            .unwrap_or_default(),
        historical_background: string_field(&object, "historical_background"),
        fun_facts: optional_string_list_field(&object, "fun_facts"),
        ingredient_origins: string_field(&object, "ingredient_origins"),
        warnings: optional_string_list_field(&object, "warnings"),
        processing_time_seconds: None,
    }
}

fn similar_dish_from_object(object: &Map<String, Value>) -> Option<SimilarDish> {
    let dish_name = string_field(object, "dish_name").or_else(|| string_field(object, "name"))?;

    Some(SimilarDish {
        dish_name,
        similarity_score: score_field(object, "similarity_score").unwrap_or(0.0),
        similarity_reason: string_field(object, "similarity_reason").unwrap_or_default(),
    })
}
