use serde_json::{Map, Value};

use crate::domain::{
    completion::reply::{parse_json_object, score_field, string_field},
    dish_suggestion::entities::{DishIdentification, RestaurantRecommendation},
};

const FALLBACK_CONFIDENCE: f64 = 0.5;
const FALLBACK_RESTAURANT_COUNT: usize = 3;
const MAX_RESTAURANTS: usize = 5;

/// Capitalizes the first cased character of every word and lowercases the
/// rest, where a word is any run of cased characters.
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_cased = false;

    for c in text.chars() {
        let cased = c.is_lowercase() || c.is_uppercase();
        if cased && !previous_cased {
            result.extend(c.to_uppercase());
        } else if cased {
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
        previous_cased = cased;
    }

    result
}

/// Identification used when the model reply cannot be used.
pub fn fallback_identification(description: &str) -> DishIdentification {
    DishIdentification {
        dish_name: title_case(description),
        dish_description: Some(format!("A dish matching: {}", description)),
        confidence: Some(FALLBACK_CONFIDENCE),
    }
}

/// Placeholder restaurants used when the model reply cannot be used.
pub fn fallback_restaurants(dish_name: &str) -> Vec<RestaurantRecommendation> {
    (1..=FALLBACK_RESTAURANT_COUNT)
        .map(|i| RestaurantRecommendation {
            name: format!("Local Restaurant {}", i),
            address: Some("Address not available".to_string()),
            description: Some(format!("May serve {}", dish_name)),
            distance: Some("Unknown".to_string()),
        })
        .collect()
}

/// Maps a raw identification reply. A reply without a usable `dish_name`
/// falls back to the title-cased description so the name is never empty.
pub fn identification_from_reply(raw: &str, description: &str) -> DishIdentification {
    let object = match parse_json_object(raw) {
        Ok(object) => object,
        Err(e) => {
            tracing::warn!(error = %e, response = %raw, "Unusable dish identification reply");
            return fallback_identification(description);
        }
    };

    DishIdentification {
        dish_name: string_field(&object, "dish_name").unwrap_or_else(|| title_case(description)),
        dish_description: string_field(&object, "dish_description"),
        confidence: score_field(&object, "confidence"),
    }
}

/// Maps a raw recommendations reply. Entries without a name are dropped and
/// at most five are kept; `establishments` is accepted as the list key too.
pub fn restaurants_from_reply(raw: &str, dish_name: &str) -> Vec<RestaurantRecommendation> {
    let object = match parse_json_object(raw) {
        Ok(object) => object,
        Err(e) => {
            tracing::warn!(error = %e, response = %raw, "Unusable restaurant recommendations reply");
            return fallback_restaurants(dish_name);
        }
    };

    let entries = object
        .get("restaurants")
        .or_else(|| object.get("establishments"))
        .and_then(Value::as_array);

    let Some(entries) = entries else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(Value::as_object)
        .filter_map(restaurant_from_object)
        .take(MAX_RESTAURANTS)
        .collect()
}

fn restaurant_from_object(object: &Map<String, Value>) -> Option<RestaurantRecommendation> {
    Some(RestaurantRecommendation {
        name: string_field(object, "name")?,
        address: string_field(object, "address"),
        description: string_field(object, "description"),
        distance: string_field(object, "distance"),
    })
}
