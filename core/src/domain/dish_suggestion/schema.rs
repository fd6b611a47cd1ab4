use serde_json::json;

/// Returns the JSON schema for dish identification LLM responses
pub fn get_dish_identification_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "dish_name": { "type": "string" },
            "dish_description": { "type": "string" },
            "confidence": { "type": "number" }
        },
        "required": ["dish_name", "dish_description", "confidence"]
    })
}

/// Returns the JSON schema for restaurant recommendation LLM responses
pub fn get_restaurant_recommendations_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "restaurants": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "address": { "type": "string" },
                        "description": { "type": "string" },
                        "distance": { "type": "string" }
                    },
                    "required": ["name"]
                }
            }
        },
        "required": ["restaurants"]
    })
}
