use serde_json::json;

/// Returns the JSON schema for dish analysis LLM responses
pub fn get_dish_analysis_schema() -> serde_json::Value {
    let string_list = json!({ "type": "array", "items": { "type": "string" } });

    json!({
        "type": "object",
        "properties": {
            "dish_name": { "type": "string" },
            "dish_description": { "type": "string" },
            "taste_profile": { "type": "string" },
            "ingredients": string_list,
            "allergens": string_list,
            "dietary_tags": string_list,
            "similar_dishes": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "dish_name": { "type": "string" },
                        "similarity_score": { "type": "number" },
                        "similarity_reason": { "type": "string" }
                    },
                    "required": ["dish_name", "similarity_score", "similarity_reason"]
                }
            },
            "historical_background": { "type": "string" },
            "fun_facts": string_list,
            "ingredient_origins": { "type": "string" },
            "warnings": string_list
        },
        "required": [
            "dish_name", "dish_description", "taste_profile",
            "ingredients", "allergens", "dietary_tags", "similar_dishes"
        ]
    })
}
