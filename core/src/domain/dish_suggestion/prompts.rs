/// Prompt asking the model to name the dish a user is describing.
pub fn build_dish_identification_prompt(description: &str) -> String {
    format!(
        r#"You are a culinary expert. Read the food description below and name the dish it most likely refers to, with a one-sentence description.

User description: "{description}"

Reply with a single JSON object of exactly this shape:
{{
    "dish_name": "exact dish name",
    "dish_description": "brief description of the dish",
    "confidence": 0.0
}}
where "confidence" is a number between 0.0 and 1.0.

Examples:
- "cheesy baked eggplant dish" -> {{"dish_name": "Melanzane alla Parmigiana", "dish_description": "Italian baked eggplant layered with tomato sauce and cheese", "confidence": 0.95}}
- "spicy noodle soup with beef" -> {{"dish_name": "Pho", "dish_description": "Vietnamese noodle soup with beef and herbs", "confidence": 0.9}}
- "fried rice balls with cheese inside" -> {{"dish_name": "Arancini", "dish_description": "Sicilian fried rice balls stuffed with ragu or mozzarella", "confidence": 0.85}}

Only respond with valid JSON. Do not wrap it in markdown and do not add any other text."#,
        description = description.trim()
    )
}

/// Prompt asking the model for restaurants serving `dish_name`.
pub fn build_restaurant_recommendations_prompt(dish_name: &str, location: Option<&str>) -> String {
    let location_context = match location {
        Some(location) => format!(" near {}", location.trim()),
        None => " nearby".to_string(),
    };

    format!(
        r#"Suggest 3-5 restaurants where the dish "{dish_name}" can be found{location_context}.

Reply with a single JSON object of exactly this shape:
{{
    "restaurants": [
        {{
            "name": "Restaurant Name",
            "address": "Street Address, City",
            "description": "Why this restaurant is good for this dish",
            "distance": "e.g. '2.5 km away' or '15 min walk'"
        }}
    ]
}}

Example:
{{"restaurants": [{{"name": "Pho Viet", "address": "Mannerheimintie 12, Helsinki", "description": "Family-run place known for its slow-simmered beef broth", "distance": "1.2 km away"}}]}}

Only respond with valid JSON. Do not wrap it in markdown and do not add any other text."#
    )
}
