use crate::domain::dish_analysis::value_objects::AnalyzeDishInput;

const ANALYSIS_EXAMPLE: &str = r#"{"dish_name": "Pad Thai", "dish_description": "Thai stir-fried rice noodles with egg, tofu and shrimp in a tamarind sauce", "taste_profile": "Sweet, sour and savory with a nutty finish", "ingredients": ["rice noodles", "shrimp", "egg", "tofu", "tamarind", "fish sauce", "peanuts", "bean sprouts"], "allergens": ["shellfish", "egg", "peanuts", "fish", "soy"], "dietary_tags": ["dairy-free"], "similar_dishes": [{"dish_name": "Chow Mein", "similarity_score": 0.7, "similarity_reason": "Also stir-fried noodles with a savory sauce"}], "historical_background": "Popularized in Thailand in the 1930s and 1940s as a national dish", "fun_facts": ["Pad Thai is often served with a lime wedge and chili flakes on the side"], "ingredient_origins": "Tamarind and rice noodles are staples of central Thai cooking", "warnings": ["Contains peanuts, which conflicts with the nut-free preference"]}"#;

const WARNING_EXAMPLE: &str = r#"- Preference "vegan", dish contains shrimp -> "warnings": ["Contains shrimp, which is not vegan"]
- Preference "no-spicy", dish is mild -> "warnings": []"#;

/// Prompt asking the model to profile the dish shown in the attached image.
pub fn build_dish_analysis_prompt(input: &AnalyzeDishInput, image_annotations: &str) -> String {
    let preferences = join_non_blank(&input.user_preferences);
    let known_dishes = join_non_blank(&input.known_dishes);

    let mut context = String::new();
    if let Some(preferences) = &preferences {
        context.push_str(&format!("Dietary preferences of the diner: {}\n", preferences));
    }
    if let Some(known_dishes) = &known_dishes {
        context.push_str(&format!("Dishes the diner already knows: {}\n", known_dishes));
    }
    if !image_annotations.trim().is_empty() {
        context.push_str(&format!(
            "Automatic image annotations: {}\n",
            image_annotations.trim()
        ));
    }

    let similar_dishes_rule = match &known_dishes {
        Some(_) => "pick up to 3 entries from the dishes the diner already knows, scored by how similar they are",
        None => "suggest up to 3 well-known dishes that are similar",
    };
    let warnings_rule = match &preferences {
        Some(_) => "list every conflict between the dish and the dietary preferences, or an empty list",
        None => "use an empty list",
    };

    format!(
        r#"You are a food expert helping diners understand a restaurant dish. Analyze the attached photo together with the restaurant's menu entry.

Menu title: "{title}"
Menu description: "{description}"
{context}
Reply with a single JSON object with these keys:
- "dish_name": the name of the dish
- "dish_description": two or three sentences describing it
- "taste_profile": how it tastes (sweet, sour, salty, bitter, umami, spicy, texture)
- "ingredients": list of the main ingredients
- "allergens": list of likely allergens
- "dietary_tags": list of tags such as "vegan", "vegetarian", "gluten-free", "dairy-free"
- "similar_dishes": list of {{"dish_name", "similarity_score" (0.0 to 1.0), "similarity_reason"}}; {similar_dishes_rule}
- "historical_background": a short note on where the dish comes from
- "fun_facts": list of one to three fun facts
- "ingredient_origins": where the key ingredients traditionally come from
- "warnings": {warnings_rule}

Example reply:
{example}

Warning examples:
{warning_examples}

Only respond with valid JSON. Do not wrap it in markdown and do not add any other text."#,
        title = input.title.trim(),
        description = input.description.trim(),
        example = ANALYSIS_EXAMPLE,
        warning_examples = WARNING_EXAMPLE,
    )
}

fn join_non_blank(values: &[String]) -> Option<String> {
    let values: Vec<&str> = values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values.join(", "))
    }
}
