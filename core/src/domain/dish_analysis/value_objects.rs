#[derive(Debug, Clone, Default)]
pub struct AnalyzeDishInput {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub image_base64: Option<String>,
    /// Dietary preference tags such as `vegan` or `no-spicy`.
    pub user_preferences: Vec<String>,
    /// Dishes the requester already knows, used to find similar ones.
    pub known_dishes: Vec<String>,
}
