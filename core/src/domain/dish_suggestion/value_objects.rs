#[derive(Debug, Clone)]
pub struct SuggestDishInput {
    pub description: String,
    pub user_id: Option<String>,
    pub location: Option<String>,
}
