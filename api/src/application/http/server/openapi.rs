use crate::application::http::{
    dish_analysis::router::DishAnalysisApiDoc,
    dish_suggestion::router::DishSuggestionApiDoc,
    root::{__path_root, root},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Woltie API",
        description = "Dish suggestion from descriptions and dish analysis from photos"
    ),
    paths(root),
    nest(
        (path = "/api", api = DishSuggestionApiDoc),
        (path = "/api", api = DishAnalysisApiDoc),
    )
)]
pub struct ApiDoc;
