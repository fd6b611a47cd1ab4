use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    dish_analysis::{entities::DishAnalysis, value_objects::AnalyzeDishInput},
};

/// Service trait for the photo analysis flow
pub trait DishAnalysisService: Send + Sync {
    fn analyze_dish(
        &self,
        input: AnalyzeDishInput,
    ) -> impl Future<Output = Result<DishAnalysis, CoreError>> + Send;

    /// Analyze the built-in demo dish.
    fn analyze_demo_dish(&self) -> impl Future<Output = Result<DishAnalysis, CoreError>> + Send;

    /// Resolve the demo image, preferring a configured URL over a signed one.
    fn resolve_demo_image_url(&self) -> impl Future<Output = Result<String, CoreError>> + Send;
}
