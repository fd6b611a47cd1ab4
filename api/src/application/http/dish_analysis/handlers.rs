pub mod analyze_dish;
pub mod analyze_dish_demo;
