pub mod common;
pub mod completion;
pub mod dish_analysis;
pub mod dish_suggestion;
pub mod image;
pub mod storage;
