pub mod dish_analysis;
pub mod dish_suggestion;
pub mod root;
pub mod server;
#[cfg(test)]
pub mod test;
