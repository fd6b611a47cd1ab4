pub mod suggest_dish;
