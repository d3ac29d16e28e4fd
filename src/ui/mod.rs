pub mod meal_grid;
pub mod search_input;
pub mod theme;
