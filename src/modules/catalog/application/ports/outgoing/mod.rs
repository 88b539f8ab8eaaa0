pub mod food_query;

pub use food_query::{AvailableFoodRow, FoodQuery, FoodQueryError};
