pub mod food;

pub use food::{FoodItem, FoodStatus};
