pub mod list_available_food;
