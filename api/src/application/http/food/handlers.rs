pub mod get_ayurvedic_profile;
pub mod get_food;
pub mod search_foods;
