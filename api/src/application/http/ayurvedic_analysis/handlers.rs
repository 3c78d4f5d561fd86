pub mod analyze_diet_plan;
pub mod analyze_food;
pub mod analyze_foods_batch;
pub mod improvement_suggestions;
pub mod seasonal_recommendations;
