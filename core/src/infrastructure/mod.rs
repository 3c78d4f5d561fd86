pub mod client;
pub mod db;
pub mod diet_plan;
pub mod food;
pub mod health;
pub mod llm;
