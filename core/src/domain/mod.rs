pub mod authentication;
pub mod ayurvedic_analysis;
pub mod client;
pub mod common;
pub mod diet_plan;
pub mod food;
pub mod health;
