pub mod ayurvedic_analysis;
pub mod food;
pub mod health;
pub mod server;
