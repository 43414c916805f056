pub mod dataset;
pub mod food_analysis;
pub mod health;
pub mod server;
