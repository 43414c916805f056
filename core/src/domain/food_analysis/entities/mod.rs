pub mod classifier_model;
pub mod food_analysis_result;

pub use classifier_model::*;
pub use food_analysis_result::*;
