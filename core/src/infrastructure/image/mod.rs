pub mod enhancer;

pub use enhancer::PhotoEnhancer;
