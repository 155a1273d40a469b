// Services layer - Pure domain logic (no storage access)
pub mod classifier;
pub mod normalizer;

pub use classifier::SentimentModel;
pub use normalizer::normalize;
