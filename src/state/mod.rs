mod persistence;
mod record;

pub use persistence::{load_state, save_state};
pub use record::RecommendationState;
