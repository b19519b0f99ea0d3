pub mod constants;
pub mod scoring;
pub mod selection;

pub use constants::*;
pub use scoring::{score_option, OptionScore};
pub use selection::select_plans;
