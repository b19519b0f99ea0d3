mod menu;
mod plan;

pub use menu::{MenuBook, MenuOption};
pub use plan::PlanResult;
