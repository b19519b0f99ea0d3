pub mod message;
pub mod page;

pub use message::{compose_message, whatsapp_link};
pub use page::{ingredient_checklist, render_page};
