//! Dashboard components

mod reveal;
mod sidebar;

pub use reveal::{provide_reveal_context, use_reveal};
pub use sidebar::Sidebar;
