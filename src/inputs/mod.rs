pub mod event_source;
pub mod keymap;

pub use keymap::{Action, action_for_event};
