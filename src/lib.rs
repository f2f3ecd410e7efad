pub mod cli;
pub mod config;
pub mod error;
pub mod images;
pub mod inputs;
pub mod layout;
pub mod navigation;
pub mod panic_handler;
pub mod render;
pub mod session;
pub mod status_bar;
pub mod viewer;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use inputs::event_source;
