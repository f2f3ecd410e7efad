pub mod compositor;
pub mod loader;
pub mod scaler;

pub use loader::{LoadedImage, load_all};
