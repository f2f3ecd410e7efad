use image::Rgb;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::images::compositor::DEFAULT_BACKGROUND;
use crate::navigation::NavigationPolicy;
use crate::viewer::DEFAULT_POLL_INTERVAL;

/// Viewer settings, optionally read from a JSON file. Every field has a
/// default, so a partial file is fine.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ViewerConfig {
    pub show_status: bool,
    pub navigation: NavigationPolicy,
    pub poll_interval_ms: u64,
    /// Canvas color composited behind transparent pixels.
    pub background: [u8; 3],
    pub log_file: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            show_status: true,
            navigation: NavigationPolicy::Clamp,
            poll_interval_ms: DEFAULT_POLL_INTERVAL.as_millis() as u64,
            background: DEFAULT_BACKGROUND.0,
            log_file: "pixterm.log".to_string(),
        }
    }
}

impl ViewerConfig {
    /// Load from `file_path`, or fall back to defaults when no path is given
    /// or the file does not exist. A file that exists but does not parse is
    /// an error.
    pub fn load_or_default(file_path: Option<&Path>) -> anyhow::Result<Self> {
        match file_path {
            Some(path) if path.exists() => Self::load_from_file(path),
            Some(path) => {
                log::warn!("Config file {path:?} not found, using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        match serde_json::from_str::<Self>(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                log::error!("Failed to parse config file: {e}");
                Err(anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
            }
        }
    }

    pub fn background(&self) -> Rgb<u8> {
        Rgb(self.background)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}
