use std::path::PathBuf;

use thiserror::Error;

/// Fatal startup errors raised while turning command-line paths into images.
///
/// None of these are recovered: `main` prints them and exits with a non-zero
/// status before the viewer loop starts.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to open file {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to open file {}: is a directory", .0.display())]
    IsADirectory(PathBuf),

    #[error("Failed to open file {}: {source}", path.display())]
    UnsupportedFormat {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No images to display")]
    EmptyInputSet,
}

pub type LoadResult<T> = std::result::Result<T, LoadError>;
