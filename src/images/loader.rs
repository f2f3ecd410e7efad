use image::{ImageFormat, ImageReader, RgbaImage};
use log::{debug, info, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{LoadError, LoadResult};

/// A decoded image together with the name it was opened under.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub name: String,
    pub image: RgbaImage,
}

impl LoadedImage {
    pub fn new(name: impl Into<String>, image: RgbaImage) -> Self {
        Self {
            name: name.into(),
            image,
        }
    }
}

/// Whether the decoder recognizes the file extension (case-insensitive).
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ImageFormat::from_extension(ext.to_lowercase()).is_some())
        .unwrap_or(false)
}

/// Expand command-line paths into image file paths.
///
/// Directories contribute their direct children with a supported extension,
/// sorted by file name. Anything else is passed through untouched so that
/// [`load_image`] reports the precise failure.
pub fn expand_paths(paths: &[PathBuf]) -> LoadResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut found = scan_directory(path)?;
            debug!("Found {} images in {path:?}", found.len());
            files.append(&mut found);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

fn scan_directory(dir: &Path) -> LoadResult<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut images = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry in {dir:?}: {e}");
                continue;
            }
        };
        let path = entry.path();
        if path.is_file() && is_supported_image(&path) {
            images.push(path);
        }
    }
    images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(images)
}

/// Decode a single file into an RGBA grid.
pub fn load_image(path: &Path) -> LoadResult<RgbaImage> {
    if path.is_dir() {
        return Err(LoadError::IsADirectory(path.to_path_buf()));
    }

    let reader = ImageReader::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::FileNotFound(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let reader = reader.with_guessed_format().map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let image = reader
        .decode()
        .map_err(|source| LoadError::UnsupportedFormat {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(image.into_rgba8())
}

/// Expand and decode every path. Fails on the first bad file, and when
/// nothing is left to show.
pub fn load_all(paths: &[PathBuf]) -> LoadResult<Vec<LoadedImage>> {
    let files = expand_paths(paths)?;
    let mut loaded = Vec::with_capacity(files.len());
    for file in files {
        let image = load_image(&file)?;
        debug!("Decoded {file:?}: {}x{}", image.width(), image.height());
        loaded.push(LoadedImage::new(file.to_string_lossy(), image));
    }

    if loaded.is_empty() {
        return Err(LoadError::EmptyInputSet);
    }
    info!("Loaded {} images", loaded.len());
    Ok(loaded)
}
