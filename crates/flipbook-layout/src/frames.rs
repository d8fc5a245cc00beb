//! Frame listing and cover files
//!
//! Frames are ordered by plain string sort. That matches playback order only
//! when frame numbers are zero-padded to the same width, which the extractor
//! guarantees and other producers must too.

use crate::constants::{COVER_STEM, DEFAULT_FRAME_EXTENSION};
use crate::types::*;
use std::future::Future;
use std::path::{Path, PathBuf};

/// Which directory entries count as frame images
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameFilter {
    /// Required extension, compared ASCII case-insensitively. `None` accepts any.
    pub extension: Option<String>,
    /// Required filename prefix
    pub prefix: Option<String>,
    /// Filenames never treated as frames (e.g. the cover)
    pub exclude: Vec<String>,
}

impl Default for FrameFilter {
    fn default() -> Self {
        Self {
            extension: Some(DEFAULT_FRAME_EXTENSION.to_string()),
            prefix: None,
            exclude: Vec::new(),
        }
    }
}

impl FrameFilter {
    pub fn with_extension(mut self, extension: Option<String>) -> Self {
        self.extension = extension;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn excluding(mut self, filename: impl Into<String>) -> Self {
        self.exclude.push(filename.into());
        self
    }

    /// Check whether `filename` is a frame image
    pub fn matches(&self, filename: &str) -> bool {
        if self.exclude.iter().any(|excluded| excluded == filename) {
            return false;
        }

        if let Some(prefix) = &self.prefix {
            if !filename.starts_with(prefix.as_str()) {
                return false;
            }
        }

        match &self.extension {
            Some(wanted) => Path::new(filename)
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(wanted.trim_start_matches('.'))),
            None => true,
        }
    }
}

/// List and sort the frame filenames in `dir`.
///
/// Subdirectories and non-UTF-8 names are skipped. An unreadable directory
/// is a [`LayoutError::ReadDir`].
pub async fn collect_frames(dir: impl AsRef<Path>, filter: &FrameFilter) -> Result<Vec<String>> {
    let dir = dir.as_ref();
    let read_dir_error = |source: std::io::Error| LayoutError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = tokio::fs::read_dir(dir).await.map_err(read_dir_error)?;
    let mut filenames = Vec::new();

    while let Some(entry) = entries.next_entry().await.map_err(read_dir_error)? {
        if entry.file_type().await?.is_dir() {
            continue;
        }

        let filename = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(name) => {
                log::warn!("Skipping non-UTF-8 entry {:?} in {}", name, dir.display());
                continue;
            }
        };

        if filter.matches(&filename) {
            filenames.push(filename);
        }
    }

    filenames.sort();

    log::info!("Found {} frames in {}", filenames.len(), dir.display());
    Ok(filenames)
}

/// Something that can list frame filenames in playback order
pub trait FrameSource {
    fn list_frames(&self) -> impl Future<Output = Result<Vec<String>>> + Send;
}

/// Frames stored as files in a directory
#[derive(Debug, Clone)]
pub struct DirectoryFrames {
    pub dir: PathBuf,
    pub filter: FrameFilter,
}

impl DirectoryFrames {
    pub fn new(dir: impl Into<PathBuf>, filter: FrameFilter) -> Self {
        Self {
            dir: dir.into(),
            filter,
        }
    }
}

impl FrameSource for DirectoryFrames {
    async fn list_frames(&self) -> Result<Vec<String>> {
        collect_frames(&self.dir, &self.filter).await
    }
}

/// Copy an external cover image into `dir` as `cover.<ext>`.
///
/// Returns the new filename, relative to `dir`.
pub async fn import_cover(cover: impl AsRef<Path>, dir: impl AsRef<Path>) -> Result<String> {
    let cover = cover.as_ref();
    ensure_file(cover).await?;

    let extension = cover
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or(DEFAULT_FRAME_EXTENSION);
    let filename = format!("{}.{}", COVER_STEM, extension);
    let target = dir.as_ref().join(&filename);

    tokio::fs::copy(cover, &target).await?;

    log::info!("Copied cover {} to {}", cover.display(), target.display());
    Ok(filename)
}

/// Check that the cover `filename` exists inside `dir`.
pub async fn verify_cover(dir: impl AsRef<Path>, filename: &str) -> Result<()> {
    ensure_file(&dir.as_ref().join(filename)).await
}

async fn ensure_file(path: &Path) -> Result<()> {
    match tokio::fs::metadata(path).await {
        Ok(metadata) if metadata.is_file() => Ok(()),
        _ => Err(LayoutError::MissingCover(path.to_path_buf())),
    }
}
