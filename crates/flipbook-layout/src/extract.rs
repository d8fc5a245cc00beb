//! Frame extraction from a source video
//!
//! The layout engine never touches video itself. Extraction is a pluggable
//! capability; [`FfmpegExtractor`] shells out to the system `ffmpeg` binary.

use crate::constants::{DEFAULT_FPS, DEFAULT_FRAME_EXTENSION, DEFAULT_FRAME_PREFIX};
use crate::frames::{FrameFilter, collect_frames};
use crate::types::*;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::process::Stdio;

/// Something that can turn a video into numbered frame images
pub trait FrameExtractor {
    /// Extract frames from `input` into `dir`, returning how many frames `dir` holds.
    fn extract(&self, input: &Path, dir: &Path) -> impl Future<Output = Result<usize>> + Send;
}

/// Extracts PNG frames with the `ffmpeg` command-line tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfmpegExtractor {
    /// Frames per second of video
    pub fps: u32,
    /// Prefix for extracted frame filenames
    pub prefix: String,
    /// Program to run
    pub program: PathBuf,
}

impl Default for FfmpegExtractor {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            prefix: DEFAULT_FRAME_PREFIX.to_string(),
            program: PathBuf::from("ffmpeg"),
        }
    }
}

impl FfmpegExtractor {
    pub fn new(fps: u32) -> Self {
        Self {
            fps,
            ..Default::default()
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Output pattern: `<prefix>%04d.png`. Four zero-padded digits keep
    /// string order equal to frame order.
    pub fn frame_pattern(&self) -> String {
        format!("{}%04d.{}", self.prefix, DEFAULT_FRAME_EXTENSION)
    }

    /// Filter matching exactly the frames this extractor writes
    pub fn frame_filter(&self) -> FrameFilter {
        FrameFilter::default().with_prefix(self.prefix.clone())
    }

    /// Arguments passed to ffmpeg
    pub fn arguments(&self, input: &Path, dir: &Path) -> Vec<String> {
        vec![
            "-i".to_string(),
            input.display().to_string(),
            "-vf".to_string(),
            format!("fps={}", self.fps),
            "-hide_banner".to_string(),
            "-loglevel".to_string(),
            "error".to_string(),
            dir.join(self.frame_pattern()).display().to_string(),
        ]
    }

    fn validate(&self) -> Result<()> {
        if self.fps == 0 {
            return Err(LayoutError::Config(
                "Frames per second must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl FrameExtractor for FfmpegExtractor {
    async fn extract(&self, input: &Path, dir: &Path) -> Result<usize> {
        self.validate()?;

        if !tokio::fs::try_exists(input).await? {
            return Err(LayoutError::MissingInput(input.to_path_buf()));
        }

        tokio::fs::create_dir_all(dir).await?;

        log::info!(
            "Extracting frames from {} at {} fps",
            input.display(),
            self.fps
        );

        let output = tokio::process::Command::new(&self.program)
            .args(self.arguments(input, dir))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                LayoutError::Extract(format!(
                    "failed to run {} (is it installed and on PATH?): {}",
                    self.program.display(),
                    e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(LayoutError::Extract(format!(
                "{} exited with {}: {}",
                self.program.display(),
                output.status,
                stderr.trim()
            )));
        }

        let count = collect_frames(dir, &self.frame_filter()).await?.len();
        log::info!("Extracted {} frames to {}", count, dir.display());
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_pattern_is_zero_padded() {
        let extractor = FfmpegExtractor::default();
        assert_eq!(extractor.frame_pattern(), "frame-%04d.png");
    }

    #[test]
    fn test_arguments() {
        let extractor = FfmpegExtractor::new(6).with_prefix("f");
        let args = extractor.arguments(Path::new("movie.mp4"), Path::new("out"));

        assert_eq!(args[0], "-i");
        assert_eq!(args[1], "movie.mp4");
        assert_eq!(args[3], "fps=6");
        assert_eq!(
            args.last().map(String::as_str),
            Some(Path::new("out").join("f%04d.png").to_str().unwrap())
        );
    }

    #[test]
    fn test_frame_filter_matches_output() {
        let extractor = FfmpegExtractor::default();
        let filter = extractor.frame_filter();
        assert!(filter.matches("frame-0001.png"));
        assert!(!filter.matches("cover.png"));
    }

    #[tokio::test]
    async fn test_zero_fps_rejected() {
        let extractor = FfmpegExtractor::new(0);
        let result = extractor
            .extract(Path::new("missing.mp4"), Path::new("out"))
            .await;
        assert!(matches!(result, Err(LayoutError::Config(_))));
    }

    #[tokio::test]
    async fn test_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("missing.mp4");
        let result = FfmpegExtractor::default()
            .extract(&input, &dir.path().join("frames"))
            .await;

        match result {
            Err(LayoutError::MissingInput(path)) => assert_eq!(path, input),
            other => panic!("Expected MissingInput error, got {:?}", other),
        }
    }
}
