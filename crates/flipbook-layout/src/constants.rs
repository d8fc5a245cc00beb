//! Shared constants for flipbook layout
//!
//! This module centralizes the default settings table and the filename
//! conventions shared by frame extraction, collection and cover import.

// =============================================================================
// Settings Schema
// =============================================================================

/// Current version of the persisted settings schema
pub const SETTINGS_VERSION: u32 = 1;

/// Settings sidecar written next to the frames
pub const SETTINGS_FILENAME: &str = "settings.json";

/// Render context handed to the template renderer
pub const LAYOUT_FILENAME: &str = "layout.json";

// =============================================================================
// Default Grid
// =============================================================================

/// Panel rows per page
pub const DEFAULT_ROWS: usize = 5;

/// Panel columns per page
pub const DEFAULT_COLUMNS: usize = 2;

/// Blank panels at each end of the sequence
pub const DEFAULT_FLYLEAVES_COUNT: usize = 0;

// =============================================================================
// Default Presentation Tokens
// =============================================================================

pub const DEFAULT_TITLE: &str = "output";
pub const DEFAULT_FOOTER: &str = "made with flipbook";

/// US Letter, portrait
pub const DEFAULT_PAGE_WIDTH: &str = "8.5in";
pub const DEFAULT_PAGE_HEIGHT: &str = "11in";
pub const DEFAULT_PAGE_PADDING: &str = ".5in .75in";

/// Padding on the handle, under the binding
pub const DEFAULT_HANDLE_PADDING: &str = ".125in";

pub const DEFAULT_IMAGE_WIDTH: &str = "2in";
pub const DEFAULT_IMAGE_HEIGHT: &str = "1.875in";
pub const DEFAULT_IMAGE_MARGIN: &str = ".0625in";
pub const DEFAULT_IMAGE_POSITION: &str = "center center";
pub const DEFAULT_IMAGE_ROTATE: &str = "0deg";
pub const DEFAULT_IMAGE_FILTER: &str = "none";

// =============================================================================
// Frames
// =============================================================================

/// Extension recognized as a frame image
pub const DEFAULT_FRAME_EXTENSION: &str = "png";

/// Filename prefix used for extracted frames
pub const DEFAULT_FRAME_PREFIX: &str = "frame-";

/// Frames extracted per second of source video
pub const DEFAULT_FPS: u32 = 4;

/// Stem of a cover image copied into the frame directory
pub const COVER_STEM: &str = "cover";
