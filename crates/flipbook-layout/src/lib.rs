pub mod constants;
mod document;
pub mod extract;
pub mod frames;
#[cfg(feature = "serde")]
mod io;
pub mod layout;
mod options;
mod preview;
mod stats;
mod types;

pub use document::{LayoutDocument, build_layout, layout_from_source};
pub use extract::{FfmpegExtractor, FrameExtractor};
pub use frames::{
    DirectoryFrames, FrameFilter, FrameSource, collect_frames, import_cover, verify_cover,
};
#[cfg(feature = "serde")]
pub use io::save_document;
pub use options::*;
pub use preview::generate_preview;
pub use stats::calculate_statistics;
pub use types::*;
