//! Layout engine for flipbook pages
//!
//! Turns a sorted list of frame filenames into pages of panels:
//! - Panel assembly (cover, flyleaves, frames, optional imposition)
//! - Page grouping (fixed `rows x columns` capacity)
//! - Print-side ordering (front/back)
//!
//! Everything here is pure; listing the frames is done by the caller.

mod imposition;
mod order;
mod pages;
mod panels;

pub use imposition::{impose_order, page_count};
pub use order::order_pages;
pub use pages::group_pages;
pub use panels::{assemble_panels, median_frame};
