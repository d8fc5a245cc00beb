//! Panel sequence assembly
//!
//! Builds the flat panel sequence for a flipbook:
//!
//! ```text
//! [cover?] [flyleaf x N] [frames, possibly imposed] [flyleaf x N]
//! ```
//!
//! Each panel gets its 1-based id and the page it lands on.

use std::num::NonZeroUsize;

use crate::types::{Panel, PanelContent, PanelOrder};

use super::imposition::impose_order;

/// Build the ordered panel sequence.
///
/// `filenames` must already be sorted. With [`PanelOrder::Imposition`] the
/// frames are reordered before the cover and flyleaves are inserted, and
/// unfilled imposition slots become blank panels.
pub fn assemble_panels(
    filenames: &[String],
    panels_per_page: NonZeroUsize,
    flyleaves_count: usize,
    cover: Option<&str>,
    order: PanelOrder,
) -> Vec<Panel> {
    let frames: Vec<PanelContent> = match order {
        PanelOrder::Sequential => filenames.iter().map(PanelContent::filled).collect(),
        PanelOrder::Imposition => impose_order(filenames, panels_per_page)
            .into_iter()
            .map(|slot| slot.map_or(PanelContent::Blank, PanelContent::filled))
            .collect(),
    };

    let mut sequence =
        Vec::with_capacity(usize::from(cover.is_some()) + frames.len() + 2 * flyleaves_count);
    if let Some(cover) = cover {
        sequence.push(PanelContent::filled(cover));
    }
    sequence.extend(flyleaves(flyleaves_count));
    sequence.extend(frames);
    sequence.extend(flyleaves(flyleaves_count));

    sequence
        .into_iter()
        .enumerate()
        .map(|(i, content)| Panel {
            id: i + 1,
            is_cover: cover.is_some() && i == 0,
            content,
            page: i / panels_per_page.get() + 1,
        })
        .collect()
}

fn flyleaves(count: usize) -> impl Iterator<Item = PanelContent> {
    std::iter::repeat_n(PanelContent::Blank, count)
}

/// Frame at the median index of a sorted listing.
///
/// Uses index `round(n / 2)` rounding halves up, clamped to the last frame.
/// Returns `None` when there are no frames.
pub fn median_frame(filenames: &[String]) -> Option<&str> {
    let last = filenames.len().checked_sub(1)?;
    let index = filenames.len().div_ceil(2).min(last);
    filenames.get(index).map(String::as_str)
}
