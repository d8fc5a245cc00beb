//! Layout document assembly
//!
//! The [`LayoutDocument`] is the read-only result handed to the renderer:
//! ordered pages, aggregate counts, reading direction, and every settings
//! field passed through for presentation.

use crate::frames::FrameSource;
use crate::layout::{assemble_panels, group_pages, median_frame, order_pages};
use crate::options::{CoverSelection, LayoutSettings};
use crate::types::*;

/// Immutable flipbook layout
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LayoutDocument {
    pages: Vec<Page>,
    panel_count: usize,
    page_count: usize,
    page_direction: PageDirection,
    #[cfg_attr(feature = "serde", serde(flatten))]
    settings: LayoutSettings,
}

impl LayoutDocument {
    /// Pages in print order
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn panel_count(&self) -> usize {
        self.panel_count
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn page_direction(&self) -> PageDirection {
        self.page_direction
    }

    /// Settings the layout was built from
    pub fn settings(&self) -> &LayoutSettings {
        &self.settings
    }

    /// All panels, page by page in print order
    pub fn panels(&self) -> impl Iterator<Item = &Panel> {
        self.pages.iter().flat_map(|page| page.panels.iter())
    }

    /// The cover panel, if the layout has one
    pub fn cover(&self) -> Option<&Panel> {
        self.panels().find(|panel| panel.is_cover)
    }
}

/// Build a flipbook layout from sorted frame filenames.
///
/// Validates `settings` first; nothing is clamped. Zero frames still yields
/// a document (possibly with no pages).
pub fn build_layout(filenames: &[String], settings: &LayoutSettings) -> Result<LayoutDocument> {
    settings.validate()?;
    let panels_per_page = settings.panels_per_page()?;

    let cover = match &settings.cover {
        CoverSelection::None => None,
        CoverSelection::File(name) => Some(name.as_str()),
        CoverSelection::MedianFrame => median_frame(filenames),
    };

    let panels = assemble_panels(
        filenames,
        panels_per_page,
        settings.flyleaves_count,
        cover,
        settings.order,
    );
    let panel_count = panels.len();

    let pages = group_pages(panels, panels_per_page);
    let (pages, page_direction) = order_pages(pages, settings.page_side);
    let page_count = pages.len();

    log::debug!(
        "Laid out {} frames into {} panels on {} pages ({} per page, {:?}, {:?})",
        filenames.len(),
        panel_count,
        page_count,
        panels_per_page,
        settings.order,
        settings.page_side
    );

    Ok(LayoutDocument {
        pages,
        panel_count,
        page_count,
        page_direction,
        settings: settings.clone(),
    })
}

/// List frames from `source`, then build the layout.
pub async fn layout_from_source(
    source: &impl FrameSource,
    settings: &LayoutSettings,
) -> Result<LayoutDocument> {
    settings.validate()?;
    let filenames = source.list_frames().await?;
    build_layout(&filenames, settings)
}
