use crate::document::LayoutDocument;
use crate::types::*;

/// Calculate statistics for a built layout
pub fn calculate_statistics(document: &LayoutDocument) -> LayoutStatistics {
    let settings = document.settings();
    let panels_per_page = settings.rows * settings.columns;

    let mut frame_count = 0;
    let mut blank_panels = 0;
    let mut has_cover = false;
    for panel in document.panels() {
        if panel.is_cover {
            has_cover = true;
        } else if panel.is_blank() {
            blank_panels += 1;
        } else {
            frame_count += 1;
        }
    }

    // Every grid cell on every page, minus the ones that got a panel
    let empty_slots = document.page_count() * panels_per_page - document.panel_count();

    LayoutStatistics {
        frame_count,
        panel_count: document.panel_count(),
        page_count: document.page_count(),
        panels_per_page,
        flyleaf_panels: settings.flyleaves_count * 2,
        blank_panels,
        empty_slots,
        has_cover,
    }
}
