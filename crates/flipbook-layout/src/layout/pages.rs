//! Page grouping

use std::num::NonZeroUsize;

use crate::types::{Page, Panel};

use super::imposition::page_count;

/// Partition panels into pages by their `page` number.
///
/// Produces `ceil(panels / panels_per_page)` pages. Page `k` holds every
/// panel whose `page == k`, in their original relative order. A short last
/// page is kept as is.
pub fn group_pages(panels: Vec<Panel>, panels_per_page: NonZeroUsize) -> Vec<Page> {
    let count = page_count(panels.len(), panels_per_page);
    let mut pages = vec![Page::default(); count];

    for panel in panels {
        debug_assert!(
            (1..=count).contains(&panel.page),
            "panel {} has page {} outside 1..={}",
            panel.id,
            panel.page,
            count
        );
        let index = panel.page.saturating_sub(1).min(count - 1);
        pages[index].panels.push(panel);
    }

    pages
}
