//! Imposition ordering
//!
//! Lays the source frames into a `panels_per_page x page_count` matrix
//! column by column and reads it back row by row. Printing the pages, cutting
//! the panels apart and stacking each grid position in page order rebuilds
//! the original sequence.
//!
//! For 18 frames on 6-panel pages (3 pages):
//!
//! ```text
//! source:  1  2  3  4  5  6  7  8  9 10 11 12 13 14 15 16 17 18
//! page 1:  1  4  7 10 13 16
//! page 2:  2  5  8 11 14 17
//! page 3:  3  6  9 12 15 18
//! ```

use std::num::NonZeroUsize;

/// Number of pages needed to hold `item_count` items.
pub fn page_count(item_count: usize, panels_per_page: NonZeroUsize) -> usize {
    item_count.div_ceil(panels_per_page.get())
}

/// Source index shown at output position `i`, or `None` past the end.
fn source_index(
    i: usize,
    item_count: usize,
    panels_per_page: NonZeroUsize,
    pages: usize,
) -> Option<usize> {
    let page_index = i / panels_per_page.get();
    let panel_index = i % panels_per_page.get();
    let index = panel_index * pages + page_index;
    (index < item_count).then_some(index)
}

/// Reorder `items` into imposition order.
///
/// The result always fills every slot of every page: its length is
/// `page_count * panels_per_page`, with `None` for slots past the last item.
/// With a single page this is the identity ordering.
pub fn impose_order<T: Clone>(items: &[T], panels_per_page: NonZeroUsize) -> Vec<Option<T>> {
    let pages = page_count(items.len(), panels_per_page);

    (0..pages * panels_per_page.get())
        .map(|i| {
            source_index(i, items.len(), panels_per_page, pages).map(|index| items[index].clone())
        })
        .collect()
}
