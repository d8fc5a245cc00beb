//! Print-side page ordering

use crate::types::{Page, PageDirection, PageSide};

/// Apply print-side semantics to grouped pages.
///
/// Front pages keep sheet order and read left to right. Back pages are
/// reversed (last page first) and read right to left; panels inside each
/// page are left untouched.
pub fn order_pages(mut pages: Vec<Page>, side: PageSide) -> (Vec<Page>, PageDirection) {
    if side == PageSide::Back {
        pages.reverse();
    }

    (pages, side.direction())
}
