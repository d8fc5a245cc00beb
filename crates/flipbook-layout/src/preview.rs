use crate::document::LayoutDocument;
use crate::types::*;
use std::fmt::Write;

const BLANK_LABEL: &str = "(blank)";

/// Generate a plain-text preview of the layout
/// Shows at most `max_pages` pages in print order, one line per grid row
pub fn generate_preview(document: &LayoutDocument, max_pages: usize) -> String {
    let columns = document.settings().columns.max(1);
    let direction = match document.page_direction() {
        PageDirection::Ltr => "ltr",
        PageDirection::Rtl => "rtl",
    };

    let width = document
        .panels()
        .map(|panel| panel_label(panel).len())
        .max()
        .unwrap_or(0)
        .max(BLANK_LABEL.len());

    let mut out = String::new();
    for page in document.pages().iter().take(max_pages) {
        let number = page.number().unwrap_or_default();
        // Writing to a String cannot fail
        let _ = writeln!(
            out,
            "Page {} of {} ({})",
            number,
            document.page_count(),
            direction
        );

        for row in page.panels.chunks(columns) {
            let cells: Vec<String> = row
                .iter()
                .map(|panel| format!("[{:<width$}]", panel_label(panel), width = width))
                .collect();
            let _ = writeln!(out, "  {}", cells.join(" "));
        }
    }

    let hidden = document.page_count().saturating_sub(max_pages);
    if hidden > 0 {
        let _ = writeln!(out, "... {} more pages", hidden);
    }

    out
}

fn panel_label(panel: &Panel) -> String {
    match (panel.filename(), panel.is_cover) {
        (Some(name), true) => format!("*{}*", name),
        (Some(name), false) => name.to_string(),
        (None, _) => BLANK_LABEL.to_string(),
    }
}
