//! Render context persistence

use crate::document::LayoutDocument;
use crate::types::*;
use std::path::Path;

/// Write the layout as pretty JSON for the template renderer
pub async fn save_document(document: &LayoutDocument, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(document)
        .map_err(|e| LayoutError::Config(format!("Failed to serialize layout: {}", e)))?;
    tokio::fs::write(path, json).await?;

    log::info!(
        "Wrote layout with {} pages to {}",
        document.page_count(),
        path.display()
    );
    Ok(())
}
