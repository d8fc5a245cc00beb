use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cannot read frame directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Cover image not found: {}", .0.display())]
    MissingCover(PathBuf),
    #[error("Input file not found: {}", .0.display())]
    MissingInput(PathBuf),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Frame extraction failed: {0}")]
    Extract(String),
}

pub type Result<T> = std::result::Result<T, LayoutError>;

/// Which face of a double-sided print job a page set represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PageSide {
    /// Pages in sheet order, read left to right
    #[default]
    Front,
    /// Pages in reverse sheet order, read right to left
    Back,
}

impl PageSide {
    /// Reading direction for pages printed on this side
    pub fn direction(self) -> PageDirection {
        match self {
            PageSide::Front => PageDirection::Ltr,
            PageSide::Back => PageDirection::Rtl,
        }
    }
}

/// Reading-direction hint handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PageDirection {
    Ltr,
    Rtl,
}

/// How source frames are mapped onto panel slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PanelOrder {
    /// Left to right, top to bottom, page after page
    #[default]
    Sequential,
    /// Column-major transpose so cut and stacked sheets rebuild the sequence
    Imposition,
}

/// What a panel slot shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelContent {
    Filled { filename: String },
    /// Flyleaf or unfilled imposition slot
    Blank,
}

impl PanelContent {
    pub fn filled(filename: impl Into<String>) -> Self {
        PanelContent::Filled {
            filename: filename.into(),
        }
    }

    pub fn filename(&self) -> Option<&str> {
        match self {
            PanelContent::Filled { filename } => Some(filename),
            PanelContent::Blank => None,
        }
    }
}

/// One grid cell of the flipbook
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    /// 1-based position in the assembled sequence
    pub id: usize,
    pub content: PanelContent,
    /// 1-based page number
    pub page: usize,
    pub is_cover: bool,
}

impl Panel {
    pub fn filename(&self) -> Option<&str> {
        self.content.filename()
    }

    pub fn is_blank(&self) -> bool {
        matches!(self.content, PanelContent::Blank)
    }
}

/// A fixed-capacity group of panels, in assembly order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Page {
    pub panels: Vec<Panel>,
}

impl Page {
    /// Page number shared by every panel on this page
    pub fn number(&self) -> Option<usize> {
        self.panels.first().map(|panel| panel.page)
    }
}

/// Statistics about a built layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutStatistics {
    /// Filled panels that are not the cover
    pub frame_count: usize,
    pub panel_count: usize,
    pub page_count: usize,
    pub panels_per_page: usize,
    /// Flyleaf panels at both ends combined
    pub flyleaf_panels: usize,
    /// Every blank panel, flyleaves and imposition padding alike
    pub blank_panels: usize,
    /// Grid cells left without a panel on the last page
    pub empty_slots: usize,
    pub has_cover: bool,
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Panel;
    use serde::ser::{Serialize, SerializeStruct, Serializer};

    // Renderers iterate panels with a nullable `filename`
    impl Serialize for Panel {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let mut s = serializer.serialize_struct("Panel", 4)?;
            s.serialize_field("id", &self.id)?;
            s.serialize_field("filename", &self.filename())?;
            s.serialize_field("page", &self.page)?;
            s.serialize_field("isCover", &self.is_cover)?;
            s.end()
        }
    }
}
