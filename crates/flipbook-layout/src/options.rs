use crate::constants::*;
use crate::types::*;
use std::num::NonZeroUsize;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the cover panel is chosen
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CoverSelection {
    /// No cover slot
    #[default]
    None,
    /// A named image placed as panel 1
    File(String),
    /// The frame at the median index of the sorted listing.
    /// The frame also stays in the sequence.
    MedianFrame,
}

impl CoverSelection {
    pub fn is_none(&self) -> bool {
        matches!(self, CoverSelection::None)
    }
}

/// Presentation tokens forwarded to the renderer without interpretation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct PresentationSettings {
    pub title: String,
    pub footer: String,

    // Page
    pub page_width: String,
    pub page_height: String,
    pub page_padding: String,
    pub handle_padding: String,

    // Image
    pub image_width: String,
    pub image_height: String,
    pub image_margin: String,
    pub image_position: String,
    pub image_rotate: String,
    pub image_filter: String,
    pub crop: bool,

    pub print_cut_lines: bool,
}

impl Default for PresentationSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            footer: DEFAULT_FOOTER.to_string(),
            page_width: DEFAULT_PAGE_WIDTH.to_string(),
            page_height: DEFAULT_PAGE_HEIGHT.to_string(),
            page_padding: DEFAULT_PAGE_PADDING.to_string(),
            handle_padding: DEFAULT_HANDLE_PADDING.to_string(),
            image_width: DEFAULT_IMAGE_WIDTH.to_string(),
            image_height: DEFAULT_IMAGE_HEIGHT.to_string(),
            image_margin: DEFAULT_IMAGE_MARGIN.to_string(),
            image_position: DEFAULT_IMAGE_POSITION.to_string(),
            image_rotate: DEFAULT_IMAGE_ROTATE.to_string(),
            image_filter: DEFAULT_IMAGE_FILTER.to_string(),
            crop: true,
            print_cut_lines: false,
        }
    }
}

/// Complete flipbook layout configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct LayoutSettings {
    pub version: u32,

    // Grid
    pub rows: usize,
    pub columns: usize,

    // Sequence
    pub flyleaves_count: usize,
    pub cover: CoverSelection,
    pub order: PanelOrder,

    // Printing
    pub page_side: PageSide,

    #[cfg_attr(feature = "serde", serde(flatten))]
    pub presentation: PresentationSettings,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            flyleaves_count: DEFAULT_FLYLEAVES_COUNT,
            cover: CoverSelection::None,
            order: PanelOrder::Sequential,
            page_side: PageSide::Front,
            presentation: PresentationSettings::default(),
        }
    }
}

impl LayoutSettings {
    /// Load settings from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let settings: Self = serde_json::from_slice(&bytes)
            .map_err(|e| LayoutError::Config(format!("Failed to parse settings: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| LayoutError::Config(format!("Failed to serialize settings: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.version != SETTINGS_VERSION {
            return Err(LayoutError::Config(format!(
                "Unsupported settings version {} (expected {})",
                self.version, SETTINGS_VERSION
            )));
        }

        if self.rows == 0 {
            return Err(LayoutError::Config("Rows must be at least 1".to_string()));
        }

        if self.columns == 0 {
            return Err(LayoutError::Config(
                "Columns must be at least 1".to_string(),
            ));
        }

        if self.rows.checked_mul(self.columns).is_none() {
            return Err(LayoutError::Config(format!(
                "Grid of {} x {} panels is too large",
                self.rows, self.columns
            )));
        }

        if let CoverSelection::File(name) = &self.cover {
            if name.trim().is_empty() {
                return Err(LayoutError::Config(
                    "Cover filename must not be empty".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Panels per page (`rows * columns`)
    pub fn panels_per_page(&self) -> Result<NonZeroUsize> {
        self.rows
            .checked_mul(self.columns)
            .and_then(NonZeroUsize::new)
            .ok_or_else(|| {
                LayoutError::Config(format!(
                    "Invalid grid of {} x {} panels",
                    self.rows, self.columns
                ))
            })
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::CoverSelection;
    use serde::{Deserialize, Serialize};

    // null => none, "name.png" => file, {"policy": "median"} => median frame
    impl Serialize for CoverSelection {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            use serde::ser::SerializeStruct;
            match self {
                CoverSelection::None => serializer.serialize_none(),
                CoverSelection::File(name) => serializer.serialize_str(name),
                CoverSelection::MedianFrame => {
                    let mut s = serializer.serialize_struct("CoverSelection", 1)?;
                    s.serialize_field("policy", "median")?;
                    s.end()
                }
            }
        }
    }

    impl<'de> Deserialize<'de> for CoverSelection {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            use serde::de::{self, MapAccess, Visitor};
            use std::fmt;

            struct CoverSelectionVisitor;

            impl<'de> Visitor<'de> for CoverSelectionVisitor {
                type Value = CoverSelection;

                fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                    formatter.write_str("null, a cover filename, or a cover policy")
                }

                fn visit_none<E>(self) -> std::result::Result<CoverSelection, E>
                where
                    E: de::Error,
                {
                    Ok(CoverSelection::None)
                }

                fn visit_unit<E>(self) -> std::result::Result<CoverSelection, E>
                where
                    E: de::Error,
                {
                    Ok(CoverSelection::None)
                }

                fn visit_some<D>(self, deserializer: D) -> std::result::Result<CoverSelection, D::Error>
                where
                    D: serde::Deserializer<'de>,
                {
                    deserializer.deserialize_any(CoverSelectionVisitor)
                }

                fn visit_str<E>(self, value: &str) -> std::result::Result<CoverSelection, E>
                where
                    E: de::Error,
                {
                    Ok(CoverSelection::File(value.to_string()))
                }

                fn visit_map<M>(self, mut map: M) -> std::result::Result<CoverSelection, M::Error>
                where
                    M: MapAccess<'de>,
                {
                    let mut policy: Option<String> = None;
                    while let Some(key) = map.next_key::<String>()? {
                        match key.as_str() {
                            "policy" => policy = Some(map.next_value()?),
                            _ => {
                                let _: serde::de::IgnoredAny = map.next_value()?;
                            }
                        }
                    }

                    match policy.as_deref() {
                        Some("median") => Ok(CoverSelection::MedianFrame),
                        Some(other) => Err(de::Error::unknown_variant(other, &["median"])),
                        None => Err(de::Error::missing_field("policy")),
                    }
                }
            }

            deserializer.deserialize_any(CoverSelectionVisitor)
        }
    }
}
