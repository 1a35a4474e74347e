use crate::constants::DEFAULT_MARGIN_MM;
use crate::geometry::{Distance, Size};
use crate::layout::{Layout, Method};
use crate::paper::Paper;
use crate::sheet::Sheet;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Paper selection for an arrangement
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PaperOptions {
    pub size: PaperSize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub orientation: Orientation,
    /// Left/right margin as `width`, top/bottom margin as `height`
    pub margin: Size,
}

impl Default for PaperOptions {
    fn default() -> Self {
        Self {
            size: PaperSize::A4,
            orientation: Orientation::Portrait,
            margin: Size::uniform(Distance::mm(DEFAULT_MARGIN_MM)),
        }
    }
}

impl PaperOptions {
    pub fn to_paper(&self) -> Result<Paper> {
        let (width_mm, height_mm) = self.size.dimensions_with_orientation(self.orientation);
        Paper::new(Size::mm(width_mm, height_mm), self.margin)
    }
}

/// Complete arrangement configuration: paper plus layouts
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArrangementOptions {
    #[cfg_attr(feature = "serde", serde(default))]
    pub paper: PaperOptions,
    #[cfg_attr(feature = "serde", serde(default))]
    pub layouts: Vec<Layout>,
}

impl ArrangementOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| ArrangeError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ArrangeError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        self.paper.to_paper()?;

        for (index, layout) in self.layouts.iter().enumerate() {
            match &layout.method {
                Method::Natural { spacing } | Method::Duplex { spacing } => {
                    check_spacing(index, *spacing)?;
                }
                Method::Fold { spacing, gutter } => {
                    check_spacing(index, *spacing)?;
                    if *gutter < Distance::ZERO {
                        return Err(ArrangeError::Config(format!(
                            "Layout {} has a negative fold gutter",
                            index
                        )));
                    }
                }
                Method::Custom(arrangement) => arrangement.validate()?,
            }
        }

        Ok(())
    }

    /// Build the orchestrator for these options
    pub fn to_sheet(&self) -> Result<Sheet> {
        self.validate()?;
        Ok(Sheet::with_layouts(
            self.paper.to_paper()?,
            self.layouts.clone(),
        ))
    }
}

fn check_spacing(index: usize, spacing: Size) -> Result<()> {
    if spacing.width < Distance::ZERO || spacing.height < Distance::ZERO {
        return Err(ArrangeError::Config(format!(
            "Layout {} has negative spacing {}",
            index, spacing
        )));
    }
    Ok(())
}
