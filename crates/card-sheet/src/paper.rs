use crate::geometry::{Distance, Size};
use crate::types::*;

/// A sheet of paper with a printer-safe margin on every side
///
/// `margin.width` is applied to the left and right edges, `margin.height`
/// to the top and bottom edges.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PaperFields"))]
pub struct Paper {
    extent: Size,
    margin: Size,
}

/// Unchecked paper fields; deserialization goes through [`Paper::new`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PaperFields {
    extent: Size,
    margin: Size,
}

#[cfg(feature = "serde")]
impl TryFrom<PaperFields> for Paper {
    type Error = ArrangeError;

    fn try_from(fields: PaperFields) -> Result<Self> {
        Paper::new(fields.extent, fields.margin)
    }
}

impl Paper {
    pub fn new(extent: Size, margin: Size) -> Result<Self> {
        let paper = Self { extent, margin };
        paper.validate()?;
        Ok(paper)
    }

    /// Standard paper size with a uniform margin
    pub fn from_preset(
        size: PaperSize,
        orientation: Orientation,
        margin: Distance,
    ) -> Result<Self> {
        let (width_mm, height_mm) = size.dimensions_with_orientation(orientation);
        Self::new(Size::mm(width_mm, height_mm), Size::uniform(margin))
    }

    pub fn validate(&self) -> Result<()> {
        if !self.inner_bounds().is_positive() {
            return Err(ArrangeError::InvalidPaper(format!(
                "margin {} leaves no printable area on {}",
                self.margin, self.extent
            )));
        }
        Ok(())
    }

    pub fn extent(&self) -> Size {
        self.extent
    }

    pub fn margin(&self) -> Size {
        self.margin
    }

    /// Printable area inside the margins
    pub fn inner_bounds(&self) -> Size {
        self.extent - self.margin * 2.0
    }

    pub fn orientation(&self) -> Orientation {
        if self.extent.is_landscape() {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    pub fn portrait(&self) -> Paper {
        self.oriented(Orientation::Portrait)
    }

    pub fn landscape(&self) -> Paper {
        self.oriented(Orientation::Landscape)
    }

    /// Rotate the sheet so it matches `orientation`; margins follow the edges
    pub fn oriented(&self, orientation: Orientation) -> Paper {
        if self.orientation() == orientation {
            *self
        } else {
            Paper {
                extent: self.extent.swapped(),
                margin: self.margin.swapped(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_bounds() {
        let paper = Paper::from_preset(PaperSize::A4, Orientation::Portrait, Distance::mm(8.0))
            .unwrap();
        assert!(paper.inner_bounds().approx_eq(Size::mm(194.0, 281.0)));
    }

    #[test]
    fn test_landscape_swaps_margins() {
        let paper = Paper::new(Size::mm(210.0, 297.0), Size::mm(5.0, 10.0)).unwrap();
        let landscape = paper.landscape();

        assert_eq!(landscape.extent(), Size::mm(297.0, 210.0));
        assert_eq!(landscape.margin(), Size::mm(10.0, 5.0));
        assert_eq!(landscape.orientation(), Orientation::Landscape);
        assert_eq!(landscape.portrait(), paper);
        assert_eq!(paper.portrait(), paper);
    }

    #[test]
    fn test_margin_consuming_paper_is_rejected() {
        let result = Paper::new(Size::mm(100.0, 100.0), Size::mm(50.0, 10.0));
        assert!(matches!(result, Err(ArrangeError::InvalidPaper(_))));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates_margins() {
        let paper = Paper::new(Size::mm(210.0, 297.0), Size::mm(5.0, 10.0)).unwrap();
        let json = serde_json::to_string(&paper).unwrap();
        assert_eq!(serde_json::from_str::<Paper>(&json).unwrap(), paper);

        let consumed = r#"{
            "extent": {"width": 100.0, "height": 100.0},
            "margin": {"width": 50.0, "height": 10.0}
        }"#;
        let error = serde_json::from_str::<Paper>(consumed).unwrap_err();
        assert!(error.to_string().contains("no printable area"));
    }
}
