//! Printable components as seen by the arrangement engine
//!
//! A component is a rectangle with a bleed margin around its cut line and a
//! trim margin inside it. It may own a single back face; backs never carry
//! backs of their own.

use crate::geometry::{Area, Distance, Insets, Size};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Component {
    /// Free-form name used by the renderer and in diagnostics
    #[cfg_attr(feature = "serde", serde(default))]
    pub label: String,
    /// Full extent including bleed
    extent: Size,
    #[cfg_attr(feature = "serde", serde(default))]
    bleed: Distance,
    #[cfg_attr(feature = "serde", serde(default))]
    trim: Distance,
    #[cfg_attr(feature = "serde", serde(default))]
    back: Option<Box<Component>>,
    #[cfg_attr(feature = "serde", serde(default))]
    blank: bool,
}

impl Component {
    /// Component whose full extent is `extent` (no bleed, no trim)
    pub fn new(label: impl Into<String>, extent: Size) -> Self {
        Self {
            label: label.into(),
            extent,
            bleed: Distance::ZERO,
            trim: Distance::ZERO,
            back: None,
            blank: false,
        }
    }

    /// Component sized by its cut line; bleed is added around `cut_size`
    pub fn with_cut_size(label: impl Into<String>, cut_size: Size, bleed: Distance) -> Self {
        Self::new(label, cut_size + Size::uniform(bleed * 2.0)).with_bleed(bleed)
    }

    /// Empty placeholder occupying `extent`, used where a back face is missing
    pub fn blank(extent: Size) -> Self {
        Self {
            blank: true,
            ..Self::new("", extent)
        }
    }

    pub fn with_bleed(self, bleed: Distance) -> Self {
        Self { bleed, ..self }
    }

    pub fn with_trim(self, trim: Distance) -> Self {
        Self { trim, ..self }
    }

    /// Attach a back face. Any back the given face carries is dropped.
    pub fn with_back(self, back: Component) -> Self {
        let back = Component { back: None, ..back };
        Self {
            back: Some(Box::new(back)),
            ..self
        }
    }

    pub fn back(&self) -> Option<&Component> {
        self.back.as_deref()
    }

    pub fn has_back(&self) -> bool {
        self.back.is_some()
    }

    pub fn is_blank(&self) -> bool {
        self.blank
    }

    pub fn extent(&self) -> Size {
        self.extent
    }

    pub fn bleed(&self) -> Distance {
        self.bleed
    }

    pub fn trim(&self) -> Distance {
        self.trim
    }

    /// Extent rotated so the longer edge is vertical
    pub fn portrait_oriented_extent(&self) -> Size {
        self.extent.portrait()
    }

    pub fn is_landscape(&self) -> bool {
        self.extent.is_landscape()
    }

    /// Whole component including bleed, in portrait orientation
    pub fn full(&self) -> Area {
        Area::root(self.portrait_oriented_extent())
    }

    /// Final cut size
    pub fn real(&self) -> Area {
        self.full().nested(Insets::uniform(self.bleed))
    }

    /// Region guaranteed to survive trimming
    pub fn safe(&self) -> Area {
        self.real().nested(Insets::uniform(self.trim))
    }

    /// This component without its back face
    pub fn front_only(&self) -> Component {
        Component {
            back: None,
            ..self.clone()
        }
    }

    /// The back face, or a blank of the same extent when there is none
    pub fn back_or_blank(&self) -> Component {
        match self.back() {
            Some(back) => back.clone(),
            None => Component::blank(self.extent),
        }
    }
}
