//! One physical side of a printed sheet
//!
//! A page is built monotonically during arrangement: placements are
//! appended in paint order and guides are pushed beneath everything already
//! on the page.

use crate::component::Component;
use crate::geometry::{Distance, Size};
use crate::types::{Axis, Rotation};

/// How the coordinates of a page's elements are anchored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoordinateMode {
    /// Origin is the top-left corner of the paper's inner (margin) area
    PageMargin,
    /// Origin is the top-left corner of the page's bounding box, which the
    /// renderer centers inside the inner area
    BoundingBox,
}

/// A component placed on a page
///
/// `x`/`y` locate the top-left corner of the component's portrait-oriented
/// extent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub component: Component,
    pub x: Distance,
    pub y: Distance,
    pub rotation: Rotation,
}

impl Placement {
    pub fn extent(&self) -> Size {
        self.component.portrait_oriented_extent()
    }

    pub fn right(&self) -> Distance {
        self.x + self.extent().width
    }

    pub fn bottom(&self) -> Distance {
        self.y + self.extent().height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GuideKind {
    Cut,
    Fold,
}

/// A non-printing line for post-processing (cutting or folding)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Guide {
    pub kind: GuideKind,
    /// Start of the line
    pub x: Distance,
    pub y: Distance,
    /// Length of the line along `axis`
    pub length: Distance,
    pub axis: Axis,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    Component(Placement),
    Guide(Guide),
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Page {
    extent: Size,
    coordinate_mode: CoordinateMode,
    elements: Vec<Element>,
}

impl Page {
    pub fn new(extent: Size, coordinate_mode: CoordinateMode) -> Self {
        Self {
            extent,
            coordinate_mode,
            elements: Vec::new(),
        }
    }

    pub fn extent(&self) -> Size {
        self.extent
    }

    pub fn coordinate_mode(&self) -> CoordinateMode {
        self.coordinate_mode
    }

    /// All elements in paint order
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn placements(&self) -> impl Iterator<Item = &Placement> {
        self.elements.iter().filter_map(|element| match element {
            Element::Component(placement) => Some(placement),
            Element::Guide(_) => None,
        })
    }

    pub fn guides(&self) -> impl Iterator<Item = &Guide> {
        self.elements.iter().filter_map(|element| match element {
            Element::Guide(guide) => Some(guide),
            Element::Component(_) => None,
        })
    }

    pub fn has_placements(&self) -> bool {
        self.placements().next().is_some()
    }

    pub fn arrange(&mut self, component: Component, x: Distance, y: Distance, rotation: Rotation) {
        self.elements.push(Element::Component(Placement {
            component,
            x,
            y,
            rotation,
        }));
    }

    pub fn cut(&mut self, x: Distance, y: Distance, length: Distance, axis: Axis) {
        self.guide(GuideKind::Cut, x, y, length, axis);
    }

    pub fn fold(&mut self, x: Distance, y: Distance, length: Distance, axis: Axis) {
        self.guide(GuideKind::Fold, x, y, length, axis);
    }

    fn guide(&mut self, kind: GuideKind, x: Distance, y: Distance, length: Distance, axis: Axis) {
        // Guides paint beneath everything already on the page
        self.elements.insert(
            0,
            Element::Guide(Guide {
                kind,
                x,
                y,
                length,
                axis,
            }),
        );
    }

    /// Smallest size covering every placed component
    pub fn bounding_box(&self) -> Size {
        bounding_box(
            self.placements()
                .map(|placement| (placement.x, placement.y, placement.extent())),
        )
    }
}

/// Size spanned by a set of `(x, y, extent)` rectangles
pub(crate) fn bounding_box(rects: impl IntoIterator<Item = (Distance, Distance, Size)>) -> Size {
    let mut bounds: Option<(Distance, Distance, Distance, Distance)> = None;

    for (x, y, extent) in rects {
        let right = x + extent.width;
        let bottom = y + extent.height;
        bounds = Some(match bounds {
            None => (x, y, right, bottom),
            Some((min_x, min_y, max_x, max_y)) => (
                min_x.min(x),
                min_y.min(y),
                max_x.max(right),
                max_y.max(bottom),
            ),
        });
    }

    match bounds {
        Some((min_x, min_y, max_x, max_y)) => Size::new(max_x - min_x, max_y - min_y),
        None => Size::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> Component {
        Component::new("card", Size::mm(60.0, 90.0))
    }

    #[test]
    fn test_guides_are_inserted_first() {
        let mut page = Page::new(Size::mm(200.0, 280.0), CoordinateMode::PageMargin);
        page.arrange(card(), Distance::ZERO, Distance::ZERO, Rotation::None);
        page.cut(Distance::ZERO, Distance::mm(90.0), Distance::mm(200.0), Axis::Horizontal);
        page.arrange(card(), Distance::mm(60.0), Distance::ZERO, Rotation::None);
        page.fold(Distance::mm(100.0), Distance::ZERO, Distance::mm(280.0), Axis::Vertical);

        let elements = page.elements();
        assert_eq!(elements.len(), 4);
        assert!(matches!(&elements[0], Element::Guide(g) if g.kind == GuideKind::Fold));
        assert!(matches!(&elements[1], Element::Guide(g) if g.kind == GuideKind::Cut));
        assert!(matches!(&elements[2], Element::Component(p) if p.x == Distance::ZERO));
        assert!(matches!(&elements[3], Element::Component(p) if p.x == Distance::mm(60.0)));
    }

    #[test]
    fn test_bounding_box_ignores_page_extent() {
        let mut page = Page::new(Size::mm(200.0, 280.0), CoordinateMode::BoundingBox);
        assert_eq!(page.bounding_box(), Size::ZERO);

        page.arrange(card(), Distance::mm(10.0), Distance::mm(5.0), Rotation::None);
        page.arrange(card(), Distance::mm(70.0), Distance::mm(95.0), Rotation::Clockwise180);

        assert_eq!(page.bounding_box(), Size::mm(120.0, 180.0));
    }

    #[test]
    fn test_bounding_box_uses_portrait_extent() {
        let mut page = Page::new(Size::mm(200.0, 280.0), CoordinateMode::BoundingBox);
        let landscape = Component::new("wide", Size::mm(90.0, 60.0));
        page.arrange(landscape, Distance::ZERO, Distance::ZERO, Rotation::None);

        assert_eq!(page.bounding_box(), Size::mm(60.0, 90.0));
    }
}
