//! Left-to-right row packing
//!
//! Components flow into rows in their given order and wrap to the next row
//! (and page) when the next one would cross the bounds. Nothing is
//! reordered; this is a flow layout.

use log::trace;

use crate::component::Component;
use crate::geometry::{Distance, Size};
use crate::page::{CoordinateMode, Page, bounding_box};
use crate::types::Rotation;

/// Horizontal direction rows are filled in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// First component at the left edge
    Forward,
    /// Mirrored about the page's bounding box, so a back page lines up
    /// with the front page it is printed behind
    Reverse,
}

/// Pack `components` into as many pages of `bounds` as needed.
///
/// Every component must already fit within `bounds`.
pub fn pack_left_to_right(
    components: &[Component],
    spacing: Size,
    bounds: Size,
    flow: Flow,
) -> Vec<Page> {
    let mut pages = Vec::new();
    let mut pending: Vec<(&Component, Distance, Distance)> = Vec::new();
    let mut x = Distance::ZERO;
    let mut y = Distance::ZERO;

    for component in components {
        let extent = component.portrait_oriented_extent();
        pending.push((component, x, y));

        x += extent.width + spacing.width;
        if (x + extent.width).exceeds(bounds.width) {
            x = Distance::ZERO;
            y += extent.height + spacing.height;
        }

        if (y + extent.height).exceeds(bounds.height) {
            pages.push(flush(&mut pending, bounds, flow));
            x = Distance::ZERO;
            y = Distance::ZERO;
        }
    }

    if !pending.is_empty() {
        pages.push(flush(&mut pending, bounds, flow));
    }

    pages
}

/// Place the buffered offsets onto a fresh page
fn flush(pending: &mut Vec<(&Component, Distance, Distance)>, bounds: Size, flow: Flow) -> Page {
    let bbox = bounding_box(
        pending
            .iter()
            .map(|(component, x, y)| (*x, *y, component.portrait_oriented_extent())),
    );
    trace!(
        "flushing {} components onto page, bounding box {}",
        pending.len(),
        bbox
    );

    let mut page = Page::new(bounds, CoordinateMode::BoundingBox);
    for (component, x, y) in pending.drain(..) {
        let x = match flow {
            Flow::Forward => x,
            Flow::Reverse => bbox.width - x - component.portrait_oriented_extent().width,
        };
        page.arrange(component.clone(), x, y, Rotation::None);
    }
    page
}
