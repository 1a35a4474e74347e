//! Custom layouts driven by a repeating directive template

use std::collections::VecDeque;

use log::debug;

use crate::component::Component;
use crate::geometry::{Distance, Size};
use crate::page::{CoordinateMode, Page};
use crate::types::*;

/// One instruction in a custom arrangement template
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Directive {
    /// Place the next component. `page` is relative to the current page,
    /// so `1` targets the page after it (e.g. the back of a duplex pair).
    Placement {
        x: Distance,
        y: Distance,
        #[cfg_attr(feature = "serde", serde(default))]
        rotation: Rotation,
        #[cfg_attr(feature = "serde", serde(default))]
        page: usize,
    },
    /// Finish the current page and continue on a new one
    PageBreak,
    /// Cut guide across the inner area, `distance` along the perpendicular axis
    Cut { distance: Distance, axis: Axis },
    /// Fold guide across the inner area, `distance` along the perpendicular axis
    Fold { distance: Distance, axis: Axis },
}

/// Ordered template of directives, repeated until all components are placed
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arrangement {
    directives: Vec<Directive>,
}

impl Arrangement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_directives(directives: Vec<Directive>) -> Self {
        Self { directives }
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    pub fn push(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }

    pub fn place(self, x: Distance, y: Distance) -> Self {
        self.place_on(0, x, y, Rotation::None)
    }

    pub fn place_rotated(self, x: Distance, y: Distance, rotation: Rotation) -> Self {
        self.place_on(0, x, y, rotation)
    }

    pub fn place_on(self, page: usize, x: Distance, y: Distance, rotation: Rotation) -> Self {
        self.push(Directive::Placement {
            x,
            y,
            rotation,
            page,
        })
    }

    pub fn page_break(self) -> Self {
        self.push(Directive::PageBreak)
    }

    pub fn cut(self, distance: Distance, axis: Axis) -> Self {
        self.push(Directive::Cut { distance, axis })
    }

    pub fn fold(self, distance: Distance, axis: Axis) -> Self {
        self.push(Directive::Fold { distance, axis })
    }

    /// Number of placement directives in one pass of the template
    pub fn placement_count(&self) -> usize {
        self.directives
            .iter()
            .filter(|d| matches!(d, Directive::Placement { .. }))
            .count()
    }

    /// A template without placements would never consume a component
    pub fn validate(&self) -> Result<()> {
        if self.placement_count() == 0 {
            return Err(ArrangeError::EmptyArrangement);
        }
        Ok(())
    }
}

pub(crate) fn arrange_custom(
    components: &[Component],
    arrangement: &Arrangement,
    bounds: Size,
) -> Result<Vec<Page>> {
    arrangement.validate()?;

    // Popping from the end yields components in their original order
    let mut stack: Vec<Component> = components.iter().rev().cloned().collect();
    let mut pages = Vec::new();
    let mut open: VecDeque<Page> = VecDeque::new();
    let mut passes = 0usize;

    while !stack.is_empty() {
        passes += 1;
        for directive in arrangement.directives() {
            match *directive {
                Directive::Placement {
                    x,
                    y,
                    rotation,
                    page,
                } => {
                    let Some(component) = stack.pop() else {
                        continue;
                    };
                    page_at(&mut open, page, bounds).arrange(component, x, y, rotation);
                }
                Directive::PageBreak => {
                    if let Some(page) = open.pop_front() {
                        finish(&mut pages, page);
                    }
                }
                Directive::Cut { distance, axis } => {
                    let (x, y, length) = guide_line(distance, axis, bounds);
                    page_at(&mut open, 0, bounds).cut(x, y, length, axis);
                }
                Directive::Fold { distance, axis } => {
                    let (x, y, length) = guide_line(distance, axis, bounds);
                    page_at(&mut open, 0, bounds).fold(x, y, length, axis);
                }
            }
        }
        for page in open.drain(..) {
            finish(&mut pages, page);
        }
    }

    debug!(
        "custom arrangement ran {} passes, {} pages",
        passes,
        pages.len()
    );
    Ok(pages)
}

/// Page `offset` pages after the current one, opening pages as needed
fn page_at(open: &mut VecDeque<Page>, offset: usize, bounds: Size) -> &mut Page {
    while open.len() <= offset {
        open.push_back(Page::new(bounds, CoordinateMode::PageMargin));
    }
    &mut open[offset]
}

/// Pages holding only guides are dropped once components run out
fn finish(pages: &mut Vec<Page>, page: Page) {
    if page.has_placements() {
        pages.push(page);
    }
}

/// Start and length of a guide spanning the inner area
fn guide_line(distance: Distance, axis: Axis, bounds: Size) -> (Distance, Distance, Distance) {
    match axis {
        Axis::Horizontal => (Distance::ZERO, distance, bounds.width),
        Axis::Vertical => (distance, Distance::ZERO, bounds.height),
    }
}
