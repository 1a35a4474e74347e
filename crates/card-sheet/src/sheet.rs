//! Arrangement orchestration
//!
//! A [`Sheet`] takes a paper and a list of layouts and produces the full
//! ordered list of pages:
//! 1. Check that every face fits the paper before anything is packed
//! 2. Split flow layouts into runs of equally sized components
//! 3. Run each layout's method and concatenate the pages in order

use log::{debug, warn};

use crate::layout::{Layout, Method, Order};
use crate::page::Page;
use crate::paper::Paper;
use crate::types::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    paper: Paper,
    layouts: Vec<Layout>,
}

impl Sheet {
    pub fn new(paper: Paper) -> Self {
        Self {
            paper,
            layouts: Vec::new(),
        }
    }

    pub fn with_layouts(paper: Paper, layouts: Vec<Layout>) -> Self {
        Self { paper, layouts }
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layouts.push(layout);
        self
    }

    pub fn paper(&self) -> &Paper {
        &self.paper
    }

    pub fn layouts(&self) -> &[Layout] {
        &self.layouts
    }

    /// Arrange every layout onto pages
    pub fn arrange(&self) -> Result<Vec<Page>> {
        if self.layouts.is_empty() {
            warn!("No layouts to arrange");
            return Ok(Vec::new());
        }

        self.validate_fit()?;

        let mut pages = Vec::new();
        for (index, layout) in self.layouts.iter().enumerate() {
            if let Method::Custom(arrangement) = &layout.method {
                arrangement.validate()?;
            }
            if layout.components.is_empty() {
                warn!("Layout {} has no components, skipping", index);
                continue;
            }

            let runs = layout.split_by_extent();
            debug!(
                "Layout {} ({}) split into {} runs",
                index,
                layout.method.name(),
                runs.len()
            );
            for run in runs {
                let run_pages = run.arrange(&self.paper)?;
                debug!(
                    "Run of {} components produced {} pages",
                    run.components.len(),
                    run_pages.len()
                );
                pages.extend(run_pages);
            }
        }

        Ok(pages)
    }

    /// Reject any front or back larger than the printable area
    pub fn validate_fit(&self) -> Result<()> {
        let bounds = self.paper.inner_bounds();
        for layout in &self.layouts {
            for component in Order::InterleavingBacks.apply(&layout.components) {
                let extent = component.portrait_oriented_extent();
                if !extent.fits_within(bounds) {
                    return Err(ArrangeError::OutOfBounds(extent));
                }
            }
        }
        Ok(())
    }
}

/// Arrange `layouts` onto `paper`
pub fn arrange(paper: Paper, layouts: Vec<Layout>) -> Result<Vec<Page>> {
    Sheet::with_layouts(paper, layouts).arrange()
}
