//! Layout methods for arranging components onto pages
//!
//! This module holds the per-method algorithms:
//! - Left-to-right row packing shared by the flow-based methods
//! - Natural (single-sided) and duplex (front/back pages) layouts
//! - Fold layouts mirroring backs across a horizontal fold
//! - Custom layouts driven by a repeating directive template

mod custom;
mod duplex;
mod fold;
mod packer;
mod types;

pub use custom::*;
pub use packer::*;
pub use types::*;

use crate::component::Component;
use crate::page::Page;
use crate::paper::Paper;
use crate::types::Result;

impl Layout {
    /// Run this layout's method against the paper's inner bounds
    pub fn arrange(&self, paper: &Paper) -> Result<Vec<Page>> {
        let bounds = paper.inner_bounds();

        match &self.method {
            Method::Natural { spacing } => Ok(runs_by_extent(self.ordered_components())
                .iter()
                .flat_map(|run| pack_left_to_right(run, *spacing, bounds, Flow::Forward))
                .collect()),
            Method::Duplex { spacing } => {
                duplex::arrange_duplex(&self.components, *spacing, bounds)
            }
            Method::Fold { spacing, gutter } => {
                fold::arrange_fold(&self.components, *spacing, *gutter, bounds)
            }
            Method::Custom(arrangement) => {
                let components = self.ordered_components();
                custom::arrange_custom(&components, arrangement, bounds)
            }
        }
    }

    /// Components in the order the layout's [`Order`] policy dictates
    pub fn ordered_components(&self) -> Vec<Component> {
        self.order.apply(&self.components)
    }

    /// Cut the layout into consecutive runs of equally sized components.
    ///
    /// Natural layouts are split over the faces their [`Order`] exposes, so
    /// each run holds those faces as plain fronts. Duplex and fold layouts
    /// are split by front. Custom layouts are returned whole since their
    /// templates may mix sizes on purpose.
    pub fn split_by_extent(&self) -> Vec<Layout> {
        match self.method {
            Method::Custom(_) => vec![self.clone()],
            Method::Natural { .. } => runs_by_extent(self.ordered_components())
                .into_iter()
                .map(|faces| Layout::new(faces, self.method.clone()))
                .collect(),
            Method::Duplex { .. } | Method::Fold { .. } => {
                runs_by_extent(self.components.clone())
                    .into_iter()
                    .map(|components| Layout {
                        components,
                        method: self.method.clone(),
                        order: self.order,
                    })
                    .collect()
            }
        }
    }
}

/// Group consecutive components sharing a portrait-oriented extent
fn runs_by_extent(components: Vec<Component>) -> Vec<Vec<Component>> {
    let mut runs: Vec<Vec<Component>> = Vec::new();
    for component in components {
        let extent = component.portrait_oriented_extent();
        match runs.last_mut() {
            Some(run)
                if run
                    .last()
                    .is_some_and(|last| last.portrait_oriented_extent().approx_eq(extent)) =>
            {
                run.push(component);
            }
            _ => runs.push(vec![component]),
        }
    }
    runs
}
