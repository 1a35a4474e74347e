//! Layout data types
//!
//! A [`Layout`] is one ordered batch of components together with the
//! [`Method`] used to put them on paper.

use crate::component::Component;
use crate::geometry::{Distance, Size};

use super::Arrangement;

/// How a layout places its components
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    /// Single-sided row packing; backs are never reproduced
    Natural { spacing: Size },
    /// Front pages followed by mirrored back pages for double-sided printing
    Duplex { spacing: Size },
    /// Fronts on the top half of the sheet, backs mirrored below a fold line
    Fold { spacing: Size, gutter: Distance },
    /// Fixed directive template repeated until every component is placed
    Custom(Arrangement),
}

impl Method {
    pub fn natural() -> Self {
        Method::Natural {
            spacing: Size::ZERO,
        }
    }

    pub fn duplex() -> Self {
        Method::Duplex {
            spacing: Size::ZERO,
        }
    }

    pub fn fold(gutter: Distance) -> Self {
        Method::Fold {
            spacing: Size::ZERO,
            gutter,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Method::Natural { .. } => "natural",
            Method::Duplex { .. } => "duplex",
            Method::Fold { .. } => "fold",
            Method::Custom(_) => "custom",
        }
    }
}

/// Which faces a method sees, and in what order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Order {
    /// Fronts only
    #[default]
    SkippingBacks,
    /// Every front, then every back
    FrontsThenBacks,
    /// Each front immediately followed by its back
    InterleavingBacks,
}

impl Order {
    /// Flatten components into the face list this policy describes.
    ///
    /// Every returned face has its back stripped.
    pub fn apply(self, components: &[Component]) -> Vec<Component> {
        let fronts = components.iter().map(Component::front_only);
        match self {
            Order::SkippingBacks => fronts.collect(),
            Order::FrontsThenBacks => fronts
                .chain(components.iter().filter_map(|c| c.back().cloned()))
                .collect(),
            Order::InterleavingBacks => components
                .iter()
                .flat_map(|c| std::iter::once(c.front_only()).chain(c.back().cloned()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    pub components: Vec<Component>,
    pub method: Method,
    #[cfg_attr(feature = "serde", serde(default))]
    pub order: Order,
}

impl Layout {
    pub fn new(components: Vec<Component>, method: Method) -> Self {
        Self {
            components,
            method,
            order: Order::default(),
        }
    }

    pub fn with_order(self, order: Order) -> Self {
        Self { order, ..self }
    }
}
