mod component;
pub mod constants;
mod geometry;
pub mod layout;
mod options;
mod page;
mod paper;
mod sheet;
mod stats;
mod types;

pub use component::Component;
pub use geometry::{Area, Distance, Insets, Size};
pub use layout::{Arrangement, Directive, Flow, Layout, Method, Order, pack_left_to_right};
pub use options::*;
pub use page::{CoordinateMode, Element, Guide, GuideKind, Page, Placement};
pub use paper::Paper;
pub use sheet::{Sheet, arrange};
pub use stats::{ArrangementStatistics, calculate_statistics};
pub use types::*;
