//! Unit-aware geometry primitives
//!
//! All lengths are carried as [`Distance`] values, which keep a canonical
//! millimeter representation so that inch, millimeter and point inputs can
//! be mixed freely in arithmetic.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::constants::{FIT_TOLERANCE_MM, MM_PER_INCH, POINTS_PER_MM};
use crate::types::Unit;

// =============================================================================
// Distance
// =============================================================================

/// A physical length
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Distance {
    mm: f32,
}

impl Distance {
    pub const ZERO: Distance = Distance { mm: 0.0 };

    pub const fn mm(value: f32) -> Self {
        Self { mm: value }
    }

    pub fn inches(value: f32) -> Self {
        Self {
            mm: value * MM_PER_INCH,
        }
    }

    pub fn points(value: f32) -> Self {
        Self {
            mm: value / POINTS_PER_MM,
        }
    }

    pub fn new(value: f32, unit: Unit) -> Self {
        match unit {
            Unit::Millimeters => Self::mm(value),
            Unit::Inches => Self::inches(value),
            Unit::Points => Self::points(value),
        }
    }

    pub fn to_mm(self) -> f32 {
        self.mm
    }

    pub fn to_inches(self) -> f32 {
        self.mm / MM_PER_INCH
    }

    pub fn to_points(self) -> f32 {
        self.mm * POINTS_PER_MM
    }

    /// Value expressed in the given unit
    pub fn in_unit(self, unit: Unit) -> f32 {
        match unit {
            Unit::Millimeters => self.to_mm(),
            Unit::Inches => self.to_inches(),
            Unit::Points => self.to_points(),
        }
    }

    pub fn max(self, other: Distance) -> Distance {
        Distance::mm(self.mm.max(other.mm))
    }

    pub fn min(self, other: Distance) -> Distance {
        Distance::mm(self.mm.min(other.mm))
    }

    pub fn abs(self) -> Distance {
        Distance::mm(self.mm.abs())
    }

    /// True when `self` is larger than `limit` by more than the fit tolerance
    pub fn exceeds(self, limit: Distance) -> bool {
        self.mm > limit.mm + FIT_TOLERANCE_MM
    }

    /// Equality within the fit tolerance
    pub fn approx_eq(self, other: Distance) -> bool {
        (self.mm - other.mm).abs() <= FIT_TOLERANCE_MM
    }

    pub fn is_positive(self) -> bool {
        self.mm > FIT_TOLERANCE_MM
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}mm", self.mm)
    }
}

impl Add for Distance {
    type Output = Distance;

    fn add(self, rhs: Distance) -> Distance {
        Distance::mm(self.mm + rhs.mm)
    }
}

impl Sub for Distance {
    type Output = Distance;

    fn sub(self, rhs: Distance) -> Distance {
        Distance::mm(self.mm - rhs.mm)
    }
}

impl AddAssign for Distance {
    fn add_assign(&mut self, rhs: Distance) {
        self.mm += rhs.mm;
    }
}

impl SubAssign for Distance {
    fn sub_assign(&mut self, rhs: Distance) {
        self.mm -= rhs.mm;
    }
}

impl Mul<f32> for Distance {
    type Output = Distance;

    fn mul(self, rhs: f32) -> Distance {
        Distance::mm(self.mm * rhs)
    }
}

impl Div<f32> for Distance {
    type Output = Distance;

    fn div(self, rhs: f32) -> Distance {
        Distance::mm(self.mm / rhs)
    }
}

impl Neg for Distance {
    type Output = Distance;

    fn neg(self) -> Distance {
        Distance::mm(-self.mm)
    }
}

impl Sum for Distance {
    fn sum<I: Iterator<Item = Distance>>(iter: I) -> Distance {
        iter.fold(Distance::ZERO, Add::add)
    }
}

// =============================================================================
// Size
// =============================================================================

/// Width and height of a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: Distance,
    pub height: Distance,
}

impl Size {
    pub const ZERO: Size = Size {
        width: Distance::ZERO,
        height: Distance::ZERO,
    };

    pub fn new(width: Distance, height: Distance) -> Self {
        Self { width, height }
    }

    pub fn mm(width: f32, height: f32) -> Self {
        Self::new(Distance::mm(width), Distance::mm(height))
    }

    pub fn inches(width: f32, height: f32) -> Self {
        Self::new(Distance::inches(width), Distance::inches(height))
    }

    /// Same distance on both axes
    pub fn uniform(distance: Distance) -> Self {
        Self::new(distance, distance)
    }

    /// Width and height exchanged
    pub fn swapped(self) -> Self {
        Self::new(self.height, self.width)
    }

    pub fn is_landscape(self) -> bool {
        self.width > self.height
    }

    /// Rotated so that the longer edge is vertical
    pub fn portrait(self) -> Self {
        if self.is_landscape() {
            self.swapped()
        } else {
            self
        }
    }

    /// Rotated so that the longer edge is horizontal
    pub fn landscape(self) -> Self {
        if self.height > self.width {
            self.swapped()
        } else {
            self
        }
    }

    /// True when neither axis exceeds the bounds
    pub fn fits_within(self, bounds: Size) -> bool {
        !self.width.exceeds(bounds.width) && !self.height.exceeds(bounds.height)
    }

    /// Both axes strictly positive
    pub fn is_positive(self) -> bool {
        self.width.is_positive() && self.height.is_positive()
    }

    /// Component-wise maximum
    pub fn max(self, other: Size) -> Size {
        Size::new(self.width.max(other.width), self.height.max(other.height))
    }

    pub fn approx_eq(self, other: Size) -> bool {
        self.width.approx_eq(other.width) && self.height.approx_eq(other.height)
    }

    /// Area in square millimeters
    pub fn area_mm2(self) -> f32 {
        self.width.to_mm() * self.height.to_mm()
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.width, self.height)
    }
}

impl Add for Size {
    type Output = Size;

    fn add(self, rhs: Size) -> Size {
        Size::new(self.width + rhs.width, self.height + rhs.height)
    }
}

impl Sub for Size {
    type Output = Size;

    fn sub(self, rhs: Size) -> Size {
        Size::new(self.width - rhs.width, self.height - rhs.height)
    }
}

impl Mul<f32> for Size {
    type Output = Size;

    fn mul(self, rhs: f32) -> Size {
        Size::new(self.width * rhs, self.height * rhs)
    }
}

// =============================================================================
// Area
// =============================================================================

/// Distances from each edge of a parent rectangle
///
/// Opposite edges are independent: setting `top` never clears `bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insets {
    pub top: Distance,
    pub left: Distance,
    pub right: Distance,
    pub bottom: Distance,
}

impl Insets {
    pub const ZERO: Insets = Insets {
        top: Distance::ZERO,
        left: Distance::ZERO,
        right: Distance::ZERO,
        bottom: Distance::ZERO,
    };

    pub fn uniform(distance: Distance) -> Self {
        Self {
            top: distance,
            left: distance,
            right: distance,
            bottom: distance,
        }
    }

    pub fn with_top(self, top: Distance) -> Self {
        Self { top, ..self }
    }

    pub fn with_left(self, left: Distance) -> Self {
        Self { left, ..self }
    }

    pub fn with_right(self, right: Distance) -> Self {
        Self { right, ..self }
    }

    pub fn with_bottom(self, bottom: Distance) -> Self {
        Self { bottom, ..self }
    }

    /// Combined horizontal and vertical inset
    pub fn total(self) -> Size {
        Size::new(self.left + self.right, self.top + self.bottom)
    }
}

/// A rectangle described by insets into a parent rectangle
///
/// Every area is rooted: [`Area::root`] covers a whole extent, and
/// [`Area::nested`] derives a child whose parent is this area. The offset of
/// the parent inside the root is tracked so positions can be resolved
/// without walking the chain.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Area {
    parent: Size,
    parent_x: Distance,
    parent_y: Distance,
    insets: Insets,
}

impl Area {
    /// Area covering the whole of `extent`
    pub fn root(extent: Size) -> Self {
        Self {
            parent: extent,
            parent_x: Distance::ZERO,
            parent_y: Distance::ZERO,
            insets: Insets::ZERO,
        }
    }

    /// Child area inset from this one
    pub fn nested(&self, insets: Insets) -> Area {
        Area {
            parent: self.extent(),
            parent_x: self.x(),
            parent_y: self.y(),
            insets,
        }
    }

    pub fn insets(&self) -> Insets {
        self.insets
    }

    pub fn top(&self) -> Distance {
        self.insets.top
    }

    pub fn left(&self) -> Distance {
        self.insets.left
    }

    pub fn right(&self) -> Distance {
        self.insets.right
    }

    pub fn bottom(&self) -> Distance {
        self.insets.bottom
    }

    /// Extent of the parent rectangle this area is inset into
    pub fn parent_extent(&self) -> Size {
        self.parent
    }

    /// Size of this area, never negative
    pub fn extent(&self) -> Size {
        let inner = self.parent - self.insets.total();
        inner.max(Size::ZERO)
    }

    /// Left edge in root coordinates
    pub fn x(&self) -> Distance {
        self.parent_x + self.insets.left
    }

    /// Top edge in root coordinates
    pub fn y(&self) -> Distance {
        self.parent_y + self.insets.top
    }
}
