//! Shared constants for page arrangement
//!
//! This module centralizes unit factors and tolerances used throughout
//! the arrangement process.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Millimeters per inch
pub const MM_PER_INCH: f32 = 25.4;

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / MM_PER_INCH; // ≈ 2.83465

// =============================================================================
// Tolerances
// =============================================================================

/// Slack (in millimeters) allowed when comparing edges against bounds.
///
/// Inch-based card sizes do not convert exactly to millimeters in `f32`,
/// so a row of three 2.5in cards must still fit a 190.5mm wide area.
pub const FIT_TOLERANCE_MM: f32 = 1e-3;

// =============================================================================
// Paper Defaults
// =============================================================================

/// Default sheet margin in millimeters (uniform on all sides)
pub const DEFAULT_MARGIN_MM: f32 = 8.0;
