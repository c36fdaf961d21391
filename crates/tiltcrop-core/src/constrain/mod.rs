//! Crop rectangle constraints against a rotated image boundary.
//!
//! Two clamps are provided, matching the two kinds of drag:
//!
//! - [`constrain_to_rotated_bounds`] adjusts edges and is used while a corner
//!   or edge handle resizes the rectangle
//! - [`constrain_center_to_inset_diamond`] moves the center and is used while
//!   the rectangle is dragged as a whole
//!
//! [`settle`] combines both for programmatic changes (a new straighten angle,
//! constrain mode being switched on) where no gesture history exists.
//!
//! # Coordinate System
//!
//! All inputs and outputs are in unrotated image space. `bounds` is the
//! image extent before rotation; the rotation is applied about its center.

mod center;
mod edges;

pub use center::{constrain_center_to_inset_diamond, constrain_center_to_inset_diamond_with};
pub use edges::{
    constrain_to_rotated_bounds, constrain_to_rotated_bounds_with, ITERATIVE_MIN_EXTENT,
};

use crate::config::EditorConfig;
use crate::geometry::Rect;

/// Bring `crop` inside `bounds` rotated by `angle_degrees` without any drag
/// history.
///
/// The center is first pulled toward the center of `bounds`, then the edges
/// are clamped. A rectangle that fits after moving keeps its size.
pub fn settle(crop: Rect, bounds: Rect, angle_degrees: f64, config: &EditorConfig) -> Rect {
    let centered = constrain_center_to_inset_diamond_with(
        crop,
        bounds,
        angle_degrees,
        Some(bounds.center()),
        config.center_strategy,
    );
    constrain_to_rotated_bounds_with(centered, bounds, angle_degrees, config.clamp_mode)
}
