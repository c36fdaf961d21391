//! Edge clamp: pull a crop rectangle's edges inside the rotated bounds.
//!
//! # Algorithm
//!
//! Each corner of the crop rectangle that falls outside the rotated boundary
//! is traced back toward the rectangle's center. Where that ray first crosses
//! the boundary, the two edges meeting at the corner are tightened:
//!
//! ```text
//! corner 0 (min/min): min_x = max(min_x, hit.x), min_y = max(min_y, hit.y)
//! corner 1 (max/min): max_x = min(max_x, hit.x), min_y = max(min_y, hit.y)
//! corner 2 (max/max): max_x = min(max_x, hit.x), max_y = min(max_y, hit.y)
//! corner 3 (min/max): min_x = max(min_x, hit.x), max_y = min(max_y, hit.y)
//! ```
//!
//! Corners are handled independently in one pass. Tightening an edge for one
//! corner can push a neighbouring corner outside, and the single pass does
//! not re-test. [`ClampMode::Iterative`] repeats the pass for callers that
//! need a tighter guarantee.

use crate::config::ClampMode;
use crate::geometry::{is_point_in_polygon, nearest_intersection, rotated_boundary, Quad, Rect};

/// Iterative clamping stops once either side drops below this size.
pub const ITERATIVE_MIN_EXTENT: f64 = 10.0;

/// Clamp `crop` so its corners lie inside `bounds` rotated by `angle_degrees`.
///
/// Uses a single pass; see [`constrain_to_rotated_bounds_with`] for the
/// iterative variant.
///
/// # Behavior
///
/// - At 0° the rectangle is translated into `bounds`, never resized
/// - A zero-sized rectangle is returned unchanged
/// - Crossed edges collapse to zero width/height rather than going negative
pub fn constrain_to_rotated_bounds(crop: Rect, bounds: Rect, angle_degrees: f64) -> Rect {
    constrain_to_rotated_bounds_with(crop, bounds, angle_degrees, ClampMode::SinglePass)
}

/// [`constrain_to_rotated_bounds`] with an explicit [`ClampMode`].
pub fn constrain_to_rotated_bounds_with(
    crop: Rect,
    bounds: Rect,
    angle_degrees: f64,
    mode: ClampMode,
) -> Rect {
    if crop.is_zero_size() {
        return crop;
    }

    if angle_degrees == 0.0 {
        return constrain_axis_aligned(crop, bounds);
    }

    let boundary = rotated_boundary(bounds, angle_degrees);

    let result = match mode {
        ClampMode::SinglePass => clamp_edges_once(crop, &boundary),
        ClampMode::Iterative { max_iterations } => {
            clamp_edges_iteratively(crop, &boundary, max_iterations)
        }
    };

    if result != crop {
        tracing::trace!(
            angle = angle_degrees,
            before = %crop,
            after = %result,
            "Clamped crop edges to rotated bounds"
        );
    }

    result
}

/// Translate `crop` into `bounds` without resizing.
///
/// A rectangle larger than `bounds` ends up aligned with the max edge.
fn constrain_axis_aligned(crop: Rect, bounds: Rect) -> Rect {
    let mut result = crop;

    if result.min_x() < bounds.min_x() {
        result.x = bounds.min_x();
    }
    if result.min_y() < bounds.min_y() {
        result.y = bounds.min_y();
    }
    if result.max_x() > bounds.max_x() {
        result.x = bounds.max_x() - result.width;
    }
    if result.max_y() > bounds.max_y() {
        result.y = bounds.max_y() - result.height;
    }

    result
}

/// True when every corner of `rect` is inside `boundary`.
fn all_corners_inside(rect: &Rect, boundary: &Quad) -> bool {
    rect.corners()
        .iter()
        .all(|corner| is_point_in_polygon(*corner, boundary))
}

fn clamp_edges_once(crop: Rect, boundary: &Quad) -> Rect {
    let center = crop.center();

    let mut min_x = crop.min_x();
    let mut max_x = crop.max_x();
    let mut min_y = crop.min_y();
    let mut max_y = crop.max_y();

    for (index, corner) in crop.corners().into_iter().enumerate() {
        if is_point_in_polygon(corner, boundary) {
            continue;
        }

        let Some(hit) = nearest_intersection(center, corner, boundary) else {
            continue;
        };

        match index {
            0 => {
                min_x = min_x.max(hit.x);
                min_y = min_y.max(hit.y);
            }
            1 => {
                max_x = max_x.min(hit.x);
                min_y = min_y.max(hit.y);
            }
            2 => {
                max_x = max_x.min(hit.x);
                max_y = max_y.min(hit.y);
            }
            _ => {
                min_x = min_x.max(hit.x);
                max_y = max_y.min(hit.y);
            }
        }
    }

    Rect::from_edges(min_x, min_y, max_x, max_y)
}

fn clamp_edges_iteratively(crop: Rect, boundary: &Quad, max_iterations: u32) -> Rect {
    let mut result = crop;

    for _ in 0..max_iterations {
        if all_corners_inside(&result, boundary) {
            break;
        }

        let next = clamp_edges_once(result, boundary);
        if next == result {
            break;
        }

        result = next;
        if result.width < ITERATIVE_MIN_EXTENT || result.height < ITERATIVE_MIN_EXTENT {
            break;
        }
    }

    result
}


// ============================================================================
// Property-Based Tests
// ============================================================================
