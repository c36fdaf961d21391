//! Turning pointer drags into constrained crop rectangles.
//!
//! # Pipeline
//!
//! 1. [`translate_drag`] applies a pointer delta to the rectangle as shown
//!    on screen (view space), moving only the edges the handle controls
//! 2. The candidate is mapped back to image space through the inverse of the
//!    view transform
//! 3. With constrain mode on, [`constrain_dragged_rect`] runs the edge clamp
//!    (resize handles) or the center clamp (center handle)
//!
//! View space is y-down: `Top` handles move the min-y edge.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::EditorConfig;
use crate::constrain::{constrain_center_to_inset_diamond_with, constrain_to_rotated_bounds_with};
use crate::geometry::{Point, Rect};
use crate::view::{TransformError, ViewTransform};

/// A named drag point on the crop rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Handle {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Top,
    Bottom,
    Left,
    Right,
    Center,
}

impl Handle {
    pub const ALL: [Handle; 9] = [
        Handle::TopLeft,
        Handle::TopRight,
        Handle::BottomLeft,
        Handle::BottomRight,
        Handle::Top,
        Handle::Bottom,
        Handle::Left,
        Handle::Right,
        Handle::Center,
    ];

    /// True for the handle that moves the whole rectangle.
    pub fn is_center(self) -> bool {
        matches!(self, Handle::Center)
    }

    /// The snake_case name used by hosts (same as the serde form).
    pub fn as_str(self) -> &'static str {
        match self {
            Handle::TopLeft => "top_left",
            Handle::TopRight => "top_right",
            Handle::BottomLeft => "bottom_left",
            Handle::BottomRight => "bottom_right",
            Handle::Top => "top",
            Handle::Bottom => "bottom",
            Handle::Left => "left",
            Handle::Right => "right",
            Handle::Center => "center",
        }
    }
}

/// A handle name that matches no [`Handle`].
#[derive(Debug, Error, PartialEq)]
#[error("Unknown handle: {0}")]
pub struct UnknownHandle(pub String);

impl FromStr for Handle {
    type Err = UnknownHandle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Handle::ALL
            .into_iter()
            .find(|handle| handle.as_str() == s)
            .ok_or_else(|| UnknownHandle(s.to_string()))
    }
}

/// Everything the constraint step needs besides the rectangle itself.
#[derive(Debug, Clone, Copy)]
pub struct DragConstraints<'a> {
    /// Unrotated image extent.
    pub bounds: Rect,
    /// Straighten angle in degrees.
    pub angle_degrees: f64,
    /// Whether the rectangle must stay inside the rotated bounds.
    pub constrain: bool,
    pub config: &'a EditorConfig,
}

/// Apply a pointer delta to `rect` for the given handle.
///
/// The delta is clamped before it is applied so that a resized side never
/// drops below `min_size`; dragging past that point stops the edge instead
/// of overshooting. A side that is already smaller than `min_size` (a large
/// image zoomed far out) may grow freely but not shrink; it never jumps up
/// to the floor. The center handle only translates.
pub fn translate_drag(rect: Rect, handle: Handle, dx: f64, dy: f64, min_size: f64) -> Rect {
    let Rect {
        mut x,
        mut y,
        mut width,
        mut height,
    } = rect;

    match handle {
        Handle::TopLeft => {
            let dx = shrink_from_min(width, dx, min_size);
            let dy = shrink_from_min(height, dy, min_size);
            x += dx;
            width -= dx;
            y += dy;
            height -= dy;
        }
        Handle::TopRight => {
            let dx = grow_from_max(width, dx, min_size);
            let dy = shrink_from_min(height, dy, min_size);
            width += dx;
            y += dy;
            height -= dy;
        }
        Handle::BottomLeft => {
            let dx = shrink_from_min(width, dx, min_size);
            let dy = grow_from_max(height, dy, min_size);
            x += dx;
            width -= dx;
            height += dy;
        }
        Handle::BottomRight => {
            width += grow_from_max(width, dx, min_size);
            height += grow_from_max(height, dy, min_size);
        }
        Handle::Top => {
            let dy = shrink_from_min(height, dy, min_size);
            y += dy;
            height -= dy;
        }
        Handle::Bottom => {
            height += grow_from_max(height, dy, min_size);
        }
        Handle::Left => {
            let dx = shrink_from_min(width, dx, min_size);
            x += dx;
            width -= dx;
        }
        Handle::Right => {
            width += grow_from_max(width, dx, min_size);
        }
        Handle::Center => {
            x += dx;
            y += dy;
        }
    }

    Rect::new(x, y, width, height)
}

/// Delta for a handle that moves the min edge (size shrinks by `delta`).
#[inline]
fn shrink_from_min(extent: f64, delta: f64, min_size: f64) -> f64 {
    if extent < min_size {
        delta.min(0.0)
    } else if extent - delta < min_size {
        extent - min_size
    } else {
        delta
    }
}

/// Delta for a handle that moves the max edge (size grows by `delta`).
#[inline]
fn grow_from_max(extent: f64, delta: f64, min_size: f64) -> f64 {
    if extent < min_size {
        delta.max(0.0)
    } else if extent + delta < min_size {
        min_size - extent
    } else {
        delta
    }
}

/// Run the clamp that matches `handle` on an image-space candidate.
///
/// `from_center` is only consulted for the center handle. With constrain
/// mode off the candidate is returned as is.
pub fn constrain_dragged_rect(
    candidate: Rect,
    handle: Handle,
    constraints: &DragConstraints<'_>,
    from_center: Option<Point>,
) -> Rect {
    if !constraints.constrain {
        return candidate;
    }

    let result = if handle.is_center() {
        constrain_center_to_inset_diamond_with(
            candidate,
            constraints.bounds,
            constraints.angle_degrees,
            from_center,
            constraints.config.center_strategy,
        )
    } else {
        constrain_to_rotated_bounds_with(
            candidate,
            constraints.bounds,
            constraints.angle_degrees,
            constraints.config.clamp_mode,
        )
    };

    if result != candidate {
        tracing::trace!(
            handle = ?handle,
            angle = constraints.angle_degrees,
            before = %candidate,
            after = %result,
            "Constrained dragged crop rect"
        );
    }

    result
}

/// Full drag step: view-space rectangle plus pointer delta in, constrained
/// image-space rectangle out.
///
/// `view` maps image space to view space. Fails only when it cannot be
/// inverted.
pub fn drag_rect(
    view_rect: Rect,
    handle: Handle,
    delta: Point,
    view: &ViewTransform,
    constraints: &DragConstraints<'_>,
    from_center: Option<Point>,
) -> Result<Rect, TransformError> {
    let candidate = translate_drag(
        view_rect,
        handle,
        delta.x,
        delta.y,
        constraints.config.min_size,
    );
    let image_rect = view.inverse()?.apply_rect(candidate);
    Ok(constrain_dragged_rect(image_rect, handle, constraints, from_center))
}

/// Straighten correction, in degrees, that levels the line `start -> end`
/// drawn in y-down view space.
///
/// The result is the same whichever end the line was drawn from. Add it to
/// the current straighten angle.
pub fn straighten_from_line(start: Point, end: Point) -> f64 {
    let mut dx = end.x - start.x;
    let mut dy = start.y - end.y;
    if dx < 0.0 {
        dx = -dx;
        dy = -dy;
    }
    -dy.atan2(dx).to_degrees()
}


// ============================================================================
// Property-Based Tests
// ============================================================================
