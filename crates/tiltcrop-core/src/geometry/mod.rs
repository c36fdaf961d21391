//! Geometry primitives for the crop constraint engine.
//!
//! Everything in this module is a pure function over `f64` values. Nothing
//! allocates, nothing panics, and every loop is fixed at the four corners or
//! edges of a quadrilateral, so these are safe to call on every pointer event.
//!
//! # Coordinate System
//!
//! - All geometry lives in unrotated image space
//! - Rotation angles are in degrees at the public API and converted to
//!   radians where the trigonometry happens
//! - Corners are always listed as (min/min, max/min, max/max, min/max); this
//!   fixes the winding order that [`is_point_in_polygon`] relies on

mod boundary;
mod polygon;
mod vector;

pub use boundary::{inset_for_rect, rotated_boundary, rotated_extent};
pub use polygon::{
    bounding_box, constrain_point_to_polygon, is_degenerate, is_point_in_polygon,
    nearest_intersection, segment_intersection, Quad,
};
pub use vector::{closest_point_on_segment, normalize, rotate_point};

use serde::{Deserialize, Serialize};

/// Absolute tolerance for parallelism and zero tests.
pub const GEOMETRY_EPSILON: f64 = 1e-4;

/// A point (or vector) in image space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Length of this point treated as a vector from the origin.
    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// Axis-aligned rectangle defined by its minimum corner and size.
///
/// Width and height are expected to be non-negative. A zero-sized rectangle
/// is a valid value and flows through every operation unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle from its four edges.
    ///
    /// Crossed edges collapse to a zero extent on that axis instead of
    /// producing a negative size.
    pub fn from_edges(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            x: min_x,
            y: min_y,
            width: (max_x - min_x).max(0.0),
            height: (max_y - min_y).max(0.0),
        }
    }

    /// Rectangle of the given size centered on `center`.
    pub fn from_center(center: Point, width: f64, height: f64) -> Self {
        Self {
            x: center.x - width / 2.0,
            y: center.y - height / 2.0,
            width,
            height,
        }
    }

    #[inline]
    pub fn min_x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn min_y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    #[inline]
    pub fn mid_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    #[inline]
    pub fn mid_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    /// The four corners in winding order: (min/min, max/min, max/max, min/max).
    pub fn corners(&self) -> Quad {
        [
            Point::new(self.min_x(), self.min_y()),
            Point::new(self.max_x(), self.min_y()),
            Point::new(self.max_x(), self.max_y()),
            Point::new(self.min_x(), self.max_y()),
        ]
    }

    /// True when both dimensions are zero.
    pub fn is_zero_size(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Move the rectangle without resizing it.
    pub fn offset_by(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Shrink (positive) or grow (negative) the rectangle on every side.
    ///
    /// An inset larger than half the size collapses that axis onto the
    /// midpoint.
    pub fn inset_by(&self, dx: f64, dy: f64) -> Self {
        let width = self.width - 2.0 * dx;
        let height = self.height - 2.0 * dy;
        let (x, width) = if width < 0.0 {
            (self.mid_x(), 0.0)
        } else {
            (self.x + dx, width)
        };
        let (y, height) = if height < 0.0 {
            (self.mid_y(), 0.0)
        } else {
            (self.y + dy, height)
        };
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// True when `other` lies entirely within this rectangle, edges included.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.min_x() >= self.min_x()
            && other.min_y() >= self.min_y()
            && other.max_x() <= self.max_x()
            && other.max_y() <= self.max_y()
    }

    /// Largest rectangle with the aspect ratio of `width` x `height` that
    /// fits inside `self`, centered.
    ///
    /// Returns [`Rect::ZERO`] when either rectangle has no area.
    pub fn fit_in(&self, width: f64, height: f64) -> Rect {
        if width <= 0.0 || height <= 0.0 || self.width <= 0.0 || self.height <= 0.0 {
            return Rect::ZERO;
        }
        let scale = (self.width / width).min(self.height / height);
        let fitted_width = width * scale;
        let fitted_height = height * scale;
        Rect::new(
            self.min_x() + (self.width - fitted_width) / 2.0,
            self.min_y() + (self.height - fitted_height) / 2.0,
            fitted_width,
            fitted_height,
        )
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({:.2}, {:.2}) - ({:.2}, {:.2})",
            self.x, self.y, self.width, self.height
        )
    }
}
