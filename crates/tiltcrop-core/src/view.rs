//! Affine transforms between view space and image space.
//!
//! The constraint engine only ever works in unrotated image space. Hosts
//! describe how the image is laid out on screen with a [`ViewTransform`]
//! (image space -> view space) and the drag pipeline inverts it to bring
//! pointer-edited rectangles back into image space.
//!
//! # Convention
//!
//! A point maps as:
//! ```text
//! x' = a * x + c * y + tx
//! y' = b * x + d * y + ty
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{Point, Rect};

/// Error types for transform operations.
#[derive(Debug, Error, PartialEq)]
pub enum TransformError {
    /// The transform collapses space onto a line or point.
    #[error("Transform is not invertible (determinant {determinant})")]
    NotInvertible { determinant: f64 },
}

/// 2x3 affine transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewTransform {
    pub const IDENTITY: ViewTransform = ViewTransform {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    pub fn translation(tx: f64, ty: f64) -> Self {
        Self {
            tx,
            ty,
            ..Self::IDENTITY
        }
    }

    pub fn scale(sx: f64, sy: f64) -> Self {
        Self {
            a: sx,
            d: sy,
            ..Self::IDENTITY
        }
    }

    /// Rotation by `angle_degrees` about `center`, same direction as
    /// [`rotate_point`](crate::geometry::rotate_point).
    pub fn rotation_about(center: Point, angle_degrees: f64) -> Self {
        let (sin, cos) = angle_degrees.to_radians().sin_cos();
        let rotation = Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            tx: 0.0,
            ty: 0.0,
        };
        Self::translation(-center.x, -center.y)
            .then(&rotation)
            .then(&Self::translation(center.x, center.y))
    }

    /// Mirror vertically inside a view of the given height, turning a
    /// y-up layout into y-down (or back).
    pub fn flip_y(view_height: f64) -> Self {
        Self {
            d: -1.0,
            ty: view_height,
            ..Self::IDENTITY
        }
    }

    /// Scale `extent` uniformly to fit a `view_width` x `view_height` view,
    /// multiply by `user_scale` (zoom) and center it, shifted by `offset`
    /// (pan).
    ///
    /// An empty extent produces a degenerate (non-invertible) transform.
    pub fn aspect_fit(
        extent: Rect,
        view_width: f64,
        view_height: f64,
        user_scale: f64,
        offset: Point,
    ) -> Self {
        let scale = if extent.width > 0.0 && extent.height > 0.0 {
            (view_width / extent.width).min(view_height / extent.height) * user_scale
        } else {
            0.0
        };

        Self {
            a: scale,
            b: 0.0,
            c: 0.0,
            d: scale,
            tx: -scale * extent.mid_x() + view_width / 2.0 + offset.x,
            ty: -scale * extent.mid_y() + view_height / 2.0 + offset.y,
        }
    }

    /// Apply `self` first and `next` second.
    pub fn then(&self, next: &ViewTransform) -> Self {
        Self {
            a: next.a * self.a + next.c * self.b,
            b: next.b * self.a + next.d * self.b,
            c: next.a * self.c + next.c * self.d,
            d: next.b * self.c + next.d * self.d,
            tx: next.a * self.tx + next.c * self.ty + next.tx,
            ty: next.b * self.tx + next.d * self.ty + next.ty,
        }
    }

    #[inline]
    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    pub fn inverse(&self) -> Result<Self, TransformError> {
        let det = self.determinant();
        if det.abs() < f64::EPSILON {
            return Err(TransformError::NotInvertible { determinant: det });
        }

        Ok(Self {
            a: self.d / det,
            b: -self.b / det,
            c: -self.c / det,
            d: self.a / det,
            tx: (self.c * self.ty - self.d * self.tx) / det,
            ty: (self.b * self.tx - self.a * self.ty) / det,
        })
    }

    #[inline]
    pub fn apply_point(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.tx,
            self.b * p.x + self.d * p.y + self.ty,
        )
    }

    /// Axis-aligned box around the four mapped corners of `rect`.
    ///
    /// Exact for transforms without rotation or shear (scale, translate,
    /// flip); otherwise the box grows to enclose the rotated rectangle.
    pub fn apply_rect(&self, rect: Rect) -> Rect {
        let mapped = rect.corners().map(|corner| self.apply_point(corner));

        let (min_x, min_y, max_x, max_y) = mapped.iter().fold(
            (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
            |(min_x, min_y, max_x, max_y), p| {
                (min_x.min(p.x), min_y.min(p.y), max_x.max(p.x), max_y.max(p.y))
            },
        );

        Rect::from_edges(min_x, min_y, max_x, max_y)
    }
}
