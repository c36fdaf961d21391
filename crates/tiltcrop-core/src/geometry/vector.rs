//! Point rotation and vector helpers.
//!
//! For rotation by angle θ about a center c:
//! ```text
//! x' = cx + (x - cx) * cos(θ) - (y - cy) * sin(θ)
//! y' = cy + (x - cx) * sin(θ) + (y - cy) * cos(θ)
//! ```

use super::Point;

/// Rotate `point` about `center` by `radians`.
#[inline]
pub fn rotate_point(point: Point, center: Point, radians: f64) -> Point {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    let (sin, cos) = radians.sin_cos();
    Point::new(center.x + dx * cos - dy * sin, center.y + dx * sin + dy * cos)
}

/// Scale a vector to unit length.
///
/// A zero-length vector is returned unchanged, so callers must be prepared
/// to receive `(0, 0)` back.
#[inline]
pub fn normalize(v: Point) -> Point {
    let length = v.length();
    if length > 0.0 {
        Point::new(v.x / length, v.y / length)
    } else {
        v
    }
}

/// Closest point to `point` on the segment `start -> end`.
///
/// The projection parameter is clamped to `[0, 1]`. A zero-length segment
/// returns `start`.
pub fn closest_point_on_segment(point: Point, start: Point, end: Point) -> Point {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return start;
    }

    let t = (((point.x - start.x) * dx + (point.y - start.y) * dy) / len_sq).clamp(0.0, 1.0);
    Point::new(start.x + t * dx, start.y + t * dy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn assert_close(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9,
            "{:?} != {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let p = rotate_point(Point::new(1.0, 0.0), Point::ZERO, FRAC_PI_2);
        assert_close(p, Point::new(0.0, 1.0));
    }

    #[test]
    fn test_rotate_about_offset_center() {
        let p = rotate_point(Point::new(0.0, 0.0), Point::new(75.0, 75.0), FRAC_PI_2);
        assert_close(p, Point::new(150.0, 0.0));
    }

    #[test]
    fn test_rotate_half_turn() {
        let p = rotate_point(Point::new(10.0, 5.0), Point::new(5.0, 5.0), PI);
        assert_close(p, Point::new(0.0, 5.0));
    }

    #[test]
    fn test_rotate_zero_is_identity() {
        let p = Point::new(12.5, -3.0);
        assert_eq!(rotate_point(p, Point::new(1.0, 1.0), 0.0), p);
    }

    #[test]
    fn test_rotate_center_is_fixed() {
        let c = Point::new(7.0, 9.0);
        assert_close(rotate_point(c, c, 1.234), c);
    }

    #[test]
    fn test_normalize() {
        let n = normalize(Point::new(3.0, 4.0));
        assert_close(n, Point::new(0.6, 0.8));
    }

    #[test]
    fn test_normalize_zero_vector_unchanged() {
        assert_eq!(normalize(Point::ZERO), Point::ZERO);
    }

    #[test]
    fn test_closest_point_interior() {
        let p = closest_point_on_segment(
            Point::new(5.0, 5.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
        );
        assert_close(p, Point::new(5.0, 0.0));
    }

    #[test]
    fn test_closest_point_clamped_to_endpoints() {
        let start = Point::new(0.0, 0.0);
        let end = Point::new(10.0, 0.0);
        assert_close(closest_point_on_segment(Point::new(-5.0, 3.0), start, end), start);
        assert_close(closest_point_on_segment(Point::new(15.0, -3.0), start, end), end);
    }

    #[test]
    fn test_closest_point_degenerate_segment() {
        let a = Point::new(2.0, 2.0);
        assert_eq!(closest_point_on_segment(Point::new(9.0, 9.0), a, a), a);
    }
}
