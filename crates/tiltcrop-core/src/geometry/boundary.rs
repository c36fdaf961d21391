//! Rotated image boundaries and their rectangle-aware insets.
//!
//! The straightened image is described in unrotated image space as a
//! quadrilateral ("diamond"): the corners of the image extent rotated about
//! its center. The crop rectangle stays axis-aligned in that same space.

use super::{normalize, rotate_point, Point, Quad, Rect};

/// Corners of `bounds` rotated about its center by `angle_degrees`.
///
/// Corners are produced in the order (min/min, max/min, max/max, min/max)
/// before rotation, and keep that order afterwards. This is the winding
/// order every containment and inset routine in the crate expects.
pub fn rotated_boundary(bounds: Rect, angle_degrees: f64) -> Quad {
    let radians = angle_degrees.to_radians();
    let center = bounds.center();
    bounds.corners().map(|corner| rotate_point(corner, center, radians))
}

/// Axis-aligned extent covered by `bounds` once rotated about its center.
///
/// Multiples of 90° are answered exactly so that quarter turns swap the
/// dimensions without floating point drift.
pub fn rotated_extent(bounds: Rect, angle_degrees: f64) -> Rect {
    let center = bounds.center();
    let angle_normalized = angle_degrees.rem_euclid(360.0);

    // Fast path: no rotation (including multiples of 360)
    if angle_normalized < 0.001 || (360.0 - angle_normalized) < 0.001 {
        return bounds;
    }

    // Fast path: quarter turns swap dimensions
    if (angle_normalized - 90.0).abs() < 0.001 || (angle_normalized - 270.0).abs() < 0.001 {
        return Rect::from_center(center, bounds.height, bounds.width);
    }

    // Fast path: half turn keeps dimensions
    if (angle_normalized - 180.0).abs() < 0.001 {
        return bounds;
    }

    let radians = angle_degrees.to_radians();
    let cos = radians.cos().abs();
    let sin = radians.sin().abs();

    // new_w = |w*cos| + |h*sin|
    // new_h = |w*sin| + |h*cos|
    let width = bounds.width * cos + bounds.height * sin;
    let height = bounds.width * sin + bounds.height * cos;

    Rect::from_center(center, width, height)
}

/// Shrink a rotated boundary so that any axis-aligned rectangle with the
/// given half extents, centered inside the result, lies inside `quad`.
///
/// A uniform polygon offset is not enough here: the rectangle stays
/// axis-aligned while the boundary edges are rotated, so each edge must be
/// pushed in by the rectangle's reach along that edge's normal:
///
/// ```text
/// inset = |half_width * n.x| + |half_height * n.y|
/// ```
///
/// Each corner moves along both adjoining inward normals by their insets.
/// The output keeps the order and winding of `quad`.
pub fn inset_for_rect(quad: &Quad, half_width: f64, half_height: f64) -> Quad {
    let mut inset = *quad;

    for (i, corner) in inset.iter_mut().enumerate() {
        let prev = quad[(i + 3) % 4];
        let curr = quad[i];
        let next = quad[(i + 1) % 4];

        let edge1 = normalize(Point::new(curr.x - prev.x, curr.y - prev.y));
        let edge2 = normalize(Point::new(next.x - curr.x, next.y - curr.y));

        // Inward normals for the boundary's winding order
        let normal1 = Point::new(-edge1.y, edge1.x);
        let normal2 = Point::new(-edge2.y, edge2.x);

        let inset1 = (half_width * normal1.x).abs() + (half_height * normal1.y).abs();
        let inset2 = (half_width * normal2.x).abs() + (half_height * normal2.y).abs();

        *corner = Point::new(
            curr.x + normal1.x * inset1 + normal2.x * inset2,
            curr.y + normal1.y * inset1 + normal2.y * inset2,
        );
    }

    inset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::is_point_in_polygon;

    fn assert_point_close(a: Point, b: Point, tol: f64) {
        assert!(
            (a.x - b.x).abs() < tol && (a.y - b.y).abs() < tol,
            "{:?} != {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_zero_rotation_returns_corners() {
        let bounds = Rect::new(0.0, 0.0, 200.0, 100.0);
        assert_eq!(rotated_boundary(bounds, 0.0), bounds.corners());
    }

    #[test]
    fn test_45_degree_diamond() {
        let bounds = Rect::new(0.0, 0.0, 200.0, 200.0);
        let quad = rotated_boundary(bounds, 45.0);
        let half_diag = 100.0 * std::f64::consts::SQRT_2;

        assert_point_close(quad[0], Point::new(100.0, 100.0 - half_diag), 1e-9);
        assert_point_close(quad[1], Point::new(100.0 + half_diag, 100.0), 1e-9);
        assert_point_close(quad[2], Point::new(100.0, 100.0 + half_diag), 1e-9);
        assert_point_close(quad[3], Point::new(100.0 - half_diag, 100.0), 1e-9);
    }

    #[test]
    fn test_rotated_boundary_keeps_winding() {
        // The center must test as inside for any angle
        let bounds = Rect::new(10.0, 20.0, 300.0, 120.0);
        for angle in [-170.0, -90.0, -45.0, -3.0, 7.5, 45.0, 90.0, 135.0, 359.0] {
            let quad = rotated_boundary(bounds, angle);
            assert!(
                is_point_in_polygon(bounds.center(), &quad),
                "center outside at {}°",
                angle
            );
        }
    }

    #[test]
    fn test_rotated_extent_no_rotation() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(rotated_extent(bounds, 0.0), bounds);
        assert_eq!(rotated_extent(bounds, 360.0), bounds);
        assert_eq!(rotated_extent(bounds, 720.0), bounds);
    }

    #[test]
    fn test_rotated_extent_quarter_turns_swap() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 50.0);
        for angle in [90.0, 270.0, -90.0, 450.0] {
            let r = rotated_extent(bounds, angle);
            assert_eq!(r.width, 50.0, "width at {}°", angle);
            assert_eq!(r.height, 100.0, "height at {}°", angle);
            assert_eq!(r.center(), bounds.center());
        }
    }

    #[test]
    fn test_rotated_extent_half_turn() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(rotated_extent(bounds, 180.0), bounds);
    }

    #[test]
    fn test_rotated_extent_45_degrees() {
        let r = rotated_extent(Rect::new(0.0, 0.0, 100.0, 100.0), 45.0);
        // Diagonal of a 100x100 square
        assert!((r.width - 141.421356).abs() < 1e-4, "width was {}", r.width);
        assert!((r.height - 141.421356).abs() < 1e-4, "height was {}", r.height);
    }

    #[test]
    fn test_rotated_extent_opposite_angles_match() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 80.0);
        let a = rotated_extent(bounds, 30.0);
        let b = rotated_extent(bounds, -30.0);
        assert!((a.width - b.width).abs() < 1e-9);
        assert!((a.height - b.height).abs() < 1e-9);
    }

    #[test]
    fn test_inset_without_rotation_matches_axis_aligned_inset() {
        let bounds = Rect::new(0.0, 0.0, 200.0, 100.0);
        let inset = inset_for_rect(&bounds.corners(), 30.0, 20.0);
        let expected = bounds.inset_by(30.0, 20.0).corners();
        for (got, want) in inset.iter().zip(expected.iter()) {
            assert_point_close(*got, *want, 1e-9);
        }
    }

    #[test]
    fn test_inset_45_degree_square() {
        // Diamond |x-100| + |y-100| <= 100√2; a square of half-size h centered
        // at c fits iff |cx-100| + |cy-100| <= 100√2 - 2h.
        let bounds = Rect::new(0.0, 0.0, 200.0, 200.0);
        let quad = rotated_boundary(bounds, 45.0);
        let inset = inset_for_rect(&quad, 10.0, 10.0);
        let reach = 100.0 * std::f64::consts::SQRT_2 - 20.0;

        assert_point_close(inset[0], Point::new(100.0, 100.0 - reach), 1e-9);
        assert_point_close(inset[1], Point::new(100.0 + reach, 100.0), 1e-9);
        assert_point_close(inset[2], Point::new(100.0, 100.0 + reach), 1e-9);
        assert_point_close(inset[3], Point::new(100.0 - reach, 100.0), 1e-9);
    }

    #[test]
    fn test_inset_zero_half_extents_is_identity() {
        let quad = rotated_boundary(Rect::new(0.0, 0.0, 120.0, 80.0), 12.0);
        let inset = inset_for_rect(&quad, 0.0, 0.0);
        for (got, want) in inset.iter().zip(quad.iter()) {
            assert_point_close(*got, *want, 1e-12);
        }
    }

    #[test]
    fn test_inset_degenerate_boundary_does_not_panic() {
        let p = Point::new(5.0, 5.0);
        let inset = inset_for_rect(&[p, p, p, p], 10.0, 10.0);
        // Zero-length edges normalize to zero, so nothing moves
        assert_eq!(inset, [p, p, p, p]);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
