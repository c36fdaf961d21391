//! Center clamp: keep a moved crop rectangle inside the rotated bounds by
//! adjusting only its center.
//!
//! The rectangle's size never changes here. Instead, the rotated boundary is
//! shrunk by the rectangle's half extents ([`inset_for_rect`]) and the
//! center is kept inside that smaller polygon.

use crate::config::CenterStrategy;
use crate::geometry::{
    constrain_point_to_polygon, inset_for_rect, is_degenerate, is_point_in_polygon,
    nearest_intersection, rotated_boundary, Point, Rect,
};

/// Move `crop` so that its center lies inside the region where the whole
/// rectangle fits in `bounds` rotated by `angle_degrees`.
///
/// `from_center` is the last center known to be valid during the current
/// gesture. When the new center is outside the allowed region, it is pulled
/// back along the segment `from_center -> center` to where that segment
/// leaves the region. Without history the center of `bounds` is used.
///
/// If that segment crosses no edge of the region because both ends are
/// already outside, the rectangle is returned unchanged.
///
/// A rectangle that fits the boundary exactly has a region collapsed onto a
/// segment or a single point. The center is then projected onto it, whatever
/// the strategy, so the rectangle can only slide along that line.
pub fn constrain_center_to_inset_diamond(
    crop: Rect,
    bounds: Rect,
    angle_degrees: f64,
    from_center: Option<Point>,
) -> Rect {
    constrain_center_to_inset_diamond_with(
        crop,
        bounds,
        angle_degrees,
        from_center,
        CenterStrategy::AlongTravel,
    )
}

/// [`constrain_center_to_inset_diamond`] with an explicit [`CenterStrategy`].
///
/// `from_center` is ignored by [`CenterStrategy::NearestPoint`].
pub fn constrain_center_to_inset_diamond_with(
    crop: Rect,
    bounds: Rect,
    angle_degrees: f64,
    from_center: Option<Point>,
    strategy: CenterStrategy,
) -> Rect {
    if crop.is_zero_size() {
        return crop;
    }

    let half_width = crop.width / 2.0;
    let half_height = crop.height / 2.0;
    let center = crop.center();

    if angle_degrees == 0.0 {
        let x = clamp_axis(
            center.x,
            bounds.min_x() + half_width,
            bounds.max_x() - half_width,
            bounds.mid_x(),
        );
        let y = clamp_axis(
            center.y,
            bounds.min_y() + half_height,
            bounds.max_y() - half_height,
            bounds.mid_y(),
        );
        return crop.offset_by(x - center.x, y - center.y);
    }

    let boundary = rotated_boundary(bounds, angle_degrees);
    let inset = inset_for_rect(&boundary, half_width, half_height);

    let target = if is_degenerate(&inset) {
        constrain_point_to_polygon(center, &inset)
    } else if is_point_in_polygon(center, &inset) {
        return crop;
    } else {
        match strategy {
            CenterStrategy::AlongTravel => {
                let anchor = from_center.unwrap_or_else(|| bounds.center());
                match nearest_intersection(anchor, center, &inset) {
                    Some(hit) => hit,
                    // An anchor sitting on the edge can miss it by rounding
                    None if is_point_in_polygon(anchor, &inset) => anchor,
                    None => center,
                }
            }
            CenterStrategy::NearestPoint => constrain_point_to_polygon(center, &inset),
        }
    };

    if target == center {
        return crop;
    }

    let result = crop.offset_by(target.x - center.x, target.y - center.y);
    tracing::trace!(
        angle = angle_degrees,
        before = %crop,
        after = %result,
        "Clamped crop center to inset boundary"
    );
    result
}

/// Clamp `value` to `[low, high]`, or to `fallback` when the range is
/// inverted (the rectangle is larger than the bounds on this axis) or a
/// bound is NaN.
#[inline]
fn clamp_axis(value: f64, low: f64, high: f64, fallback: f64) -> f64 {
    if low <= high {
        value.clamp(low, high)
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::SQRT_2;

    fn assert_point_close(a: Point, b: Point, tol: f64) {
        assert!(
            (a.x - b.x).abs() < tol && (a.y - b.y).abs() < tol,
            "{:?} != {:?}",
            a,
            b
        );
    }

    fn diamond_bounds() -> Rect {
        Rect::new(0.0, 0.0, 200.0, 200.0)
    }

    /// Distance from the diamond center to an inset corner for a 20x20 crop.
    fn inset_reach() -> f64 {
        100.0 * SQRT_2 - 20.0
    }

    #[test]
    fn test_no_rotation_inside_unchanged() {
        let crop = Rect::new(20.0, 30.0, 50.0, 40.0);
        let result = constrain_center_to_inset_diamond(crop, diamond_bounds(), 0.0, None);
        assert_eq!(result, crop);
    }

    #[test]
    fn test_no_rotation_clamps_center() {
        let crop = Rect::new(150.0, 150.0, 100.0, 100.0);
        let result = constrain_center_to_inset_diamond(crop, diamond_bounds(), 0.0, None);
        assert_eq!(result, Rect::new(100.0, 100.0, 100.0, 100.0));
    }

    #[test]
    fn test_no_rotation_oversized_axis_uses_midpoint() {
        let crop = Rect::new(0.0, 0.0, 300.0, 50.0);
        let result = constrain_center_to_inset_diamond(crop, diamond_bounds(), 0.0, None);
        // X range is inverted so the center snaps to the bounds midpoint; Y is in range
        assert_eq!(result, Rect::new(-50.0, 0.0, 300.0, 50.0));
    }

    #[test]
    fn test_no_rotation_nan_range_uses_fallback() {
        // inf - inf makes the x range NaN
        let bounds = Rect::new(0.0, 0.0, f64::INFINITY, 100.0);
        let crop = Rect::new(0.0, 20.0, f64::INFINITY, 50.0);
        let result = constrain_center_to_inset_diamond(crop, bounds, 0.0, None);
        assert_eq!(result.y, 20.0);
        assert_eq!(result.height, 50.0);
        assert!(result.width.is_infinite());
    }

    #[test]
    fn test_rotated_inside_unchanged() {
        let crop = Rect::from_center(Point::new(110.0, 95.0), 20.0, 20.0);
        let result = constrain_center_to_inset_diamond(crop, diamond_bounds(), 45.0, None);
        assert_eq!(result, crop);
    }

    #[test]
    fn test_rotated_pulls_back_along_travel() {
        let crop = Rect::from_center(Point::new(250.0, 120.0), 20.0, 20.0);
        let result = constrain_center_to_inset_diamond(
            crop,
            diamond_bounds(),
            45.0,
            Some(Point::new(100.0, 100.0)),
        );

        // Travel direction (150, 20) meets x + y = 200 + reach
        let t = inset_reach() / 170.0;
        assert_point_close(
            result.center(),
            Point::new(100.0 + 150.0 * t, 100.0 + 20.0 * t),
            1e-6,
        );
        assert_eq!(result.width, 20.0);
        assert_eq!(result.height, 20.0);
    }

    #[test]
    fn test_missing_history_starts_from_bounds_center() {
        let crop = Rect::from_center(Point::new(250.0, 150.0), 20.0, 20.0);
        let with_history = constrain_center_to_inset_diamond(
            crop,
            diamond_bounds(),
            45.0,
            Some(diamond_bounds().center()),
        );
        let without = constrain_center_to_inset_diamond(crop, diamond_bounds(), 45.0, None);
        assert_eq!(with_history, without);

        // Travel direction (150, 50) meets x + y = 200 + reach
        let t = inset_reach() / 200.0;
        assert_point_close(
            without.center(),
            Point::new(100.0 + 150.0 * t, 100.0 + 50.0 * t),
            1e-6,
        );
    }

    #[test]
    fn test_nearest_point_strategy_projects_onto_edge() {
        let crop = Rect::from_center(Point::new(250.0, 150.0), 20.0, 20.0);
        let result = constrain_center_to_inset_diamond_with(
            crop,
            diamond_bounds(),
            45.0,
            None,
            CenterStrategy::NearestPoint,
        );

        // Perpendicular drop onto x + y = 200 + reach
        let overshoot = (150.0 + 50.0 - inset_reach()) / 2.0;
        assert_point_close(
            result.center(),
            Point::new(250.0 - overshoot, 150.0 - overshoot),
            1e-6,
        );
    }

    #[test]
    fn test_no_crossing_leaves_rect_unchanged() {
        // Both the anchor and the new center are outside the inset region
        let crop = Rect::from_center(Point::new(300.0, 300.0), 20.0, 20.0);
        let result = constrain_center_to_inset_diamond(
            crop,
            diamond_bounds(),
            45.0,
            Some(Point::new(400.0, 400.0)),
        );
        assert_eq!(result, crop);
    }

    #[test]
    fn test_anchor_on_edge_holds_position() {
        let anchor = Point::new(100.0 + inset_reach(), 100.0);
        let crop = Rect::from_center(Point::new(300.0, 130.0), 20.0, 20.0);
        let result = constrain_center_to_inset_diamond(crop, diamond_bounds(), 45.0, Some(anchor));
        assert_point_close(result.center(), anchor, 1e-6);
    }

    #[test]
    fn test_exact_fit_slides_along_collapsed_region() {
        // Square bounds at 45°: the largest concentric square has a region
        // collapsed to the single point at the bounds center
        let bounds = diamond_bounds();
        let side = 100.0 * SQRT_2;
        let crop = Rect::from_center(Point::new(100.0 + 1e-9, 100.0), side, side);
        let inset = inset_for_rect(&rotated_boundary(bounds, 45.0), side / 2.0, side / 2.0);
        assert!(is_degenerate(&inset));

        for strategy in [CenterStrategy::AlongTravel, CenterStrategy::NearestPoint] {
            let moved = crop.offset_by(15.0, -6.0);
            let result = constrain_center_to_inset_diamond_with(
                moved,
                bounds,
                45.0,
                Some(Point::new(130.0, 90.0)),
                strategy,
            );
            assert_point_close(result.center(), bounds.center(), 1e-6);
        }
    }

    #[test]
    fn test_zero_rect_unchanged() {
        for angle in [0.0, 15.0, -45.0] {
            let result = constrain_center_to_inset_diamond(
                Rect::ZERO,
                Rect::new(50.0, 50.0, 100.0, 100.0),
                angle,
                None,
            );
            assert_eq!(result, Rect::ZERO);
        }
    }

    #[test]
    fn test_clamped_rect_fits_boundary() {
        let bounds = Rect::new(0.0, 0.0, 400.0, 300.0);
        let boundary = rotated_boundary(bounds, 10.0);
        let crop = Rect::from_center(Point::new(-50.0, 20.0), 80.0, 60.0);
        let result = constrain_center_to_inset_diamond(crop, bounds, 10.0, None);

        for corner in result.corners() {
            assert!(is_point_in_polygon(corner, &boundary), "{:?} escaped", corner);
        }
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
