//! Quadrilateral primitives: containment, intersection and bounding boxes.
//!
//! # Winding Contract
//!
//! [`is_point_in_polygon`] treats a point as inside when it lies on the
//! non-negative side of every edge. That only holds for quads whose corners
//! are listed in the order produced by [`rotated_boundary`] (or an inset of
//! it). The order is not validated here: a mis-ordered quad silently gives
//! wrong answers. Keeping the check out of the hot path is intentional.
//!
//! [`rotated_boundary`]: super::rotated_boundary

use super::{closest_point_on_segment, Point, Rect, GEOMETRY_EPSILON};

/// Four corners of a (possibly rotated) quadrilateral in winding order.
pub type Quad = [Point; 4];

/// Axis-aligned box enclosing `points`.
///
/// Width and height are floored at 1 so the result never feeds a zero-area
/// box into later inset math. An empty slice yields [`Rect::ZERO`].
pub fn bounding_box(points: &[Point]) -> Rect {
    if points.is_empty() {
        return Rect::ZERO;
    }

    let mut min_x = f64::MAX;
    let mut min_y = f64::MAX;
    let mut max_x = f64::MIN;
    let mut max_y = f64::MIN;

    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }

    Rect::new(min_x, min_y, (max_x - min_x).max(1.0), (max_y - min_y).max(1.0))
}

/// Twice the signed area of the quad (shoelace formula).
#[inline]
fn twice_signed_area(quad: &Quad) -> f64 {
    (0..4)
        .map(|i| {
            let a = quad[i];
            let b = quad[(i + 1) % 4];
            a.x * b.y - b.x * a.y
        })
        .sum()
}

/// Whether `quad` has collapsed onto a segment or a point: it is thinner
/// than [`GEOMETRY_EPSILON`], measured as twice its area over its perimeter.
///
/// Slightly inverted quads (negative area within the same band) count as
/// collapsed too.
pub fn is_degenerate(quad: &Quad) -> bool {
    let perimeter: f64 = (0..4).map(|i| quad[i].distance_to(quad[(i + 1) % 4])).sum();
    twice_signed_area(quad).abs() <= GEOMETRY_EPSILON * perimeter
}

/// Test whether `point` lies inside (or on the edge of) `quad`.
///
/// For each edge `quad[i] -> quad[i + 1]` the cross product of the edge
/// vector with the vector from the edge start to the point must not be
/// negative. Cross products within [`GEOMETRY_EPSILON`] of zero count as on
/// the edge. Zero-area quads contain nothing.
pub fn is_point_in_polygon(point: Point, quad: &Quad) -> bool {
    if twice_signed_area(quad).abs() < f64::EPSILON {
        return false;
    }

    for i in 0..4 {
        let p1 = quad[i];
        let p2 = quad[(i + 1) % 4];

        let edge_x = p2.x - p1.x;
        let edge_y = p2.y - p1.y;
        let to_point_x = point.x - p1.x;
        let to_point_y = point.y - p1.y;

        let cross = edge_x * to_point_y - edge_y * to_point_x;
        if cross < -GEOMETRY_EPSILON {
            return false;
        }
    }
    true
}

/// Intersection point of segments `a1 -> a2` and `b1 -> b2`.
///
/// Solves for the parameters `t` (along `a`) and `u` (along `b`):
/// ```text
/// denom = (x1 - x2)(y3 - y4) - (y1 - y2)(x3 - x4)
/// t     = ((x1 - x3)(y3 - y4) - (y1 - y3)(x3 - x4)) / denom
/// u     = -((x1 - x2)(y1 - y3) - (y1 - y2)(x1 - x3)) / denom
/// ```
/// Returns `None` for (near-)parallel segments or when either parameter
/// falls outside the inclusive range `[0, 1]`.
pub fn segment_intersection(a1: Point, a2: Point, b1: Point, b2: Point) -> Option<Point> {
    let (x1, y1) = (a1.x, a1.y);
    let (x2, y2) = (a2.x, a2.y);
    let (x3, y3) = (b1.x, b1.y);
    let (x4, y4) = (b2.x, b2.y);

    let denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if denom.abs() < GEOMETRY_EPSILON {
        return None;
    }

    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / denom;
    let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / denom;

    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(Point::new(x1 + t * (x2 - x1), y1 + t * (y2 - y1)))
    } else {
        None
    }
}

/// Where the segment `from -> to` first crosses an edge of `quad`.
///
/// All four edges are tested and the hit closest to `from` wins. Returns
/// `None` when the segment crosses no edge, e.g. both endpoints are on the
/// same side of the boundary.
pub fn nearest_intersection(from: Point, to: Point, quad: &Quad) -> Option<Point> {
    let mut closest: Option<Point> = None;
    let mut closest_distance = f64::INFINITY;

    for i in 0..4 {
        if let Some(hit) = segment_intersection(from, to, quad[i], quad[(i + 1) % 4]) {
            let distance = from.distance_to(hit);
            if distance < closest_distance {
                closest_distance = distance;
                closest = Some(hit);
            }
        }
    }

    closest
}

/// Move `point` onto the nearest spot of `quad`'s boundary if it lies
/// outside; points already inside are returned unchanged.
pub fn constrain_point_to_polygon(point: Point, quad: &Quad) -> Point {
    if is_point_in_polygon(point, quad) {
        return point;
    }

    let mut closest = point;
    let mut closest_distance = f64::INFINITY;

    for i in 0..4 {
        let on_edge = closest_point_on_segment(point, quad[i], quad[(i + 1) % 4]);
        let distance = point.distance_to(on_edge);
        if distance < closest_distance {
            closest_distance = distance;
            closest = on_edge;
        }
    }

    closest
}


// ============================================================================
// Property-Based Tests
// ============================================================================
