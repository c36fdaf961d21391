//! WASM bindings for the stateless constraint functions.
//!
//! Hosts that manage their own gesture state call these directly on every
//! pointer event. Rectangles use [`JsRect`]; corner lists are arrays of
//! `{ x, y }` objects in the order returned by [`rotated_boundary`].

use crate::types::{from_js, quad_from_js, to_js, JsRect};
use tiltcrop_core::config::ClampMode;
use tiltcrop_core::constrain::{
    constrain_center_to_inset_diamond as core_constrain_center,
    constrain_to_rotated_bounds as core_constrain_edges, constrain_to_rotated_bounds_with,
};
use tiltcrop_core::drag::straighten_from_line as core_straighten_from_line;
use tiltcrop_core::geometry::{self, Point};
use wasm_bindgen::prelude::*;

/// Clamp the crop rectangle's edges into the rotated bounds (single pass).
///
/// # Example (TypeScript)
///
/// ```typescript
/// const bounds = new JsRect(0, 0, image.width, image.height);
/// const next = constrain_to_rotated_bounds(candidate, bounds, straighten);
/// ```
#[wasm_bindgen]
pub fn constrain_to_rotated_bounds(crop: &JsRect, bounds: &JsRect, angle_degrees: f64) -> JsRect {
    core_constrain_edges(crop.into(), bounds.into(), angle_degrees).into()
}

/// Clamp the crop rectangle's edges, repeating the pass until every corner
/// is inside or `max_iterations` is reached.
#[wasm_bindgen]
pub fn constrain_to_rotated_bounds_iterative(
    crop: &JsRect,
    bounds: &JsRect,
    angle_degrees: f64,
    max_iterations: u32,
) -> Result<JsRect, JsValue> {
    if max_iterations == 0 {
        return Err(JsValue::from_str("max_iterations must be at least 1"));
    }
    let mode = ClampMode::Iterative { max_iterations };
    Ok(constrain_to_rotated_bounds_with(crop.into(), bounds.into(), angle_degrees, mode).into())
}

/// Move the crop rectangle's center into the inset region, keeping its size.
///
/// `from_x`/`from_y` is the last valid center of the current gesture. Pass
/// `undefined` for both at the start of a gesture to use the bounds center;
/// passing only one of them is an error.
#[wasm_bindgen]
pub fn constrain_center_to_inset_diamond(
    crop: &JsRect,
    bounds: &JsRect,
    angle_degrees: f64,
    from_x: Option<f64>,
    from_y: Option<f64>,
) -> Result<JsRect, JsValue> {
    let from_center = match (from_x, from_y) {
        (Some(x), Some(y)) => Some(Point::new(x, y)),
        (None, None) => None,
        _ => return Err(JsValue::from_str("from_x and from_y must be given together")),
    };
    Ok(core_constrain_center(crop.into(), bounds.into(), angle_degrees, from_center).into())
}

/// Axis-aligned box enclosing the rotated bounds.
#[wasm_bindgen]
pub fn rotated_extent(bounds: &JsRect, angle_degrees: f64) -> JsRect {
    geometry::rotated_extent(bounds.into(), angle_degrees).into()
}

/// Corners of the rotated bounds as `[{x, y}, ...]`.
#[wasm_bindgen]
pub fn rotated_boundary(bounds: &JsRect, angle_degrees: f64) -> Result<JsValue, JsValue> {
    to_js(&geometry::rotated_boundary(bounds.into(), angle_degrees))
}

/// Shrink a rotated boundary by an axis-aligned rectangle's half extents.
#[wasm_bindgen]
pub fn inset_for_rect(
    corners: JsValue,
    half_width: f64,
    half_height: f64,
) -> Result<JsValue, JsValue> {
    let quad = quad_from_js(corners)?;
    to_js(&geometry::inset_for_rect(&quad, half_width, half_height))
}

/// Test a point against a corner list produced by [`rotated_boundary`] or
/// [`inset_for_rect`].
#[wasm_bindgen]
pub fn is_point_in_polygon(x: f64, y: f64, corners: JsValue) -> Result<bool, JsValue> {
    let quad = quad_from_js(corners)?;
    Ok(geometry::is_point_in_polygon(Point::new(x, y), &quad))
}

/// Intersection of two segments as `{x, y}`, or `undefined` when they do
/// not cross.
#[wasm_bindgen]
pub fn segment_intersection(
    a1: JsValue,
    a2: JsValue,
    b1: JsValue,
    b2: JsValue,
) -> Result<JsValue, JsValue> {
    let a1: Point = from_js(a1, "point")?;
    let a2: Point = from_js(a2, "point")?;
    let b1: Point = from_js(b1, "point")?;
    let b2: Point = from_js(b2, "point")?;
    to_js(&geometry::segment_intersection(a1, a2, b1, b2))
}

/// Straighten correction (degrees) that levels a line drawn from
/// `(x1, y1)` to `(x2, y2)` in y-down view space.
#[wasm_bindgen]
pub fn straighten_from_line(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    core_straighten_from_line(Point::new(x1, y1), Point::new(x2, y2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> JsRect {
        JsRect::new(0.0, 0.0, 200.0, 200.0)
    }

    #[test]
    fn test_constrain_no_rotation_translates() {
        let crop = JsRect::new(150.0, 0.0, 100.0, 100.0);
        let result = constrain_to_rotated_bounds(&crop, &bounds(), 0.0);
        assert_eq!(result, JsRect::new(100.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn test_constrain_rotated_shrinks() {
        let crop = JsRect::new(0.0, 0.0, 100.0, 100.0);
        let result = constrain_to_rotated_bounds(&crop, &bounds(), 45.0);
        assert!(result.width() < 100.0);
        assert!((result.width() / result.height() - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_iterative_matches_core() {
        let crop = JsRect::new(0.0, 0.0, 100.0, 100.0);
        let result = constrain_to_rotated_bounds_iterative(&crop, &bounds(), 45.0, 20).unwrap();
        let single = constrain_to_rotated_bounds(&crop, &bounds(), 45.0);
        assert!((result.width() - single.width()).abs() < 1e-9);
    }

    #[test]
    fn test_center_clamp_keeps_size() {
        let crop = JsRect::new(300.0, 300.0, 40.0, 40.0);
        let result =
            constrain_center_to_inset_diamond(&crop, &bounds(), 0.0, None, None).unwrap();
        assert_eq!(result, JsRect::new(160.0, 160.0, 40.0, 40.0));
    }

    #[test]
    fn test_center_clamp_with_history() {
        let crop = JsRect::new(300.0, 90.0, 20.0, 20.0);
        let with_history =
            constrain_center_to_inset_diamond(&crop, &bounds(), 30.0, Some(100.0), Some(100.0))
                .unwrap();
        let without =
            constrain_center_to_inset_diamond(&crop, &bounds(), 30.0, None, None).unwrap();
        assert_eq!(with_history, without);
        assert_eq!(with_history.width(), 20.0);
    }

    #[test]
    fn test_rotated_extent_binding() {
        let r = rotated_extent(&JsRect::new(0.0, 0.0, 100.0, 50.0), 90.0);
        assert_eq!(r.width(), 50.0);
        assert_eq!(r.height(), 100.0);
    }

    #[test]
    fn test_straighten_binding() {
        let angle = straighten_from_line(0.0, 0.0, 100.0, -100.0);
        assert!((angle + 45.0).abs() < 1e-9);
    }
}
