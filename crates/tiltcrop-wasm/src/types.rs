//! WASM-compatible wrapper types for crop geometry.
//!
//! Rectangles cross the boundary as a `#[wasm_bindgen]` class so hosts get
//! typed getters. Corner lists and configs travel as plain JS objects via
//! serde_wasm_bindgen.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tiltcrop_core::geometry::{Point, Quad, Rect};
use wasm_bindgen::prelude::*;

/// An axis-aligned rectangle for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsRect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

#[wasm_bindgen]
impl JsRect {
    /// Create a rectangle from its min corner and size.
    #[wasm_bindgen(constructor)]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> JsRect {
        JsRect {
            x,
            y,
            width,
            height,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl From<Rect> for JsRect {
    fn from(r: Rect) -> Self {
        Self::new(r.x, r.y, r.width, r.height)
    }
}

impl From<&JsRect> for Rect {
    fn from(r: &JsRect) -> Self {
        Rect::new(r.x, r.y, r.width, r.height)
    }
}

/// Serialize a value for JavaScript.
pub(crate) fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Deserialize a JavaScript value, naming `what` in the error.
pub(crate) fn from_js<T: DeserializeOwned>(value: JsValue, what: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Invalid {}: {}", what, e)))
}

/// Read exactly four `{x, y}` corners.
pub(crate) fn quad_from_js(value: JsValue) -> Result<Quad, JsValue> {
    let points: Vec<Point> = from_js(value, "corners")?;
    quad_from_points(points).map_err(|e| JsValue::from_str(&e))
}

/// Exactly four corners, in the order given.
pub(crate) fn quad_from_points(points: Vec<Point>) -> Result<Quad, String> {
    let count = points.len();
    points
        .try_into()
        .map_err(|_| format!("Expected 4 corners, got {}", count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_conversion() {
        let core = Rect::new(1.0, 2.0, 3.0, 4.0);
        let js = JsRect::from(core);
        assert_eq!(js.x(), 1.0);
        assert_eq!(js.y(), 2.0);
        assert_eq!(js.width(), 3.0);
        assert_eq!(js.height(), 4.0);
        assert_eq!(Rect::from(&js), core);
    }

    #[test]
    fn test_quad_from_points() {
        let quad = quad_from_points(Rect::new(0.0, 0.0, 2.0, 2.0).corners().to_vec()).unwrap();
        assert_eq!(quad[2], Point::new(2.0, 2.0));
    }

    #[test]
    fn test_quad_wrong_count() {
        let err = quad_from_points(vec![Point::ZERO; 3]).unwrap_err();
        assert_eq!(err, "Expected 4 corners, got 3");
    }
}
