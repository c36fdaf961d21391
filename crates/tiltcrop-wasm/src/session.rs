//! WASM bindings for the interactive editing session.
//!
//! `JsCropSession` keeps the crop state, gesture anchors and the current view
//! transform inside WASM memory so that a host only forwards pointer events.

use crate::types::{from_js, to_js, JsRect};
use tiltcrop_core::{CropState, EditSession, EditorConfig, Handle, Point, Rect, ViewTransform};
use wasm_bindgen::prelude::*;

/// A crop editing session for one image.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const session = new JsCropSession(new JsRect(0, 0, img.width, img.height), undefined);
/// session.set_aspect_fit_view(canvas.width, canvas.height, 1.0, 0, 0);
///
/// session.begin_drag('top_left');
/// const rect = session.drag_to('top_left', event.dx, event.dy);
/// session.end_drag();
/// ```
#[wasm_bindgen]
pub struct JsCropSession {
    inner: EditSession,
    view: ViewTransform,
}

#[wasm_bindgen]
impl JsCropSession {
    /// Create a session over an image extent.
    ///
    /// `config` is an optional `{ min_size, clamp_mode, center_strategy }`
    /// object; missing fields use their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(extent: &JsRect, config: JsValue) -> Result<JsCropSession, JsValue> {
        let config = parse_config(config)?;
        let extent: Rect = extent.into();
        Self::with_config(extent, config)
    }

    #[wasm_bindgen(getter)]
    pub fn crop_rect(&self) -> JsRect {
        self.inner.state().crop_rect.into()
    }

    #[wasm_bindgen(getter)]
    pub fn straighten(&self) -> f64 {
        self.inner.state().straighten
    }

    #[wasm_bindgen(getter)]
    pub fn constrain(&self) -> bool {
        self.inner.state().constrain
    }

    #[wasm_bindgen(getter)]
    pub fn is_dragging(&self) -> bool {
        self.inner.is_dragging()
    }

    /// The crop rect in view space, for drawing handles.
    pub fn view_rect(&self) -> JsRect {
        self.view.apply_rect(self.inner.state().crop_rect).into()
    }

    /// Full crop state as a plain object.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_js(self.inner.state())
    }

    /// Set the image -> view transform directly.
    pub fn set_view_transform(&mut self, a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) {
        self.view = ViewTransform { a, b, c, d, tx, ty };
    }

    /// Fit the image into a `view_width` x `view_height` view with zoom and
    /// pan, the way the editor canvas lays it out.
    pub fn set_aspect_fit_view(
        &mut self,
        view_width: f64,
        view_height: f64,
        user_scale: f64,
        offset_x: f64,
        offset_y: f64,
    ) {
        self.view = ViewTransform::aspect_fit(
            self.inner.extent(),
            view_width,
            view_height,
            user_scale,
            Point::new(offset_x, offset_y),
        );
    }

    /// Start a gesture on the named handle (`"top_left"`, `"center"`, ...).
    pub fn begin_drag(&mut self, handle: &str) -> Result<(), JsValue> {
        let handle = parse_handle(handle)?;
        self.inner.begin_drag(handle);
        Ok(())
    }

    /// Feed the cumulative pointer translation since the gesture began.
    /// Returns the new crop rect in image space.
    pub fn drag_to(
        &mut self,
        handle: &str,
        translation_x: f64,
        translation_y: f64,
    ) -> Result<JsRect, JsValue> {
        let handle = parse_handle(handle)?;
        self.inner
            .drag_to(handle, Point::new(translation_x, translation_y), &self.view)
            .map(JsRect::from)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn end_drag(&mut self) {
        self.inner.end_drag();
    }

    pub fn set_straighten(&mut self, angle_degrees: f64) {
        self.inner.set_straighten(angle_degrees);
    }

    /// Level a line drawn in view space. Returns the new straighten angle.
    pub fn straighten_with_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
        self.inner
            .straighten_with_line(Point::new(x1, y1), Point::new(x2, y2))
    }

    pub fn set_constrain(&mut self, constrain: bool) {
        self.inner.set_constrain(constrain);
    }

    pub fn set_crop_rect(&mut self, rect: &JsRect) {
        self.inner.set_crop_rect(rect.into());
    }

    /// Replace the editor config from a plain object.
    pub fn set_config(&mut self, config: JsValue) -> Result<(), JsValue> {
        let config = parse_config(config)?;
        self.inner
            .set_config(config)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }
}

impl JsCropSession {
    /// Build a session from already-parsed values.
    pub(crate) fn with_config(extent: Rect, config: EditorConfig) -> Result<Self, JsValue> {
        let inner = EditSession::new(CropState::new(extent), extent, config)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            inner,
            view: ViewTransform::identity(),
        })
    }

    #[cfg(test)]
    pub(crate) fn session(&self) -> &EditSession {
        &self.inner
    }
}

fn parse_config(value: JsValue) -> Result<EditorConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(EditorConfig::default());
    }
    from_js(value, "editor config")
}

fn parse_handle(name: &str) -> Result<Handle, JsValue> {
    name.parse::<Handle>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
