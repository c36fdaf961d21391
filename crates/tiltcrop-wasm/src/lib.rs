//! Tiltcrop WASM - WebAssembly bindings for Tiltcrop
//!
//! This crate exposes the tiltcrop-core constraint engine to
//! JavaScript/TypeScript editors.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible rectangle type and JS value conversion
//! - `constrain` - Stateless clamps and geometry queries
//! - `session` - Stateful editing session driven by pointer events
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsCropSession, JsRect } from '@tiltcrop/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const session = new JsCropSession(new JsRect(0, 0, 6000, 4000), undefined);
//! session.set_straighten(3.5);
//! console.log(session.crop_rect.width);
//! ```

use wasm_bindgen::prelude::*;

mod constrain;
mod session;
mod types;

// Re-export public types
pub use constrain::{
    constrain_center_to_inset_diamond, constrain_to_rotated_bounds,
    constrain_to_rotated_bounds_iterative, inset_for_rect, is_point_in_polygon, rotated_boundary,
    rotated_extent, segment_intersection, straighten_from_line,
};
pub use session::JsCropSession;
pub use types::JsRect;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
