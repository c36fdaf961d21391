//! Interactive crop editing session.
//!
//! [`EditSession`] owns the single mutable [`CropState`] and the anchors of
//! the gesture in progress. Every geometric step is delegated to the pure
//! functions in [`crate::drag`] and [`crate::constrain`]; the session only
//! threads their results back into its state.
//!
//! # Gestures
//!
//! A gesture starts with [`EditSession::begin_drag`], receives cumulative
//! pointer translations through [`EditSession::drag_to`] and finishes with
//! [`EditSession::end_drag`]. The previous translation and the last valid
//! center are reset at both ends, so every gesture clamps relative to its
//! own starting point. A center drag result only becomes the new anchor when
//! the whole rect fits the rotated bounds.

use crate::config::{ConfigError, EditorConfig};
use crate::constrain::settle;
use crate::drag::{drag_rect, straighten_from_line, DragConstraints, Handle};
use crate::geometry::{is_point_in_polygon, rotated_boundary, Point, Rect};
use crate::view::{TransformError, ViewTransform};
use crate::CropState;

/// Per-gesture anchors.
#[derive(Debug, Clone, Copy, PartialEq)]
struct GestureState {
    handle: Handle,
    previous_translation: Point,
    from_center: Option<Point>,
}

impl GestureState {
    fn new(handle: Handle) -> Self {
        Self {
            handle,
            previous_translation: Point::ZERO,
            from_center: None,
        }
    }
}

/// Editing session for one image.
#[derive(Debug, Clone)]
pub struct EditSession {
    state: CropState,
    extent: Rect,
    config: EditorConfig,
    gesture: Option<GestureState>,
}

impl EditSession {
    /// Start a session over an image with the given unrotated `extent`.
    ///
    /// The initial state is settled immediately when constrain mode is on.
    pub fn new(state: CropState, extent: Rect, config: EditorConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut session = Self {
            state,
            extent,
            config,
            gesture: None,
        };
        session.resettle();
        Ok(session)
    }

    /// Session with the default state (whole image, no rotation) and config.
    pub fn for_extent(extent: Rect) -> Self {
        Self {
            state: CropState::new(extent),
            extent,
            config: EditorConfig::default(),
            gesture: None,
        }
    }

    pub fn state(&self) -> &CropState {
        &self.state
    }

    pub fn extent(&self) -> Rect {
        self.extent
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    /// Replace the configuration. The current rect is re-settled with the
    /// new clamp settings.
    pub fn set_config(&mut self, config: EditorConfig) -> Result<(), ConfigError> {
        config.validate()?;
        tracing::debug!(?config, "Editor config changed");
        self.config = config;
        self.resettle();
        Ok(())
    }

    /// Start a drag gesture on `handle`, discarding any unfinished one.
    pub fn begin_drag(&mut self, handle: Handle) {
        if let Some(previous) = self.gesture {
            tracing::debug!(handle = ?previous.handle, "Abandoning unfinished drag");
        }
        tracing::debug!(?handle, rect = %self.state.crop_rect, "Drag started");
        self.gesture = Some(GestureState::new(handle));
    }

    /// Feed the cumulative pointer `translation` (view units, since the
    /// gesture began) for `handle`.
    ///
    /// The persisted rect is mapped to view space with `view`, moved by the
    /// change since the previous call, mapped back and constrained. Calling
    /// this without [`begin_drag`](Self::begin_drag), or with a different
    /// handle, starts a new gesture.
    pub fn drag_to(
        &mut self,
        handle: Handle,
        translation: Point,
        view: &ViewTransform,
    ) -> Result<Rect, TransformError> {
        let mut gesture = match self.gesture {
            Some(gesture) if gesture.handle == handle => gesture,
            _ => {
                self.begin_drag(handle);
                GestureState::new(handle)
            }
        };

        let delta = Point::new(
            translation.x - gesture.previous_translation.x,
            translation.y - gesture.previous_translation.y,
        );

        let view_rect = view.apply_rect(self.state.crop_rect);
        let constraints = DragConstraints {
            bounds: self.extent,
            angle_degrees: self.state.straighten,
            constrain: self.state.constrain,
            config: &self.config,
        };
        let rect = drag_rect(
            view_rect,
            handle,
            delta,
            view,
            &constraints,
            gesture.from_center,
        )?;

        gesture.previous_translation = translation;
        if handle.is_center() && self.fits(rect) {
            gesture.from_center = Some(rect.center());
        }
        self.gesture = Some(gesture);
        self.state.crop_rect = rect;

        Ok(rect)
    }

    /// Finish the current gesture. Anchors are cleared.
    pub fn end_drag(&mut self) {
        if let Some(gesture) = self.gesture.take() {
            tracing::debug!(
                handle = ?gesture.handle,
                rect = %self.state.crop_rect,
                "Drag ended"
            );
        }
    }

    /// Set the straighten angle (degrees) and re-settle the crop.
    pub fn set_straighten(&mut self, angle_degrees: f64) {
        tracing::debug!(angle = angle_degrees, "Straighten changed");
        self.state.straighten = angle_degrees;
        self.resettle();
    }

    /// Level the line `start -> end` drawn in view space by adding the
    /// matching correction to the straighten angle. Returns the new angle.
    pub fn straighten_with_line(&mut self, start: Point, end: Point) -> f64 {
        let correction = straighten_from_line(start, end);
        self.set_straighten(self.state.straighten + correction);
        self.state.straighten
    }

    /// Toggle constrain mode. Switching it on settles the current crop.
    pub fn set_constrain(&mut self, constrain: bool) {
        tracing::debug!(constrain, "Constrain mode changed");
        self.state.constrain = constrain;
        self.resettle();
    }

    /// Replace the crop rect, settling it when constrain mode is on.
    pub fn set_crop_rect(&mut self, rect: Rect) {
        self.state.crop_rect = rect;
        self.resettle();
    }

    /// Back to the whole image with no rotation. Constrain mode and the
    /// aspect ratio are kept.
    pub fn reset(&mut self) {
        tracing::debug!("Crop reset");
        self.gesture = None;
        self.state.crop_rect = self.extent;
        self.state.straighten = 0.0;
    }

    /// True when constrain mode is off or every corner of `rect` is inside
    /// the current rotated boundary.
    fn fits(&self, rect: Rect) -> bool {
        if !self.state.constrain {
            return true;
        }
        let boundary = rotated_boundary(self.extent, self.state.straighten);
        rect.corners()
            .iter()
            .all(|corner| is_point_in_polygon(*corner, &boundary))
    }

    fn resettle(&mut self) {
        if self.state.constrain {
            self.state.crop_rect = settle(
                self.state.crop_rect,
                self.extent,
                self.state.straighten,
                &self.config,
            );
        }
    }
}
