//! Tiltcrop Core - Crop rectangle constraints for straightened images
//!
//! This crate keeps an axis-aligned crop rectangle inside an image that is
//! displayed rotated by a straighten angle. It provides the geometry
//! (rotated boundaries, convex containment, segment intersection, rectangle
//! aware insets), the two clamps used while dragging, and an editing session
//! that threads drag gestures through them.

pub mod config;
pub mod constrain;
pub mod drag;
pub mod geometry;
pub mod session;
pub mod view;

pub use config::{CenterStrategy, ClampMode, ConfigError, EditorConfig};
pub use constrain::{constrain_center_to_inset_diamond, constrain_to_rotated_bounds, settle};
pub use drag::{straighten_from_line, Handle, UnknownHandle};
pub use geometry::{Point, Rect};
pub use session::EditSession;
pub use view::{TransformError, ViewTransform};

/// Aspect ratio preference carried with the crop.
///
/// The constraint engine does not enforce it; hosts use it to drive their
/// own handle behavior and presets.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum AspectRatio {
    /// Ratio of the image itself
    #[default]
    Original,
    /// No ratio
    Freeform,
    /// User-entered ratio
    Custom { width: f64, height: f64 },
    /// One of the host's presets (1:1, 4:3, 16:9, ...)
    Standard { width: f64, height: f64 },
}

impl AspectRatio {
    /// Width / height for this preference, if it names one.
    ///
    /// `Original` resolves against `extent`. `Freeform` and ratios with a
    /// non-positive side have none.
    pub fn ratio(&self, extent: Rect) -> Option<f64> {
        let (width, height) = match *self {
            AspectRatio::Original => (extent.width, extent.height),
            AspectRatio::Freeform => return None,
            AspectRatio::Custom { width, height } | AspectRatio::Standard { width, height } => {
                (width, height)
            }
        };
        if width > 0.0 && height > 0.0 {
            Some(width / height)
        } else {
            None
        }
    }
}

/// Crop edit state for one image
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CropState {
    /// Crop rectangle in unrotated image space
    pub crop_rect: Rect,
    /// Straighten angle in degrees
    pub straighten: f64,
    /// Keep the crop inside the rotated image
    #[serde(default = "default_constrain")]
    pub constrain: bool,
    #[serde(default)]
    pub aspect_ratio: AspectRatio,
}

fn default_constrain() -> bool {
    true
}

impl CropState {
    /// Whole image, no rotation, constrain on.
    pub fn new(extent: Rect) -> Self {
        Self {
            crop_rect: extent,
            straighten: 0.0,
            constrain: true,
            aspect_ratio: AspectRatio::default(),
        }
    }

    /// Check if this state leaves the image untouched
    pub fn is_identity(&self, extent: Rect) -> bool {
        self.crop_rect == extent && self.straighten == 0.0
    }

    /// Rotation about the image center by the straighten angle.
    pub fn rotation_transform(&self, extent: Rect) -> ViewTransform {
        ViewTransform::rotation_about(extent.center(), self.straighten)
    }

    /// Crop rect to render or export, with default settings.
    pub fn constrained_rect(&self, extent: Rect) -> Rect {
        self.constrained_rect_with(extent, &EditorConfig::default())
    }

    /// Crop rect to render or export: settled inside the rotated image when
    /// constrain mode is on, the raw rect otherwise.
    pub fn constrained_rect_with(&self, extent: Rect, config: &EditorConfig) -> Rect {
        if self.constrain {
            settle(self.crop_rect, extent, self.straighten, config)
        } else {
            self.crop_rect
        }
    }
}
