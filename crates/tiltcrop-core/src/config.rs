//! Editor configuration.
//!
//! All fields have serde defaults, so a host can pass a partial object (or
//! nothing at all) and get the standard interactive behavior.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default drag floor, in view units.
pub const DEFAULT_MIN_SIZE: f64 = 65.0;

/// Default iteration cap for [`ClampMode::Iterative`].
pub const DEFAULT_MAX_ITERATIONS: u32 = 20;

/// Error types for configuration validation.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// The minimum drag size is negative, NaN or infinite.
    #[error("Invalid minimum size: {0} (must be finite and >= 0)")]
    InvalidMinSize(f64),

    /// The iterative clamp was configured to run zero times.
    #[error("Invalid iteration count: {0} (must be >= 1)")]
    InvalidIterationCount(u32),
}

/// How the edge clamp settles a rectangle against the rotated boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum ClampMode {
    /// One pass over the four corners. Extreme rotation and size combinations
    /// can leave a corner outside the boundary after this pass.
    #[default]
    SinglePass,
    /// Repeat the pass until every corner is inside, the rectangle stops
    /// changing, it falls below the minimum extent, or the cap is reached.
    Iterative { max_iterations: u32 },
}

impl ClampMode {
    /// Iterative mode with the default cap.
    pub fn iterative() -> Self {
        ClampMode::Iterative {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Where a center drag lands when it leaves the allowed region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CenterStrategy {
    /// Stop where the path from the last valid center crosses the region edge.
    #[default]
    AlongTravel,
    /// Snap to the closest point of the region edge.
    NearestPoint,
}

/// Interactive editor settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Smallest width/height a handle drag may produce, in view units.
    #[serde(default = "default_min_size")]
    pub min_size: f64,
    /// Edge clamp behavior for corner and edge handles.
    #[serde(default)]
    pub clamp_mode: ClampMode,
    /// Center clamp behavior for the center handle.
    #[serde(default)]
    pub center_strategy: CenterStrategy,
}

fn default_min_size() -> f64 {
    DEFAULT_MIN_SIZE
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MIN_SIZE,
            clamp_mode: ClampMode::default(),
            center_strategy: CenterStrategy::default(),
        }
    }
}

impl EditorConfig {
    /// Create a config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that every field holds a usable value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_size.is_finite() || self.min_size < 0.0 {
            return Err(ConfigError::InvalidMinSize(self.min_size));
        }
        if let ClampMode::Iterative { max_iterations } = self.clamp_mode {
            if max_iterations == 0 {
                return Err(ConfigError::InvalidIterationCount(max_iterations));
            }
        }
        Ok(())
    }
}
