//! View transform: pan/zoom state and window↔canvas coordinate conversion.
//!
//! The workspace renders the canvas at `window = canvas * scale + offset`
//! per axis. This module holds that mapping as a plain `Copy` value and
//! provides both directions of the conversion. Holding a [`ViewTransform`]
//! never observes later pan/zoom changes; callers that need the live mapping
//! go through [`ViewTransformSource`] at the moment of use.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A point with `f64` components, in window, root, or canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointD {
    pub x: f64,
    pub y: f64,
}

impl PointD {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Componentwise floor to the integer pixel grid.
    ///
    /// This is the only way a [`PointI`] is derived from precise coordinates,
    /// so the integer and floating representations can never drift apart.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn floor(self) -> PointI {
        PointI { x: self.x.floor() as i32, y: self.y.floor() as i32 }
    }
}

/// An integer canvas pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointI {
    pub x: i32,
    pub y: i32,
}

impl PointI {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Error building a [`ViewTransform`] from host-supplied pan/zoom state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewTransformError {
    /// A scale factor was zero, negative, or non-finite; the mapping would
    /// not be invertible.
    #[error("view scale must be positive and finite, got {scale}")]
    InvalidScale { scale: f64 },
    /// An offset component was non-finite.
    #[error("view offset must be finite, got {offset}")]
    InvalidOffset { offset: f64 },
}

/// Affine window↔canvas mapping: per-axis positive scale plus translation.
///
/// `window = canvas * scale + offset` componentwise. The invariant (finite,
/// strictly positive scales; finite offsets) is established by [`new`] and
/// never re-checked on the conversion paths.
///
/// [`new`]: ViewTransform::new
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    scale_x: f64,
    scale_y: f64,
    offset_x: f64,
    offset_y: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl ViewTransform {
    /// Build a transform, validating the invertibility invariant.
    pub fn new(
        scale_x: f64,
        scale_y: f64,
        offset_x: f64,
        offset_y: f64,
    ) -> Result<Self, ViewTransformError> {
        for scale in [scale_x, scale_y] {
            if !scale.is_finite() || scale <= 0.0 {
                return Err(ViewTransformError::InvalidScale { scale });
            }
        }
        for offset in [offset_x, offset_y] {
            if !offset.is_finite() {
                return Err(ViewTransformError::InvalidOffset { offset });
            }
        }
        Ok(Self { scale_x, scale_y, offset_x, offset_y })
    }

    /// 1:1 scale, zero offset.
    #[must_use]
    pub const fn identity() -> Self {
        Self { scale_x: 1.0, scale_y: 1.0, offset_x: 0.0, offset_y: 0.0 }
    }

    /// Convert a window-space point to canvas coordinates.
    ///
    /// Exact floating-point inverse of the render mapping. The result is not
    /// clamped to the canvas bounds: coordinates outside the canvas are valid
    /// (dragging past the edge) and flow through unchanged.
    #[must_use]
    pub fn window_to_canvas(&self, window: PointD) -> PointD {
        PointD {
            x: (window.x - self.offset_x) / self.scale_x,
            y: (window.y - self.offset_y) / self.scale_y,
        }
    }

    /// Convert a canvas-space point to window coordinates.
    #[must_use]
    pub fn canvas_to_window(&self, canvas: PointD) -> PointD {
        PointD {
            x: canvas.x * self.scale_x + self.offset_x,
            y: canvas.y * self.scale_y + self.offset_y,
        }
    }

    #[must_use]
    pub fn scale_x(&self) -> f64 {
        self.scale_x
    }

    #[must_use]
    pub fn scale_y(&self) -> f64 {
        self.scale_y
    }

    #[must_use]
    pub fn offset_x(&self) -> f64 {
        self.offset_x
    }

    #[must_use]
    pub fn offset_y(&self) -> f64 {
        self.offset_y
    }
}

/// Read-only access to the live view transform.
///
/// The workspace owns and mutates pan/zoom; event construction must see the
/// value current at that instant, so the codec takes this capability instead
/// of a transform and reads it once per occurrence.
pub trait ViewTransformSource {
    fn current_view_transform(&self) -> ViewTransform;
}

/// A fixed transform is its own source. Useful for tests and for hosts whose
/// view cannot change mid-dispatch.
impl ViewTransformSource for ViewTransform {
    fn current_view_transform(&self) -> ViewTransform {
        *self
    }
}
