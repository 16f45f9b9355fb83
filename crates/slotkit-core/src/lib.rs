//! Slotkit Core - Transform and alignment engine
//!
//! This crate provides the geometry layer behind the Slotkit template editor:
//! rotated bounding boxes, aspect-ratio locking, numeric transforms,
//! stacking order, alignment, distribution and multi-select group transforms.
//!
//! Every operation is a pure function over an immutable snapshot. Callers own
//! the authoritative state and merge the returned frames or patches back in.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner of the page, y grows downwards
//! - Rotation angles are in degrees, positive = clockwise
//! - A frame rotates about its own center

pub mod arrange;
pub mod context;
pub mod geometry;
pub mod group;

pub use arrange::{
    align_to_page, align_to_selection, arrange_stack, bring_forward, bring_to_front, distribute,
    send_backward, send_to_back, AlignMode, DistributeAxis, ModeError, StackOrder,
};
pub use context::{apply_frames, apply_patches, unlocked_frames, Slot, TransformContext};
pub use geometry::{get_rotated_bbox, get_union_bbox, FrameConstraints, NumericTransform};
pub use group::{move_group, resize_group, rotate_group, scale_group, transform_group};

use serde::{Deserialize, Serialize};

/// Smallest width or height a frame may take after any mutation.
pub const MIN_DIMENSION: f64 = 1.0;

/// A point in page coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle. Never carries a rotation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (x + width).
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (y + height).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// An element's unrotated rectangle plus an optional rotation about its center.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Clockwise degrees about the frame center; `None` means 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

impl Frame {
    /// Create an unrotated frame.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rotation: None,
        }
    }

    /// Builder-style rotation setter.
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = Some(degrees);
        self
    }

    /// Rotation in degrees, treating absence as 0.
    #[inline]
    pub fn rotation_degrees(&self) -> f64 {
        self.rotation.unwrap_or(0.0)
    }

    /// Center of the unrotated rectangle (also the rotation pivot).
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// The frame's rectangle with rotation dropped.
    #[inline]
    pub fn to_bbox(&self) -> BBox {
        BBox::new(self.x, self.y, self.width, self.height)
    }

    /// Merge a partial update over this frame.
    pub fn apply_patch(&self, patch: &FramePatch) -> Frame {
        Frame {
            x: patch.x.unwrap_or(self.x),
            y: patch.y.unwrap_or(self.y),
            width: patch.width.unwrap_or(self.width),
            height: patch.height.unwrap_or(self.height),
            rotation: patch.rotation.or(self.rotation),
        }
    }
}

/// Partial frame update. Absent fields are left untouched when merged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FramePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

impl FramePatch {
    /// Patch that only moves the frame.
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    /// Patch that only sets `x`.
    pub fn x(x: f64) -> Self {
        Self {
            x: Some(x),
            ..Self::default()
        }
    }

    /// Patch that only sets `y`.
    pub fn y(y: f64) -> Self {
        Self {
            y: Some(y),
            ..Self::default()
        }
    }

    /// Check if the patch changes nothing
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
