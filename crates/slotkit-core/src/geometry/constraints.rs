//! Post-gesture constraint settings.
//!
//! The grid/snapping UI owns these settings and passes them in with every
//! numeric edit. Missing fields deserialize to their defaults, so a partial
//! object such as `{ "gridSize": 8, "snapToGrid": true }` is valid.

use serde::{Deserialize, Serialize};

use super::numeric::{constrain_to_canvas, round_frame, snap_frame_to_grid};
use crate::{BBox, Frame};

/// Constraints applied to a frame after an interactive edit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FrameConstraints {
    /// Grid cell size in page units. Non-positive disables snapping.
    pub grid_size: f64,
    pub snap_to_grid: bool,
    /// Keep the frame inside the canvas bounds.
    pub constrain_to_canvas: bool,
    /// Decimal places to round to, if any.
    pub decimals: Option<u32>,
}

impl FrameConstraints {
    /// Create constraints that change nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if applying these constraints is a no-op
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Snap, then clamp to the canvas, then round.
    pub fn apply(&self, frame: &Frame, canvas: &BBox) -> Frame {
        let mut result = *frame;
        if self.snap_to_grid {
            result = snap_frame_to_grid(&result, self.grid_size);
        }
        if self.constrain_to_canvas {
            result = constrain_to_canvas(&result, canvas);
        }
        if let Some(decimals) = self.decimals {
            result = round_frame(&result, decimals);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> BBox {
        BBox::new(0.0, 0.0, 100.0, 100.0)
    }

    #[test]
    fn test_default_is_noop() {
        let constraints = FrameConstraints::new();
        assert!(constraints.is_default());

        let frame = Frame::new(-3.3, 250.7, 17.2, 9.9);
        assert_eq!(constraints.apply(&frame, &canvas()), frame);
    }

    #[test]
    fn test_snap_then_constrain() {
        let constraints = FrameConstraints {
            grid_size: 10.0,
            snap_to_grid: true,
            constrain_to_canvas: true,
            decimals: None,
        };
        // Snaps to (100, 40, 20, 10), then gets pulled back inside
        let result = constraints.apply(&Frame::new(97.0, 41.0, 18.0, 12.0), &canvas());
        assert_eq!(result, Frame::new(80.0, 40.0, 20.0, 10.0));
    }

    #[test]
    fn test_grid_size_without_flag_does_not_snap() {
        let constraints = FrameConstraints {
            grid_size: 10.0,
            ..FrameConstraints::default()
        };
        let frame = Frame::new(3.0, 3.0, 3.0, 3.0);
        assert_eq!(constraints.apply(&frame, &canvas()), frame);
    }

    #[test]
    fn test_rounding_last() {
        let constraints = FrameConstraints {
            decimals: Some(0),
            constrain_to_canvas: true,
            ..FrameConstraints::default()
        };
        let result = constraints.apply(&Frame::new(10.4, 20.6, 30.2, 40.7), &canvas());
        assert_eq!(result, Frame::new(10.0, 21.0, 30.0, 41.0));
    }
}
