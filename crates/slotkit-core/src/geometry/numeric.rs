//! Numeric frame edits: explicit values typed into the properties panel,
//! canvas clamping, rotation normalization, grid snapping and rounding.

use serde::{Deserialize, Serialize};

use super::aspect::lock_aspect_ratio;
use crate::{BBox, Frame, MIN_DIMENSION};

/// Explicit frame values. Absent fields keep the frame's current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NumericTransform {
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

/// Apply explicit values to a frame.
///
/// Position and rotation are applied first, rotation normalized to
/// `(-180, 180]`. With `lock_ratio` set and a width or height present, sizing
/// goes through [`lock_aspect_ratio`] (width wins when both are given).
/// Otherwise width and height are applied independently, each floored at
/// [`MIN_DIMENSION`].
pub fn apply_numeric_transform(
    frame: &Frame,
    transform: &NumericTransform,
    lock_ratio: bool,
) -> Frame {
    let mut result = *frame;
    if let Some(x) = transform.x {
        result.x = x;
    }
    if let Some(y) = transform.y {
        result.y = y;
    }
    if let Some(rotation) = transform.rotation {
        result.rotation = Some(normalize_rotation(rotation));
    }

    let resizing = transform.width.is_some() || transform.height.is_some();
    if lock_ratio && resizing {
        return lock_aspect_ratio(&result, transform.width, transform.height);
    }

    if let Some(width) = transform.width {
        result.width = width.max(MIN_DIMENSION);
    }
    if let Some(height) = transform.height {
        result.height = height.max(MIN_DIMENSION);
    }
    result
}

/// Keep a frame fully inside the canvas.
///
/// Size is clamped into `[1, canvas size]` first, then the position is
/// clamped so the (possibly shrunk) frame stays inside `canvas`.
pub fn constrain_to_canvas(frame: &Frame, canvas: &BBox) -> Frame {
    let width = clamp(frame.width, MIN_DIMENSION, canvas.width);
    let height = clamp(frame.height, MIN_DIMENSION, canvas.height);
    Frame {
        x: clamp(frame.x, canvas.x, canvas.right() - width),
        y: clamp(frame.y, canvas.y, canvas.bottom() - height),
        width,
        height,
        rotation: frame.rotation,
    }
}

/// Map any angle to `(-180, 180]`.
///
/// # Example
///
/// ```
/// use slotkit_core::geometry::normalize_rotation;
///
/// assert_eq!(normalize_rotation(270.0), -90.0);
/// assert_eq!(normalize_rotation(-270.0), 90.0);
/// assert_eq!(normalize_rotation(-180.0), 180.0);
/// ```
pub fn normalize_rotation(degrees: f64) -> f64 {
    let wrapped = ((degrees % 360.0) + 360.0) % 360.0;
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Snap a value to the nearest grid line. Non-positive grids are a no-op.
#[inline]
pub fn snap_to_grid(value: f64, grid_size: f64) -> f64 {
    if grid_size <= 0.0 {
        return value;
    }
    round_half_up(value / grid_size) * grid_size
}

/// Snap position and size independently.
///
/// Width and height never snap below one grid cell.
pub fn snap_frame_to_grid(frame: &Frame, grid_size: f64) -> Frame {
    if grid_size <= 0.0 {
        return *frame;
    }
    Frame {
        x: snap_to_grid(frame.x, grid_size),
        y: snap_to_grid(frame.y, grid_size),
        width: snap_to_grid(frame.width, grid_size).max(grid_size),
        height: snap_to_grid(frame.height, grid_size).max(grid_size),
        rotation: frame.rotation,
    }
}

/// Clamp `value` into `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics: when `min > max` the result is `max`.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Round to a fixed number of decimal places. Ties round towards +∞.
#[inline]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    round_half_up(value * factor) / factor
}

/// Round every field of a frame; rotation only if present.
pub fn round_frame(frame: &Frame, decimals: u32) -> Frame {
    Frame {
        x: round_to(frame.x, decimals),
        y: round_to(frame.y, decimals),
        width: round_to(frame.width, decimals),
        height: round_to(frame.height, decimals),
        rotation: frame.rotation.map(|r| round_to(r, decimals)),
    }
}

// Ties go up so that snapping is translation-invariant across zero
// (-5 and 5 on a grid of 10 both move by +5).
#[inline]
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: Normalized rotation is always in (-180, 180].
        #[test]
        fn prop_normalized_rotation_range(degrees in -10_000.0f64..10_000.0) {
            let r = normalize_rotation(degrees);
            prop_assert!(r > -180.0 && r <= 180.0, "got {} for {}", r, degrees);
        }

        /// Property: Rounding a grid-snapped integer frame is idempotent.
        #[test]
        fn prop_snap_round_idempotent(
            (x, y, w, h) in (-500i32..500, -500i32..500, 1i32..500, 1i32..500),
            grid in 1i32..50,
        ) {
            let frame = Frame::new(x as f64, y as f64, w as f64, h as f64);
            let once = round_frame(&snap_frame_to_grid(&frame, grid as f64), 0);
            let twice = round_frame(&snap_frame_to_grid(&once, grid as f64), 0);
            prop_assert_eq!(once, round_frame(&once, 0));
            prop_assert_eq!(once, twice);
        }

        /// Property: A constrained frame lies inside the canvas.
        #[test]
        fn prop_constrained_frame_inside(
            (x, y, w, h) in (-1000.0f64..1000.0, -1000.0f64..1000.0, 0.0f64..2000.0, 0.0f64..2000.0),
            (cw, ch) in (1.0f64..1000.0, 1.0f64..1000.0),
        ) {
            let canvas = BBox::new(0.0, 0.0, cw, ch);
            let result = constrain_to_canvas(&Frame::new(x, y, w, h), &canvas);
            prop_assert!(result.width >= MIN_DIMENSION && result.width <= cw);
            prop_assert!(result.height >= MIN_DIMENSION && result.height <= ch);
            prop_assert!(result.x >= 0.0 && result.x + result.width <= cw + 1e-9);
            prop_assert!(result.y >= 0.0 && result.y + result.height <= ch + 1e-9);
        }
    }
}
