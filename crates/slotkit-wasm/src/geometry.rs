//! WASM bindings for single-frame geometry.
//!
//! Bounding-box math, aspect-ratio locking and numeric transforms used by the
//! properties panel and the pointer-gesture layer.

use crate::types::{from_js, from_js_or_default, to_js};
use slotkit_core::geometry::{self, FrameConstraints, NumericTransform};
use slotkit_core::{BBox, Frame, Point};
use wasm_bindgen::prelude::*;

/// Axis-aligned bounding box of a rotated frame.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const bbox = get_rotated_bbox({ x: 0, y: 0, width: 100, height: 100, rotation: 45 });
/// // bbox.width ≈ 141.42
/// ```
#[wasm_bindgen]
pub fn get_rotated_bbox(frame: JsValue) -> Result<JsValue, JsValue> {
    let frame: Frame = from_js(frame, "frame")?;
    to_js(&geometry::get_rotated_bbox(&frame))
}

/// Union of the rotated bounding boxes of an array of frames.
#[wasm_bindgen]
pub fn get_union_bbox(frames: JsValue) -> Result<JsValue, JsValue> {
    let frames: Vec<Frame> = from_js(frames, "frames")?;
    to_js(&geometry::get_union_bbox(&frames))
}

/// Check whether a point lies inside a box, edges included.
#[wasm_bindgen]
pub fn contains_point(bbox: JsValue, point: JsValue) -> Result<bool, JsValue> {
    let bbox: BBox = from_js(bbox, "bbox")?;
    let point: Point = from_js(point, "point")?;
    Ok(geometry::contains_point(&bbox, point))
}

/// The four corners of a box, clockwise from the top-left.
#[wasm_bindgen]
pub fn get_bbox_corners(bbox: JsValue) -> Result<JsValue, JsValue> {
    let bbox: BBox = from_js(bbox, "bbox")?;
    to_js(&geometry::get_bbox_corners(&bbox))
}

/// Check whether two boxes overlap. Touching edges count.
#[wasm_bindgen]
pub fn bboxes_intersect(a: JsValue, b: JsValue) -> Result<bool, JsValue> {
    let a: BBox = from_js(a, "bbox")?;
    let b: BBox = from_js(b, "bbox")?;
    Ok(geometry::bboxes_intersect(&a, &b))
}

#[wasm_bindgen]
pub fn get_bbox_center(bbox: JsValue) -> Result<JsValue, JsValue> {
    let bbox: BBox = from_js(bbox, "bbox")?;
    to_js(&geometry::get_bbox_center(&bbox))
}

#[wasm_bindgen]
pub fn expand_bbox(bbox: JsValue, padding: f64) -> Result<JsValue, JsValue> {
    let bbox: BBox = from_js(bbox, "bbox")?;
    to_js(&geometry::expand_bbox(&bbox, padding))
}

#[wasm_bindgen]
pub fn clamp_bbox(bbox: JsValue, container: JsValue) -> Result<JsValue, JsValue> {
    let bbox: BBox = from_js(bbox, "bbox")?;
    let container: BBox = from_js(container, "container")?;
    to_js(&geometry::clamp_bbox(&bbox, &container))
}

#[wasm_bindgen]
pub fn get_aspect_ratio(frame: JsValue) -> Result<f64, JsValue> {
    let frame: Frame = from_js(frame, "frame")?;
    Ok(geometry::get_aspect_ratio(&frame))
}

/// Resize a frame keeping its aspect ratio. Width wins when both are given.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const f = { x: 0, y: 0, width: 200, height: 100 };
/// lock_aspect_ratio(f, 400, undefined);   // { width: 400, height: 200 }
/// lock_aspect_ratio(f, undefined, 200);   // { width: 400, height: 200 }
/// lock_aspect_ratio(f, 300, 200);         // { width: 300, height: 150 }
/// ```
#[wasm_bindgen]
pub fn lock_aspect_ratio(
    frame: JsValue,
    new_width: Option<f64>,
    new_height: Option<f64>,
) -> Result<JsValue, JsValue> {
    let frame: Frame = from_js(frame, "frame")?;
    to_js(&geometry::lock_aspect_ratio(&frame, new_width, new_height))
}

#[wasm_bindgen]
pub fn fit_to_max_size(frame: JsValue, max_width: f64, max_height: f64) -> Result<JsValue, JsValue> {
    let frame: Frame = from_js(frame, "frame")?;
    to_js(&geometry::fit_to_max_size(&frame, max_width, max_height))
}

#[wasm_bindgen]
pub fn fill_min_size(frame: JsValue, min_width: f64, min_height: f64) -> Result<JsValue, JsValue> {
    let frame: Frame = from_js(frame, "frame")?;
    to_js(&geometry::fill_min_size(&frame, min_width, min_height))
}

/// Compare aspect ratios. `tolerance` defaults to 0.01.
#[wasm_bindgen]
pub fn has_same_aspect_ratio(a: JsValue, b: JsValue, tolerance: Option<f64>) -> Result<bool, JsValue> {
    let a: Frame = from_js(a, "frame")?;
    let b: Frame = from_js(b, "frame")?;
    let tolerance = tolerance.unwrap_or(geometry::DEFAULT_RATIO_TOLERANCE);
    Ok(geometry::has_same_aspect_ratio_within(&a, &b, tolerance))
}

/// Apply values typed into the properties panel.
///
/// # Arguments
///
/// * `frame` - Current frame
/// * `transform` - `{ x?, y?, width?, height?, rotation? }`
/// * `lock_ratio` - Keep the aspect ratio when resizing
#[wasm_bindgen]
pub fn apply_numeric_transform(
    frame: JsValue,
    transform: JsValue,
    lock_ratio: bool,
) -> Result<JsValue, JsValue> {
    let frame: Frame = from_js(frame, "frame")?;
    let transform: NumericTransform = from_js_or_default(transform, "numeric transform")?;
    to_js(&geometry::apply_numeric_transform(&frame, &transform, lock_ratio))
}

/// Snap, clamp and round a frame according to the editor's grid settings.
///
/// `constraints` may be partial or `undefined`:
/// `{ gridSize?, snapToGrid?, constrainToCanvas?, decimals? }`.
#[wasm_bindgen]
pub fn apply_frame_constraints(
    frame: JsValue,
    constraints: JsValue,
    canvas_bounds: JsValue,
) -> Result<JsValue, JsValue> {
    let frame: Frame = from_js(frame, "frame")?;
    let constraints: FrameConstraints = from_js_or_default(constraints, "frame constraints")?;
    let canvas: BBox = from_js(canvas_bounds, "canvas bounds")?;
    to_js(&constraints.apply(&frame, &canvas))
}

#[wasm_bindgen]
pub fn constrain_to_canvas(frame: JsValue, canvas_bounds: JsValue) -> Result<JsValue, JsValue> {
    let frame: Frame = from_js(frame, "frame")?;
    let canvas: BBox = from_js(canvas_bounds, "canvas bounds")?;
    to_js(&geometry::constrain_to_canvas(&frame, &canvas))
}

/// Map an angle in degrees to `(-180, 180]`.
#[wasm_bindgen]
pub fn normalize_rotation(degrees: f64) -> f64 {
    geometry::normalize_rotation(degrees)
}

#[wasm_bindgen]
pub fn snap_to_grid(value: f64, grid_size: f64) -> f64 {
    geometry::snap_to_grid(value, grid_size)
}

#[wasm_bindgen]
pub fn snap_frame_to_grid(frame: JsValue, grid_size: f64) -> Result<JsValue, JsValue> {
    let frame: Frame = from_js(frame, "frame")?;
    to_js(&geometry::snap_frame_to_grid(&frame, grid_size))
}

#[wasm_bindgen]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    geometry::round_to(value, decimals)
}

#[wasm_bindgen]
pub fn round_frame(frame: JsValue, decimals: u32) -> Result<JsValue, JsValue> {
    let frame: Frame = from_js(frame, "frame")?;
    to_js(&geometry::round_frame(&frame, decimals))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Scalar bindings work on all targets

    #[test]
    fn test_normalize_rotation() {
        assert_eq!(normalize_rotation(270.0), -90.0);
        assert_eq!(normalize_rotation(-270.0), 90.0);
    }

    #[test]
    fn test_snap_to_grid() {
        assert_eq!(snap_to_grid(23.0, 10.0), 20.0);
        assert_eq!(snap_to_grid(23.0, 0.0), 23.0);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.23456, 2), 1.23);
    }
}
