//! WASM bindings for multi-select group transforms.
//!
//! Called once per pointer-move tick while dragging a selection. `move_group`
//! returns `{ [name]: { x, y } }`; the other bindings return full replacement
//! frames keyed by slot name. Locked slots never appear in the result.

use crate::log;
use crate::types::{selection_from_js, to_js};
use slotkit_core::group;
use wasm_bindgen::prelude::*;

/// Translate the selection by `(dx, dy)`.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const updates = move_group(["a", "b"], event.movementX, event.movementY, ctx);
/// store.mergeFrames(updates);
/// ```
#[wasm_bindgen]
pub fn move_group(names: JsValue, dx: f64, dy: f64, ctx: JsValue) -> Result<JsValue, JsValue> {
    let (names, ctx) = selection_from_js(names, ctx)?;
    log::report_excluded("move_group", &names, &ctx);
    to_js(&group::move_group(&names, dx, dy, &ctx))
}

/// Scale the selection about its bounding-box origin, then translate it.
#[wasm_bindgen]
pub fn transform_group(
    names: JsValue,
    dx: f64,
    dy: f64,
    scale_x: f64,
    scale_y: f64,
    ctx: JsValue,
) -> Result<JsValue, JsValue> {
    let (names, ctx) = selection_from_js(names, ctx)?;
    log::report_excluded("transform_group", &names, &ctx);
    to_js(&group::transform_group(&names, dx, dy, scale_x, scale_y, &ctx))
}

/// Resize the selection towards `new_width` x `new_height` without
/// distorting any member.
#[wasm_bindgen]
pub fn resize_group(
    names: JsValue,
    new_width: f64,
    new_height: f64,
    ctx: JsValue,
) -> Result<JsValue, JsValue> {
    let (names, ctx) = selection_from_js(names, ctx)?;
    log::report_excluded("resize_group", &names, &ctx);
    to_js(&group::resize_group(&names, new_width, new_height, &ctx))
}

/// Scale the selection uniformly about its center.
#[wasm_bindgen]
pub fn scale_group(names: JsValue, factor: f64, ctx: JsValue) -> Result<JsValue, JsValue> {
    let (names, ctx) = selection_from_js(names, ctx)?;
    log::report_excluded("scale_group", &names, &ctx);
    to_js(&group::scale_group(&names, factor, &ctx))
}

/// Rotate the selection about its center by `angle_delta` degrees.
///
/// Member rotations accumulate as `(old + delta) % 360` without normalization.
#[wasm_bindgen]
pub fn rotate_group(names: JsValue, angle_delta: f64, ctx: JsValue) -> Result<JsValue, JsValue> {
    let (names, ctx) = selection_from_js(names, ctx)?;
    log::report_excluded("rotate_group", &names, &ctx);
    to_js(&group::rotate_group(&names, angle_delta, &ctx))
}
