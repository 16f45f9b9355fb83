//! WASM bindings for toolbar arrange commands.
//!
//! Stacking commands return the new slot list, or `undefined` when the
//! command changes nothing. Slots come back as `{ name, z, locked }` only, so
//! the caller merges the new `z` values into its own slot objects by name.
//!
//! Alignment and distribution return `{ [name]: { x } }` or `{ [name]: { y } }`
//! partial updates.

use std::borrow::Cow;

use crate::log;
use crate::types::{from_js, parse_mode, selection_from_js, to_js};
use slotkit_core::arrange::{self, AlignMode, DistributeAxis, StackOrder};
use slotkit_core::{Slot, TransformContext};
use wasm_bindgen::prelude::*;

/// Run a stacking command named as in the toolbar.
///
/// # Arguments
///
/// * `order` - `"bring-to-front"`, `"bring-forward"`, `"send-backward"` or `"send-to-back"`
/// * `name` - Slot to move
/// * `ctx` - Transform context `{ slots, frames, canvasBounds }`
///
/// # Example (TypeScript)
///
/// ```typescript
/// const slots = apply_stack_order("bring-to-front", "title", ctx);
/// if (slots !== undefined) store.setSlotOrder(slots);
/// ```
#[wasm_bindgen]
pub fn apply_stack_order(order: &str, name: &str, ctx: JsValue) -> Result<JsValue, JsValue> {
    let order: StackOrder = parse_mode(order)?;
    let ctx: TransformContext = from_js(ctx, "transform context")?;
    stack_result(arrange::arrange_stack(order, name, &ctx))
}

#[wasm_bindgen]
pub fn bring_to_front(name: &str, ctx: JsValue) -> Result<JsValue, JsValue> {
    let ctx: TransformContext = from_js(ctx, "transform context")?;
    stack_result(arrange::bring_to_front(name, &ctx))
}

#[wasm_bindgen]
pub fn bring_forward(name: &str, ctx: JsValue) -> Result<JsValue, JsValue> {
    let ctx: TransformContext = from_js(ctx, "transform context")?;
    stack_result(arrange::bring_forward(name, &ctx))
}

#[wasm_bindgen]
pub fn send_backward(name: &str, ctx: JsValue) -> Result<JsValue, JsValue> {
    let ctx: TransformContext = from_js(ctx, "transform context")?;
    stack_result(arrange::send_backward(name, &ctx))
}

#[wasm_bindgen]
pub fn send_to_back(name: &str, ctx: JsValue) -> Result<JsValue, JsValue> {
    let ctx: TransformContext = from_js(ctx, "transform context")?;
    stack_result(arrange::send_to_back(name, &ctx))
}

/// Align the selection to the page bounds.
///
/// # Arguments
///
/// * `names` - Selected slot names
/// * `mode` - `"left"`, `"center"`, `"right"`, `"top"`, `"middle"` or `"bottom"`
/// * `ctx` - Transform context
#[wasm_bindgen]
pub fn align_to_page(names: JsValue, mode: &str, ctx: JsValue) -> Result<JsValue, JsValue> {
    let mode: AlignMode = parse_mode(mode)?;
    let (names, ctx) = selection_from_js(names, ctx)?;
    log::report_excluded("align_to_page", &names, &ctx);
    to_js(&arrange::align_to_page(&names, mode, &ctx))
}

/// Align the selection to its first unlocked member.
#[wasm_bindgen]
pub fn align_to_selection(names: JsValue, mode: &str, ctx: JsValue) -> Result<JsValue, JsValue> {
    let mode: AlignMode = parse_mode(mode)?;
    let (names, ctx) = selection_from_js(names, ctx)?;
    log::report_excluded("align_to_selection", &names, &ctx);
    to_js(&arrange::align_to_selection(&names, mode, &ctx))
}

/// Evenly space the centers of three or more elements.
///
/// * `axis` - `"horizontal"` or `"vertical"`
#[wasm_bindgen]
pub fn distribute(names: JsValue, axis: &str, ctx: JsValue) -> Result<JsValue, JsValue> {
    let axis: DistributeAxis = parse_mode(axis)?;
    let (names, ctx) = selection_from_js(names, ctx)?;
    log::report_excluded("distribute", &names, &ctx);
    to_js(&arrange::distribute(&names, axis, &ctx))
}

fn stack_result(slots: Cow<'_, [Slot]>) -> Result<JsValue, JsValue> {
    match slots {
        Cow::Borrowed(_) => Ok(JsValue::UNDEFINED),
        Cow::Owned(slots) => to_js(&slots),
    }
}
