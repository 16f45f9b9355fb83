//! Slotkit WASM - WebAssembly bindings for the Slotkit transform engine
//!
//! This crate exposes the slotkit-core geometry, arrange and group operations
//! to the template editor.
//!
//! # Module Structure
//!
//! - `geometry` - Bounding boxes, aspect ratio and numeric transforms
//! - `arrange` - Stacking order, alignment and distribution
//! - `group` - Multi-select move, resize, scale and rotate
//! - `types` - Conversion between JS values and core types
//!
//! # Usage
//!
//! ```typescript
//! import init, { align_to_selection, move_group } from '@slotkit/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const ctx = { slots, frames, canvasBounds: { x: 0, y: 0, width: 800, height: 600 } };
//! const updates = align_to_selection(["title", "logo"], "left", ctx);
//! for (const [name, patch] of Object.entries(updates)) {
//!   frames[name] = { ...frames[name], ...patch };
//! }
//! ```

use wasm_bindgen::prelude::*;

mod arrange;
mod geometry;
mod group;
mod log;
mod types;

// Re-export public bindings
pub use arrange::{
    align_to_page, align_to_selection, apply_stack_order, bring_forward, bring_to_front,
    distribute, send_backward, send_to_back,
};
pub use geometry::{
    apply_frame_constraints, apply_numeric_transform, bboxes_intersect, clamp_bbox,
    constrain_to_canvas, contains_point, expand_bbox, fill_min_size, fit_to_max_size,
    get_aspect_ratio, get_bbox_center, get_bbox_corners, get_rotated_bbox, get_union_bbox,
    has_same_aspect_ratio, lock_aspect_ratio, normalize_rotation, round_frame, round_to,
    snap_frame_to_grid, snap_to_grid,
};
pub use group::{move_group, resize_group, rotate_group, scale_group, transform_group};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    log::debug(&format!("slotkit-wasm {} ready", version()));
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
