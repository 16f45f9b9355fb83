//! Align selected elements to the page or to a reference element.

use std::collections::BTreeMap;

use super::types::AlignMode;
use crate::context::{unlocked_frames, TransformContext};
use crate::geometry::get_rotated_bbox;
use crate::{BBox, FramePatch};

/// Align each unlocked element to the canvas bounds.
///
/// Returns an `x`-only or `y`-only patch per element depending on `mode`.
pub fn align_to_page<S: AsRef<str>>(
    names: &[S],
    mode: AlignMode,
    ctx: &TransformContext,
) -> BTreeMap<String, FramePatch> {
    unlocked_frames(names, ctx)
        .into_iter()
        .map(|(name, frame)| {
            let bbox = get_rotated_bbox(frame);
            (name.to_string(), aligned_patch(&bbox, &ctx.canvas_bounds, mode))
        })
        .collect()
}

/// Align elements to the first unlocked element of the selection.
///
/// The reference element is never updated. Fewer than two unlocked elements
/// produce no updates.
pub fn align_to_selection<S: AsRef<str>>(
    names: &[S],
    mode: AlignMode,
    ctx: &TransformContext,
) -> BTreeMap<String, FramePatch> {
    let members = unlocked_frames(names, ctx);
    let [(_, reference), rest @ ..] = members.as_slice() else {
        return BTreeMap::new();
    };
    if rest.is_empty() {
        return BTreeMap::new();
    }

    let target = get_rotated_bbox(reference);
    rest.iter()
        .map(|(name, frame)| {
            let bbox = get_rotated_bbox(frame);
            (name.to_string(), aligned_patch(&bbox, &target, mode))
        })
        .collect()
}

/// Compute where an element measured by `bbox` lands inside `container`.
fn aligned_patch(bbox: &BBox, container: &BBox, mode: AlignMode) -> FramePatch {
    match mode {
        AlignMode::Left => FramePatch::x(container.x),
        AlignMode::Center => FramePatch::x(container.x + (container.width - bbox.width) / 2.0),
        AlignMode::Right => FramePatch::x(container.x + container.width - bbox.width),
        AlignMode::Top => FramePatch::y(container.y),
        AlignMode::Middle => FramePatch::y(container.y + (container.height - bbox.height) / 2.0),
        AlignMode::Bottom => FramePatch::y(container.y + container.height - bbox.height),
    }
}
