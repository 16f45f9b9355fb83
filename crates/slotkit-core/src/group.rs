//! Multi-select group transforms.
//!
//! A selection moves, scales and rotates as one unit around the union of its
//! members' rotated bounding boxes. Locked members and members without a
//! frame are left out of every result.
//!
//! # Rotation accumulation
//!
//! [`rotate_group`] sets `rotation = (old + delta) % 360` and does not pass
//! the result through [`normalize_rotation`](crate::geometry::normalize_rotation).
//! Group rotation can therefore land outside `(-180, 180]`, unlike numeric
//! edits of a single element.

use std::collections::BTreeMap;

use crate::context::{unlocked_frames, TransformContext};
use crate::geometry::{get_aspect_ratio, get_bbox_center, get_union_bbox, rotate_point};
use crate::{BBox, Frame, FramePatch, MIN_DIMENSION};

/// Translate every member by `(dx, dy)`.
pub fn move_group<S: AsRef<str>>(
    names: &[S],
    dx: f64,
    dy: f64,
    ctx: &TransformContext,
) -> BTreeMap<String, FramePatch> {
    unlocked_frames(names, ctx)
        .into_iter()
        .map(|(name, frame)| (name.to_string(), FramePatch::position(frame.x + dx, frame.y + dy)))
        .collect()
}

/// Scale the group about its bounding-box origin, then translate it.
///
/// Each member's raw `x`/`y` offset from the group origin scales by
/// `scale_x`/`scale_y`, as do its width and height. Rotation is unchanged.
pub fn transform_group<S: AsRef<str>>(
    names: &[S],
    dx: f64,
    dy: f64,
    scale_x: f64,
    scale_y: f64,
    ctx: &TransformContext,
) -> BTreeMap<String, Frame> {
    with_group_bounds(names, ctx, |frame, bounds| Frame {
        x: bounds.x + (frame.x - bounds.x) * scale_x + dx,
        y: bounds.y + (frame.y - bounds.y) * scale_y + dy,
        width: (frame.width * scale_x).max(MIN_DIMENSION),
        height: (frame.height * scale_y).max(MIN_DIMENSION),
        rotation: frame.rotation,
    })
}

/// Resize the group towards `new_width` x `new_height`.
///
/// Member positions scale non-uniformly with the group, but member sizes
/// scale uniformly by `min(scale_x, scale_y)` and keep their own aspect
/// ratio. Children never distort, at the cost of the group not always
/// filling the requested box exactly.
pub fn resize_group<S: AsRef<str>>(
    names: &[S],
    new_width: f64,
    new_height: f64,
    ctx: &TransformContext,
) -> BTreeMap<String, Frame> {
    with_group_bounds(names, ctx, |frame, bounds| {
        let scale_x = axis_scale(new_width, bounds.width);
        let scale_y = axis_scale(new_height, bounds.height);
        let width = (frame.width * member_scale(scale_x, scale_y)).max(MIN_DIMENSION);
        let height = (width / get_aspect_ratio(frame)).max(MIN_DIMENSION);
        Frame {
            x: bounds.x + (frame.x - bounds.x) * scale_x,
            y: bounds.y + (frame.y - bounds.y) * scale_y,
            width,
            height,
            rotation: frame.rotation,
        }
    })
}

/// Scale every member and its distance from the group center by `factor`.
pub fn scale_group<S: AsRef<str>>(
    names: &[S],
    factor: f64,
    ctx: &TransformContext,
) -> BTreeMap<String, Frame> {
    with_group_bounds(names, ctx, |frame, bounds| {
        let pivot = get_bbox_center(bounds);
        let center = frame.center();
        let width = (frame.width * factor).max(MIN_DIMENSION);
        let height = (frame.height * factor).max(MIN_DIMENSION);
        let cx = pivot.x + (center.x - pivot.x) * factor;
        let cy = pivot.y + (center.y - pivot.y) * factor;
        Frame {
            x: cx - width / 2.0,
            y: cy - height / 2.0,
            width,
            height,
            rotation: frame.rotation,
        }
    })
}

/// Rotate every member's center about the group center by `angle_delta` degrees.
///
/// Sizes are unchanged; each member's own rotation accumulates
/// `(old + angle_delta) % 360`.
pub fn rotate_group<S: AsRef<str>>(
    names: &[S],
    angle_delta: f64,
    ctx: &TransformContext,
) -> BTreeMap<String, Frame> {
    with_group_bounds(names, ctx, |frame, bounds| {
        let center = rotate_point(frame.center(), get_bbox_center(bounds), angle_delta);
        Frame {
            x: center.x - frame.width / 2.0,
            y: center.y - frame.height / 2.0,
            width: frame.width,
            height: frame.height,
            rotation: Some((frame.rotation_degrees() + angle_delta) % 360.0),
        }
    })
}

/// Size factor applied to each member by [`resize_group`]: the smaller of the
/// two axis scales, so no member is stretched.
#[inline]
fn member_scale(scale_x: f64, scale_y: f64) -> f64 {
    scale_x.min(scale_y)
}

// A zero-extent group cannot be scaled along that axis.
#[inline]
fn axis_scale(target: f64, current: f64) -> f64 {
    if current == 0.0 {
        1.0
    } else {
        target / current
    }
}

fn with_group_bounds<S, F>(names: &[S], ctx: &TransformContext, f: F) -> BTreeMap<String, Frame>
where
    S: AsRef<str>,
    F: Fn(&Frame, &BBox) -> Frame,
{
    let members = unlocked_frames(names, ctx);
    if members.is_empty() {
        return BTreeMap::new();
    }
    let bounds = get_union_bbox(members.iter().map(|(_, frame)| *frame));

    members
        .into_iter()
        .map(|(name, frame)| (name.to_string(), f(frame, &bounds)))
        .collect()
}
