//! Even spacing of three or more elements.

use std::collections::BTreeMap;

use super::types::DistributeAxis;
use crate::context::{unlocked_frames, TransformContext};
use crate::geometry::get_rotated_bbox;
use crate::{BBox, FramePatch};

/// Space element centers evenly between the outermost two.
///
/// Elements are ordered by their rotated-bbox position along `axis`. The
/// first and last never move and are absent from the result. Each middle
/// element gets `target center - current center` added to its raw `x` (or
/// `y`). Fewer than three unlocked elements produce no updates.
pub fn distribute<S: AsRef<str>>(
    names: &[S],
    axis: DistributeAxis,
    ctx: &TransformContext,
) -> BTreeMap<String, FramePatch> {
    let mut members: Vec<_> = unlocked_frames(names, ctx)
        .into_iter()
        .map(|(name, frame)| (name, frame, get_rotated_bbox(frame)))
        .collect();
    if members.len() < 3 {
        return BTreeMap::new();
    }

    members.sort_by(|(_, _, a), (_, _, b)| start(a, axis).total_cmp(&start(b, axis)));

    let last = members.len() - 1;
    let first_center = center(&members[0].2, axis);
    let step = (center(&members[last].2, axis) - first_center) / last as f64;

    members[1..last]
        .iter()
        .enumerate()
        .map(|(i, (name, frame, bbox))| {
            let target = first_center + step * (i + 1) as f64;
            let delta = target - center(bbox, axis);
            let patch = match axis {
                DistributeAxis::Horizontal => FramePatch::x(frame.x + delta),
                DistributeAxis::Vertical => FramePatch::y(frame.y + delta),
            };
            (name.to_string(), patch)
        })
        .collect()
}

#[inline]
fn start(bbox: &BBox, axis: DistributeAxis) -> f64 {
    match axis {
        DistributeAxis::Horizontal => bbox.x,
        DistributeAxis::Vertical => bbox.y,
    }
}

#[inline]
fn center(bbox: &BBox, axis: DistributeAxis) -> f64 {
    match axis {
        DistributeAxis::Horizontal => bbox.x + bbox.width / 2.0,
        DistributeAxis::Vertical => bbox.y + bbox.height / 2.0,
    }
}
