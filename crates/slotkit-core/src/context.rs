//! Snapshot of a page handed to the arrange and group operations.
//!
//! A [`TransformContext`] is never mutated by this crate. Operations return
//! replacement frames or [`FramePatch`]es keyed by slot name, and the caller
//! commits them in a single state transition with [`apply_patches`] or
//! [`apply_frames`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{BBox, Frame, FramePatch};

/// A named, z-ordered, lockable design element.
///
/// Element-specific fields (text, image source, ...) are not modelled here;
/// unknown fields are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub name: String,
    /// Stacking order. Not required to be contiguous or unique.
    pub z: i64,
    #[serde(default)]
    pub locked: bool,
}

impl Slot {
    pub fn new(name: impl Into<String>, z: i64) -> Self {
        Self {
            name: name.into(),
            z,
            locked: false,
        }
    }

    /// Builder-style lock flag.
    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }
}

/// All slots and frames of one page at one canvas ratio.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformContext {
    pub slots: Vec<Slot>,
    /// Keyed 1:1 by slot name.
    pub frames: BTreeMap<String, Frame>,
    pub canvas_bounds: BBox,
}

impl TransformContext {
    pub fn new(slots: Vec<Slot>, frames: BTreeMap<String, Frame>, canvas_bounds: BBox) -> Self {
        Self {
            slots,
            frames,
            canvas_bounds,
        }
    }

    /// Look up a slot by name.
    pub fn slot(&self, name: &str) -> Option<&Slot> {
        self.slots.iter().find(|s| s.name == name)
    }

    /// Look up a frame by slot name.
    pub fn frame(&self, name: &str) -> Option<&Frame> {
        self.frames.get(name)
    }

    /// A slot is locked only if it exists and carries the flag.
    pub fn is_locked(&self, name: &str) -> bool {
        self.slot(name).is_some_and(|s| s.locked)
    }
}

/// Filter a selection down to the members every operation may touch.
///
/// Keeps names that are not locked and have a frame, in input order.
/// A name with a frame but no slot entry counts as unlocked.
pub fn unlocked_frames<'a, S: AsRef<str>>(
    names: &'a [S],
    ctx: &'a TransformContext,
) -> Vec<(&'a str, &'a Frame)> {
    names
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| !ctx.is_locked(name))
        .filter_map(|name| ctx.frame(name).map(|frame| (name, frame)))
        .collect()
}

/// Merge partial updates into a frame map, returning the new map.
///
/// Updates for names that have no frame are ignored.
pub fn apply_patches(
    frames: &BTreeMap<String, Frame>,
    updates: &BTreeMap<String, FramePatch>,
) -> BTreeMap<String, Frame> {
    let mut merged = frames.clone();
    for (name, patch) in updates {
        if let Some(frame) = merged.get_mut(name) {
            *frame = frame.apply_patch(patch);
        }
    }
    merged
}

/// Replace whole frames in a frame map, returning the new map.
///
/// Replacements for names that have no frame are ignored.
pub fn apply_frames(
    frames: &BTreeMap<String, Frame>,
    replacements: &BTreeMap<String, Frame>,
) -> BTreeMap<String, Frame> {
    let mut merged = frames.clone();
    for (name, replacement) in replacements {
        if let Some(frame) = merged.get_mut(name) {
            *frame = *replacement;
        }
    }
    merged
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Build a context from `(name, z, locked, frame)` tuples on a 1000x1000 page.
    pub fn context(entries: &[(&str, i64, bool, Frame)]) -> TransformContext {
        let slots = entries
            .iter()
            .map(|(name, z, locked, _)| Slot {
                name: (*name).to_string(),
                z: *z,
                locked: *locked,
            })
            .collect();
        let frames = entries
            .iter()
            .map(|(name, _, _, frame)| ((*name).to_string(), *frame))
            .collect();
        TransformContext::new(slots, frames, BBox::new(0.0, 0.0, 1000.0, 1000.0))
    }

    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }
}
