//! Stacking-order nudges.
//!
//! `z` values are never re-indexed. Each command moves one slot relative to
//! its neighbours, which may leave ties with other slots. A command that has
//! nothing to do (locked slot, unknown name, already at the extreme) returns
//! the input slots borrowed, so callers can detect the no-op cheaply.

use std::borrow::Cow;

use super::types::StackOrder;
use crate::context::{Slot, TransformContext};

/// Move a slot above every other slot: `z = max(z) + 1`.
pub fn bring_to_front<'a>(name: &str, ctx: &'a TransformContext) -> Cow<'a, [Slot]> {
    let Some(slot) = movable(name, ctx) else {
        return Cow::Borrowed(&ctx.slots);
    };
    match ctx.slots.iter().map(|s| s.z).max() {
        Some(top) if slot.z < top => with_z(&ctx.slots, name, top + 1),
        _ => Cow::Borrowed(&ctx.slots),
    }
}

/// Move a slot below every other slot: `z = min(z) - 1`.
pub fn send_to_back<'a>(name: &str, ctx: &'a TransformContext) -> Cow<'a, [Slot]> {
    let Some(slot) = movable(name, ctx) else {
        return Cow::Borrowed(&ctx.slots);
    };
    match ctx.slots.iter().map(|s| s.z).min() {
        Some(bottom) if slot.z > bottom => with_z(&ctx.slots, name, bottom - 1),
        _ => Cow::Borrowed(&ctx.slots),
    }
}

/// Move a slot just above the nearest `z` strictly above it.
pub fn bring_forward<'a>(name: &str, ctx: &'a TransformContext) -> Cow<'a, [Slot]> {
    let Some(slot) = movable(name, ctx) else {
        return Cow::Borrowed(&ctx.slots);
    };
    let above = ctx.slots.iter().map(|s| s.z).filter(|&z| z > slot.z).min();
    match above {
        Some(neighbor) => with_z(&ctx.slots, name, neighbor + 1),
        None => Cow::Borrowed(&ctx.slots),
    }
}

/// Move a slot just below the nearest `z` strictly below it.
pub fn send_backward<'a>(name: &str, ctx: &'a TransformContext) -> Cow<'a, [Slot]> {
    let Some(slot) = movable(name, ctx) else {
        return Cow::Borrowed(&ctx.slots);
    };
    let below = ctx.slots.iter().map(|s| s.z).filter(|&z| z < slot.z).max();
    match below {
        Some(neighbor) => with_z(&ctx.slots, name, neighbor - 1),
        None => Cow::Borrowed(&ctx.slots),
    }
}

/// Dispatch a toolbar stacking command.
pub fn arrange_stack<'a>(order: StackOrder, name: &str, ctx: &'a TransformContext) -> Cow<'a, [Slot]> {
    match order {
        StackOrder::BringToFront => bring_to_front(name, ctx),
        StackOrder::BringForward => bring_forward(name, ctx),
        StackOrder::SendBackward => send_backward(name, ctx),
        StackOrder::SendToBack => send_to_back(name, ctx),
    }
}

fn movable<'a>(name: &str, ctx: &'a TransformContext) -> Option<&'a Slot> {
    ctx.slot(name).filter(|slot| !slot.locked)
}

fn with_z<'a>(slots: &[Slot], name: &str, z: i64) -> Cow<'a, [Slot]> {
    let updated = slots
        .iter()
        .map(|slot| {
            if slot.name == name {
                Slot {
                    z,
                    ..slot.clone()
                }
            } else {
                slot.clone()
            }
        })
        .collect::<Vec<_>>();
    Cow::Owned(updated)
}
