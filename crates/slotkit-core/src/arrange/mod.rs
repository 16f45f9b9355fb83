//! Toolbar arrange commands: stacking order, alignment and distribution.
//!
//! # Raw coordinates
//!
//! Alignment and distribution measure each element by its rotated bounding
//! box but write the result into the frame's unrotated `x`/`y`. This is exact
//! for unrotated frames and an approximation for rotated ones; editors built
//! on this crate rely on that output, so it is kept as is.

mod align;
mod distribute;
mod types;
mod zorder;

pub use align::{align_to_page, align_to_selection};
pub use distribute::distribute;
pub use types::{AlignMode, DistributeAxis, ModeError, StackOrder};
pub use zorder::{arrange_stack, bring_forward, bring_to_front, send_backward, send_to_back};
