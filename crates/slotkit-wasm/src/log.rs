//! Browser console diagnostics.
//!
//! Console calls only exist on wasm32; on other targets (native unit tests)
//! these functions do nothing.

use slotkit_core::{unlocked_frames, TransformContext};

#[cfg(target_arch = "wasm32")]
pub(crate) fn debug(message: &str) {
    web_sys::console::debug_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn debug(_message: &str) {}

#[cfg(target_arch = "wasm32")]
pub(crate) fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn warn(_message: &str) {}

/// Number of selected names that an operation will leave out.
pub(crate) fn excluded_count(names: &[String], ctx: &TransformContext) -> usize {
    names.len() - unlocked_frames(names, ctx).len()
}

/// Log when part of a selection is skipped because it is locked or has no frame.
pub(crate) fn report_excluded(operation: &str, names: &[String], ctx: &TransformContext) {
    let skipped = excluded_count(names, ctx);
    if skipped > 0 {
        debug(&format!(
            "{}: skipped {} of {} selected slots (locked or without frame)",
            operation,
            skipped,
            names.len()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotkit_core::{BBox, Frame, Slot};
    use std::collections::BTreeMap;

    #[test]
    fn test_excluded_count() {
        let mut frames = BTreeMap::new();
        frames.insert("a".to_string(), Frame::new(0.0, 0.0, 1.0, 1.0));
        frames.insert("b".to_string(), Frame::new(0.0, 0.0, 1.0, 1.0));
        let ctx = TransformContext::new(
            vec![Slot::new("a", 0), Slot::new("b", 1).locked()],
            frames,
            BBox::new(0.0, 0.0, 100.0, 100.0),
        );
        let names = vec!["a".to_string(), "b".to_string(), "c".to_string()];

        assert_eq!(excluded_count(&names, &ctx), 2);
        // Native builds swallow console output
        report_excluded("test", &names, &ctx);
    }
}
