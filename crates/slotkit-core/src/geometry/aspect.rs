//! Ratio-preserving resize helpers.
//!
//! Position and rotation are never touched here; only width and height scale.

use crate::{Frame, MIN_DIMENSION};

/// Tolerance used by [`has_same_aspect_ratio`].
pub const DEFAULT_RATIO_TOLERANCE: f64 = 0.01;

/// Width over height. A zero height yields 1.
#[inline]
pub fn get_aspect_ratio(frame: &Frame) -> f64 {
    if frame.height == 0.0 {
        return 1.0;
    }
    frame.width / frame.height
}

/// Resize a frame while keeping its aspect ratio.
///
/// * Only `new_width` given: height is derived from it.
/// * Only `new_height` given: width is derived from it.
/// * Both given: width wins and the passed height is ignored.
/// * Neither given: the frame is returned unchanged.
///
/// Both dimensions are floored at [`MIN_DIMENSION`].
///
/// # Example
///
/// ```
/// use slotkit_core::Frame;
/// use slotkit_core::geometry::lock_aspect_ratio;
///
/// let frame = Frame::new(0.0, 0.0, 200.0, 100.0);
/// let resized = lock_aspect_ratio(&frame, Some(300.0), Some(200.0));
/// assert_eq!((resized.width, resized.height), (300.0, 150.0));
/// ```
pub fn lock_aspect_ratio(frame: &Frame, new_width: Option<f64>, new_height: Option<f64>) -> Frame {
    let ratio = get_aspect_ratio(frame);
    let (width, height) = match (new_width, new_height) {
        (Some(width), _) => (width, width / ratio),
        (None, Some(height)) => (height * ratio, height),
        (None, None) => return *frame,
    };

    Frame {
        width: width.max(MIN_DIMENSION),
        height: height.max(MIN_DIMENSION),
        ..*frame
    }
}

/// Scale a frame down uniformly until it fits in `max_width` x `max_height`.
///
/// Frames that already fit are returned unchanged.
pub fn fit_to_max_size(frame: &Frame, max_width: f64, max_height: f64) -> Frame {
    if frame.width <= max_width && frame.height <= max_height {
        return *frame;
    }
    let scale = (max_width / frame.width).min(max_height / frame.height);
    scaled(frame, scale)
}

/// Scale a frame up uniformly until it covers `min_width` x `min_height`.
///
/// Frames that already meet both minimums are returned unchanged.
pub fn fill_min_size(frame: &Frame, min_width: f64, min_height: f64) -> Frame {
    if frame.width >= min_width && frame.height >= min_height {
        return *frame;
    }
    let scale = (min_width / frame.width).max(min_height / frame.height);
    scaled(frame, scale)
}

/// Compare aspect ratios using [`DEFAULT_RATIO_TOLERANCE`].
#[inline]
pub fn has_same_aspect_ratio(a: &Frame, b: &Frame) -> bool {
    has_same_aspect_ratio_within(a, b, DEFAULT_RATIO_TOLERANCE)
}

/// Compare aspect ratios: `|ratio(a) - ratio(b)| < tolerance`.
#[inline]
pub fn has_same_aspect_ratio_within(a: &Frame, b: &Frame, tolerance: f64) -> bool {
    (get_aspect_ratio(a) - get_aspect_ratio(b)).abs() < tolerance
}

fn scaled(frame: &Frame, scale: f64) -> Frame {
    Frame {
        width: frame.width * scale,
        height: frame.height * scale,
        ..*frame
    }
}
