//! Single-frame geometry: bounding boxes, aspect ratio and numeric transforms.
//!
//! # Rotation
//!
//! Frames rotate clockwise about their own center. A corner offset `(dx, dy)`
//! from the center maps to:
//!
//! ```text
//! x' = cx + dx * cos(θ) - dy * sin(θ)
//! y' = cy + dx * sin(θ) + dy * cos(θ)
//! ```
//!
//! With y growing downwards this matrix turns visually clockwise.

mod aspect;
mod bbox;
mod constraints;
mod numeric;

pub use aspect::{
    fill_min_size, fit_to_max_size, get_aspect_ratio, has_same_aspect_ratio,
    has_same_aspect_ratio_within, lock_aspect_ratio, DEFAULT_RATIO_TOLERANCE,
};
pub use bbox::{
    bboxes_intersect, clamp_bbox, contains_point, expand_bbox, get_bbox_center, get_bbox_corners,
    get_rotated_bbox, get_union_bbox, rotate_point,
};
pub use constraints::FrameConstraints;
pub use numeric::{
    apply_numeric_transform, clamp, constrain_to_canvas, normalize_rotation, round_frame,
    round_to, snap_frame_to_grid, snap_to_grid, NumericTransform,
};
