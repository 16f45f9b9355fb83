//! Axis-aligned bounding box primitives.
//!
//! The rotated bounding box of a frame is the axis-aligned envelope of its
//! four corners after rotation. Union boxes are built from each member's
//! rotated box independently, so a rotated group is not tightly enclosed.

use crate::{BBox, Frame, Point};

/// Rotate `point` clockwise around `center` by `angle_degrees`.
#[inline]
pub fn rotate_point(point: Point, center: Point, angle_degrees: f64) -> Point {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    Point {
        x: center.x + dx * cos - dy * sin,
        y: center.y + dx * sin + dy * cos,
    }
}

/// Compute the axis-aligned bounding box of a rotated frame.
///
/// Rotations of exactly 0, 360 and -360 degrees pass the frame through
/// unchanged. Any other angle rotates the four corners around the frame
/// center and returns their min/max envelope.
///
/// # Example
///
/// ```
/// use slotkit_core::{Frame, get_rotated_bbox};
///
/// let bbox = get_rotated_bbox(&Frame::new(0.0, 0.0, 100.0, 50.0).with_rotation(90.0));
/// assert!((bbox.width - 50.0).abs() < 1e-9);
/// assert!((bbox.height - 100.0).abs() < 1e-9);
/// ```
pub fn get_rotated_bbox(frame: &Frame) -> BBox {
    let rotation = frame.rotation_degrees();
    if rotation == 0.0 || rotation == 360.0 || rotation == -360.0 {
        return frame.to_bbox();
    }

    let center = frame.center();
    let corners = get_bbox_corners(&frame.to_bbox()).map(|c| rotate_point(c, center, rotation));

    envelope(&corners)
}

/// Union of the rotated bounding boxes of `frames`.
///
/// Returns an all-zero box for an empty slice.
pub fn get_union_bbox<'a, I>(frames: I) -> BBox
where
    I: IntoIterator<Item = &'a Frame>,
{
    let mut boxes = frames.into_iter().map(get_rotated_bbox).peekable();
    let Some(first) = boxes.next() else {
        return BBox::default();
    };
    if boxes.peek().is_none() {
        return first;
    }

    let (mut min_x, mut min_y) = (first.x, first.y);
    let (mut max_x, mut max_y) = (first.right(), first.bottom());
    for bbox in boxes {
        min_x = min_x.min(bbox.x);
        min_y = min_y.min(bbox.y);
        max_x = max_x.max(bbox.right());
        max_y = max_y.max(bbox.bottom());
    }

    BBox::new(min_x, min_y, max_x - min_x, max_y - min_y)
}

/// Check whether `point` lies inside `bbox`, edges included.
#[inline]
pub fn contains_point(bbox: &BBox, point: Point) -> bool {
    point.x >= bbox.x && point.x <= bbox.right() && point.y >= bbox.y && point.y <= bbox.bottom()
}

/// Corners in clockwise order starting at the top-left.
pub fn get_bbox_corners(bbox: &BBox) -> [Point; 4] {
    [
        Point::new(bbox.x, bbox.y),
        Point::new(bbox.right(), bbox.y),
        Point::new(bbox.right(), bbox.bottom()),
        Point::new(bbox.x, bbox.bottom()),
    ]
}

/// Check whether two boxes overlap. Touching edges count as intersecting.
#[inline]
pub fn bboxes_intersect(a: &BBox, b: &BBox) -> bool {
    a.x <= b.right() && a.right() >= b.x && a.y <= b.bottom() && a.bottom() >= b.y
}

#[inline]
pub fn get_bbox_center(bbox: &BBox) -> Point {
    Point::new(bbox.x + bbox.width / 2.0, bbox.y + bbox.height / 2.0)
}

/// Grow a box by `padding` on every side. Negative padding shrinks it, with no floor.
pub fn expand_bbox(bbox: &BBox, padding: f64) -> BBox {
    BBox::new(
        bbox.x - padding,
        bbox.y - padding,
        bbox.width + padding * 2.0,
        bbox.height + padding * 2.0,
    )
}

/// Move `bbox` inside `container`, capping its size to the container's.
pub fn clamp_bbox(bbox: &BBox, container: &BBox) -> BBox {
    let width = bbox.width.min(container.width);
    let height = bbox.height.min(container.height);
    BBox {
        x: bbox.x.max(container.x).min(container.right() - width),
        y: bbox.y.max(container.y).min(container.bottom() - height),
        width,
        height,
    }
}

fn envelope(points: &[Point]) -> BBox {
    let min_x = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let max_x = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
    BBox::new(min_x, min_y, max_x - min_x, max_y - min_y)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_bbox_eq(actual: BBox, expected: BBox) {
        assert!(
            (actual.x - expected.x).abs() < EPS
                && (actual.y - expected.y).abs() < EPS
                && (actual.width - expected.width).abs() < EPS
                && (actual.height - expected.height).abs() < EPS,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_unrotated_bbox_is_identity() {
        let frame = Frame::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(get_rotated_bbox(&frame), BBox::new(10.0, 20.0, 100.0, 50.0));
    }

    #[test]
    fn test_full_turn_is_identity() {
        for angle in [0.0, 360.0, -360.0] {
            let frame = Frame::new(10.0, 20.0, 100.0, 50.0).with_rotation(angle);
            assert_eq!(get_rotated_bbox(&frame), BBox::new(10.0, 20.0, 100.0, 50.0));
        }
    }

    #[test]
    fn test_square_at_45_degrees() {
        let frame = Frame::new(0.0, 0.0, 100.0, 100.0).with_rotation(45.0);
        let bbox = get_rotated_bbox(&frame);
        let diagonal = 100.0 * 2f64.sqrt();

        assert!((bbox.width - diagonal).abs() < 1e-6, "width was {}", bbox.width);
        assert!((bbox.height - diagonal).abs() < 1e-6, "height was {}", bbox.height);
        // Rotation keeps the center fixed
        let center = get_bbox_center(&bbox);
        assert!((center.x - 50.0).abs() < 1e-6);
        assert!((center.y - 50.0).abs() < 1e-6);
    }

    #[test]
    fn test_90_degrees_swaps_dimensions_around_center() {
        let frame = Frame::new(0.0, 0.0, 100.0, 50.0).with_rotation(90.0);
        assert_bbox_eq(get_rotated_bbox(&frame), BBox::new(25.0, -25.0, 50.0, 100.0));
    }

    #[test]
    fn test_opposite_rotations_same_envelope() {
        let a = get_rotated_bbox(&Frame::new(0.0, 0.0, 100.0, 40.0).with_rotation(30.0));
        let b = get_rotated_bbox(&Frame::new(0.0, 0.0, 100.0, 40.0).with_rotation(-30.0));
        assert_bbox_eq(a, b);
    }

    #[test]
    fn test_rotate_point_clockwise() {
        // In screen space (y down) a quarter turn clockwise sends +x to +y
        let p = rotate_point(Point::new(10.0, 0.0), Point::new(0.0, 0.0), 90.0);
        assert!(p.x.abs() < EPS);
        assert!((p.y - 10.0).abs() < EPS);
    }

    #[test]
    fn test_union_empty() {
        let frames: Vec<Frame> = Vec::new();
        assert_eq!(get_union_bbox(&frames), BBox::new(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_union_single_matches_rotated_bbox() {
        let frame = Frame::new(5.0, 5.0, 40.0, 20.0).with_rotation(33.0);
        assert_eq!(get_union_bbox([&frame]), get_rotated_bbox(&frame));
    }

    #[test]
    fn test_union_multiple() {
        let frames = [
            Frame::new(0.0, 0.0, 10.0, 10.0),
            Frame::new(50.0, 20.0, 10.0, 30.0),
            Frame::new(-5.0, 10.0, 1.0, 1.0),
        ];
        assert_eq!(get_union_bbox(&frames), BBox::new(-5.0, 0.0, 65.0, 50.0));
    }

    #[test]
    fn test_union_uses_each_rotated_bbox() {
        let frames = [
            Frame::new(0.0, 0.0, 100.0, 50.0).with_rotation(90.0),
            Frame::new(200.0, 0.0, 10.0, 10.0),
        ];
        // First frame's rotated box is (25, -25, 50, 100)
        assert_bbox_eq(get_union_bbox(&frames), BBox::new(25.0, -25.0, 185.0, 100.0));
    }

    #[test]
    fn test_contains_point_inclusive_edges() {
        let bbox = BBox::new(0.0, 0.0, 100.0, 100.0);
        assert!(contains_point(&bbox, Point::new(0.0, 0.0)));
        assert!(contains_point(&bbox, Point::new(100.0, 100.0)));
        assert!(contains_point(&bbox, Point::new(50.0, 100.0)));
        assert!(!contains_point(&bbox, Point::new(100.1, 50.0)));
        assert!(!contains_point(&bbox, Point::new(50.0, -0.1)));
    }

    #[test]
    fn test_corners_clockwise_from_top_left() {
        let corners = get_bbox_corners(&BBox::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(
            corners,
            [
                Point::new(1.0, 2.0),
                Point::new(4.0, 2.0),
                Point::new(4.0, 6.0),
                Point::new(1.0, 6.0),
            ]
        );
    }

    #[test]
    fn test_degenerate_corners_identical() {
        let corners = get_bbox_corners(&BBox::new(7.0, 7.0, 0.0, 0.0));
        assert!(corners.iter().all(|c| *c == Point::new(7.0, 7.0)));
    }

    #[test]
    fn test_touching_boxes_intersect() {
        let a = BBox::new(0.0, 0.0, 100.0, 100.0);
        let b = BBox::new(100.0, 0.0, 100.0, 100.0);
        assert!(bboxes_intersect(&a, &b));
        assert!(bboxes_intersect(&b, &a));
    }

    #[test]
    fn test_separate_boxes_do_not_intersect() {
        let a = BBox::new(0.0, 0.0, 100.0, 100.0);
        let b = BBox::new(100.5, 0.0, 100.0, 100.0);
        let c = BBox::new(0.0, 101.0, 10.0, 10.0);
        assert!(!bboxes_intersect(&a, &b));
        assert!(!bboxes_intersect(&a, &c));
    }

    #[test]
    fn test_contained_box_intersects() {
        let outer = BBox::new(0.0, 0.0, 100.0, 100.0);
        let inner = BBox::new(10.0, 10.0, 5.0, 5.0);
        assert!(bboxes_intersect(&outer, &inner));
    }

    #[test]
    fn test_center() {
        assert_eq!(
            get_bbox_center(&BBox::new(10.0, 20.0, 30.0, 40.0)),
            Point::new(25.0, 40.0)
        );
    }

    #[test]
    fn test_expand_and_shrink() {
        let bbox = BBox::new(10.0, 10.0, 20.0, 20.0);
        assert_eq!(expand_bbox(&bbox, 5.0), BBox::new(5.0, 5.0, 30.0, 30.0));
        assert_eq!(expand_bbox(&bbox, -5.0), BBox::new(15.0, 15.0, 10.0, 10.0));
        // No floor: over-shrinking goes negative
        assert_eq!(expand_bbox(&bbox, -15.0).width, -10.0);
    }

    #[test]
    fn test_clamp_moves_inside() {
        let container = BBox::new(0.0, 0.0, 100.0, 100.0);
        let clamped = clamp_bbox(&BBox::new(90.0, -10.0, 20.0, 20.0), &container);
        assert_eq!(clamped, BBox::new(80.0, 0.0, 20.0, 20.0));
    }

    #[test]
    fn test_clamp_caps_size_never_grows() {
        let container = BBox::new(0.0, 0.0, 100.0, 50.0);
        let clamped = clamp_bbox(&BBox::new(-20.0, 10.0, 300.0, 10.0), &container);
        assert_eq!(clamped, BBox::new(0.0, 10.0, 100.0, 10.0));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
