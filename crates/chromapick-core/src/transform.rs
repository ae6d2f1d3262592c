//! Display-space to buffer-space coordinate mapping.
//!
//! Display space and buffer space both have their origin top-left, x growing
//! right and y growing down. A rotated orientation class means the display
//! frame's axes are swapped relative to the buffer, and these are the two
//! rigid 90-degree inverse-rotation formulas for that situation. Sign and
//! axis choice matter: a transposed formula silently samples the wrong pixel.

use serde::{Deserialize, Serialize};

use crate::orientation::{DisplayFrame, OrientationClass};

/// A clicked point in display space. Signed so that out-of-range input
/// arrives intact and fails validation instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickPoint {
    pub x: i32,
    pub y: i32,
}

impl ClickPoint {
    pub fn new(x: i32, y: i32) -> Self {
        ClickPoint { x, y }
    }
}

/// A validated point in the buffer's native coordinate frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferPoint {
    pub x: u32,
    pub y: u32,
}

/// Map a display-space click to buffer-space coordinates.
///
/// Returns raw `i64` coordinates rather than a [`BufferPoint`]: the result
/// still has to pass the buffer-space bounds check, which also catches any
/// negative value produced by inconsistent metadata.
pub fn map_to_buffer(
    click: ClickPoint,
    frame: DisplayFrame,
    class: OrientationClass,
) -> (i64, i64) {
    let x = i64::from(click.x);
    let y = i64::from(click.y);
    let dw = i64::from(frame.width);
    let dh = i64::from(frame.height);

    match class {
        OrientationClass::Normal => (x, y),
        OrientationClass::Rotate90Cw => (dh - 1 - y, x),
        OrientationClass::Rotate90Ccw => (y, dw - 1 - x),
    }
}

/// Map a buffer-space point back to the display frame. Exact inverse of
/// [`map_to_buffer`] for in-bounds points.
pub fn map_to_display(
    point: BufferPoint,
    frame: DisplayFrame,
    class: OrientationClass,
) -> ClickPoint {
    let bx = point.x as i64;
    let by = point.y as i64;
    let dw = i64::from(frame.width);
    let dh = i64::from(frame.height);

    let (x, y) = match class {
        OrientationClass::Normal => (bx, by),
        OrientationClass::Rotate90Cw => (by, dh - 1 - bx),
        OrientationClass::Rotate90Ccw => (dw - 1 - by, bx),
    };

    ClickPoint {
        x: x as i32,
        y: y as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normal_is_identity() {
        let frame = DisplayFrame::for_buffer(100, 200, OrientationClass::Normal);
        assert_eq!(
            map_to_buffer(ClickPoint::new(17, 42), frame, OrientationClass::Normal),
            (17, 42)
        );
    }

    #[test]
    fn test_rotate_cw_formula() {
        // 100x200 buffer displayed as 200x100; click (10, 5) must land on
        // buffer (100 - 1 - 5, 10) = (94, 10)
        let frame = DisplayFrame::for_buffer(100, 200, OrientationClass::Rotate90Cw);
        assert_eq!((frame.width, frame.height), (200, 100));
        assert_eq!(
            map_to_buffer(ClickPoint::new(10, 5), frame, OrientationClass::Rotate90Cw),
            (94, 10)
        );
    }

    #[test]
    fn test_rotate_ccw_formula() {
        let frame = DisplayFrame::for_buffer(100, 200, OrientationClass::Rotate90Ccw);
        assert_eq!(
            map_to_buffer(ClickPoint::new(10, 5), frame, OrientationClass::Rotate90Ccw),
            (5, 200 - 1 - 10)
        );
    }

    #[test]
    fn test_corners_stay_in_buffer() {
        let (bw, bh) = (100u32, 200u32);
        for class in [OrientationClass::Rotate90Cw, OrientationClass::Rotate90Ccw] {
            let frame = DisplayFrame::for_buffer(bw, bh, class);
            let corners = [
                ClickPoint::new(0, 0),
                ClickPoint::new(frame.width as i32 - 1, 0),
                ClickPoint::new(0, frame.height as i32 - 1),
                ClickPoint::new(frame.width as i32 - 1, frame.height as i32 - 1),
            ];
            for corner in corners {
                let (bx, by) = map_to_buffer(corner, frame, class);
                assert!(bx >= 0 && (bx as u32) < bw, "{:?} -> ({}, {})", corner, bx, by);
                assert!(by >= 0 && (by as u32) < bh, "{:?} -> ({}, {})", corner, bx, by);
            }
        }
    }

    proptest! {
        /// Round-trip law: display -> buffer -> display is the identity for
        /// every in-bounds point and every orientation class.
        #[test]
        fn prop_roundtrip_is_identity(
            bw in 1u32..512,
            bh in 1u32..512,
            fx in 0.0f64..1.0,
            fy in 0.0f64..1.0,
            class_idx in 0usize..3,
        ) {
            let class = [
                OrientationClass::Normal,
                OrientationClass::Rotate90Cw,
                OrientationClass::Rotate90Ccw,
            ][class_idx];
            let frame = DisplayFrame::for_buffer(bw, bh, class);
            let click = ClickPoint::new(
                (fx * frame.width as f64) as i32,
                (fy * frame.height as f64) as i32,
            );

            let (bx, by) = map_to_buffer(click, frame, class);
            prop_assert!(bx >= 0 && (bx as u32) < bw);
            prop_assert!(by >= 0 && (by as u32) < bh);

            let back = map_to_display(
                BufferPoint { x: bx as u32, y: by as u32 },
                frame,
                class,
            );
            prop_assert_eq!(back, click);
        }
    }
}
