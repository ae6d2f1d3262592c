//! Bounds validation for clicked and transformed points.
//!
//! Two independent checks, always run in order: the display-space check on
//! the raw click, then the buffer-space check on the transformed point. A
//! correct transform makes the second check unreachable whenever the first
//! passes, but it stays in place as an invariant guard against orientation
//! metadata that disagrees with the buffer dimensions.

use crate::error::SampleError;
use crate::orientation::DisplayFrame;
use crate::transform::{BufferPoint, ClickPoint};

/// Reject clicks outside the display frame.
pub fn check_display(click: ClickPoint, frame: DisplayFrame) -> Result<(), SampleError> {
    let in_x = click.x >= 0 && (click.x as u32) < frame.width;
    let in_y = click.y >= 0 && (click.y as u32) < frame.height;
    if in_x && in_y {
        Ok(())
    } else {
        Err(SampleError::OutOfDisplayBounds {
            x: click.x,
            y: click.y,
            width: frame.width,
            height: frame.height,
        })
    }
}

/// Reject transformed points outside the native buffer; on success the point
/// is promoted to a validated [`BufferPoint`].
pub fn check_buffer(
    x: i64,
    y: i64,
    buffer_width: u32,
    buffer_height: u32,
) -> Result<BufferPoint, SampleError> {
    let in_x = x >= 0 && (x as u64) < u64::from(buffer_width);
    let in_y = y >= 0 && (y as u64) < u64::from(buffer_height);
    if in_x && in_y {
        Ok(BufferPoint {
            x: x as u32,
            y: y as u32,
        })
    } else {
        Err(SampleError::OutOfBufferBounds {
            x,
            y,
            width: buffer_width,
            height: buffer_height,
        })
    }
}
