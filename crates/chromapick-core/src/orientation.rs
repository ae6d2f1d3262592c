//! Orientation metadata resolution.
//!
//! EXIF tag 0x0112 encodes how a stored buffer must be turned to appear
//! upright. Only the two 90-degree rotations change the coordinate mapping
//! between display space and buffer space, so everything else collapses to
//! [`OrientationClass::Normal`].

use serde::{Deserialize, Serialize};

/// EXIF orientation code for a buffer that must be rotated 90 degrees
/// clockwise to appear upright ("Rotate 90 CW" in exiftool terms).
const EXIF_ROTATE_90_CW: u32 = 6;

/// EXIF orientation code for the counter-clockwise case ("Rotate 270 CW").
const EXIF_ROTATE_90_CCW: u32 = 8;

/// The rotation that takes a clicked display-space point back into the
/// buffer's native frame.
///
/// Codes 2-5 and 7 (mirrors and the 180-degree rotation) are deliberately
/// folded into `Normal`: samples on such images land on the wrong pixel, but
/// the mapping for them is out of scope here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OrientationClass {
    /// Buffer and display frames coincide.
    #[default]
    Normal,

    /// Display points rotate 90 degrees clockwise into buffer space; the
    /// viewer sees the buffer turned counter-clockwise (EXIF code 8).
    Rotate90Cw,

    /// Display points rotate 90 degrees counter-clockwise into buffer
    /// space; the viewer sees the buffer turned clockwise (EXIF code 6).
    Rotate90Ccw,
}

impl OrientationClass {
    /// Classify an EXIF orientation code. Absent or unrecognized codes
    /// (including the identity code 1) resolve to `Normal`; this never fails.
    ///
    /// The class is the inverse of the rotation the code prescribes: a
    /// code-6 buffer is shown rotated clockwise, so clicks on it rotate
    /// counter-clockwise on the way back to buffer space.
    pub fn resolve(code: Option<u32>) -> Self {
        match code {
            Some(EXIF_ROTATE_90_CW) => OrientationClass::Rotate90Ccw,
            Some(EXIF_ROTATE_90_CCW) => OrientationClass::Rotate90Cw,
            _ => OrientationClass::Normal,
        }
    }

    /// Whether this class swaps the width and height axes between buffer and
    /// display space.
    pub fn swaps_axes(self) -> bool {
        !matches!(self, OrientationClass::Normal)
    }
}

/// Width and height of the image as rendered to the user.
///
/// Always recomputed from the buffer's native dimensions and the orientation
/// class, never stored, so a persisted "declared" size can never drift from
/// the buffer's actual size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayFrame {
    pub width: u32,
    pub height: u32,
}

impl DisplayFrame {
    /// Derive the display frame for a buffer of the given native dimensions.
    pub fn for_buffer(buffer_width: u32, buffer_height: u32, class: OrientationClass) -> Self {
        if class.swaps_axes() {
            DisplayFrame {
                width: buffer_height,
                height: buffer_width,
            }
        } else {
            DisplayFrame {
                width: buffer_width,
                height: buffer_height,
            }
        }
    }
}
