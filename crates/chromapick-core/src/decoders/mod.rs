//! Image decoding boundary.
//!
//! Decoding itself is delegated to the `image` codec crate; this module only
//! normalizes the result into a [`DecodedImage`] the sampling pipeline can
//! consume, and pulls the EXIF orientation code out of the original bytes.

mod metadata;


use std::fs;
use std::path::Path;

use image::DynamicImage;
use serde::Serialize;

use crate::error::SampleError;

/// File extensions accepted for upload/decoding.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// Channel layout of a decoded pixel buffer.
///
/// Higher bit depths are narrowed to 8-bit at decode time while the channel
/// structure is preserved; palette formats are resolved to direct color by
/// the codec before we ever see them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChannelLayout {
    /// Single luminance channel.
    Gray8,

    /// Luminance plus alpha.
    GrayAlpha8,

    /// Interleaved red/green/blue.
    Rgb8,

    /// Interleaved red/green/blue/alpha.
    Rgba8,
}

impl ChannelLayout {
    /// Samples per pixel.
    pub fn channels(self) -> usize {
        match self {
            ChannelLayout::Gray8 => 1,
            ChannelLayout::GrayAlpha8 => 2,
            ChannelLayout::Rgb8 => 3,
            ChannelLayout::Rgba8 => 4,
        }
    }
}

/// A decoded pixel buffer with its native dimensions and any orientation
/// metadata carried by the source bytes.
///
/// Produced once per sampling request and read-only afterwards; nothing in
/// the pipeline caches it across requests.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Native buffer width in pixels, before any orientation correction.
    pub width: u32,

    /// Native buffer height in pixels.
    pub height: u32,

    /// Interleaved samples, `width * height * layout.channels()` bytes.
    pub data: Vec<u8>,

    /// Channel layout of `data`.
    pub layout: ChannelLayout,

    /// Raw EXIF orientation code (tag 0x0112), if the source carried one.
    pub orientation_code: Option<u32>,
}

/// Decode image bytes into a pixel buffer, capturing the EXIF orientation
/// code from the same bytes. Decode failure is not retried.
pub fn decode_bytes(bytes: &[u8]) -> Result<DecodedImage, SampleError> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| SampleError::DecodeFailed(e.to_string()))?;
    let orientation_code = metadata::read_orientation(bytes);
    Ok(from_dynamic(img, orientation_code))
}

/// Decode an image from a file path.
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<DecodedImage, SampleError> {
    let bytes = fs::read(path.as_ref()).map_err(|e| SampleError::DecodeFailed(e.to_string()))?;
    decode_bytes(&bytes)
}

/// Check whether a filename carries a supported image extension.
pub fn is_supported_extension(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Flatten a `DynamicImage` into our layout-tagged byte buffer, narrowing
/// 16-bit and float sources to 8-bit but keeping their channel structure.
fn from_dynamic(img: DynamicImage, orientation_code: Option<u32>) -> DecodedImage {
    use image::ColorType;

    let width = img.width();
    let height = img.height();

    let layout = match img.color() {
        ColorType::L8 | ColorType::L16 => ChannelLayout::Gray8,
        ColorType::La8 | ColorType::La16 => ChannelLayout::GrayAlpha8,
        ColorType::Rgb8 | ColorType::Rgb16 | ColorType::Rgb32F => ChannelLayout::Rgb8,
        _ => ChannelLayout::Rgba8,
    };

    let data = match layout {
        ChannelLayout::Gray8 => img.into_luma8().into_raw(),
        ChannelLayout::GrayAlpha8 => img.into_luma_alpha8().into_raw(),
        ChannelLayout::Rgb8 => img.into_rgb8().into_raw(),
        ChannelLayout::Rgba8 => img.into_rgba8().into_raw(),
    };

    DecodedImage {
        width,
        height,
        data,
        layout,
        orientation_code,
    }
}
