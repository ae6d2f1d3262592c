//! Single-pixel sampling with channel-layout normalization.

use log::warn;

use crate::color::Rgb;
use crate::decoders::{ChannelLayout, DecodedImage};
use crate::error::SampleError;
use crate::transform::BufferPoint;

/// Read one pixel at validated buffer-space coordinates, normalized to a
/// 3-channel color: grayscale expands to equal channels, alpha is dropped.
///
/// Fails only when the buffer is empty or shorter than its declared
/// dimensions imply, which the bounds checks should have made impossible.
pub fn sample_pixel(image: &DecodedImage, point: BufferPoint) -> Result<Rgb, SampleError> {
    let channels = image.layout.channels();
    let offset = (point.y as usize * image.width as usize + point.x as usize) * channels;

    let pixel = match image.data.get(offset..offset + channels) {
        Some(pixel) => pixel,
        None => {
            warn!(
                "pixel buffer truncated: {} bytes, wanted offset {} ({}x{} {:?})",
                image.data.len(),
                offset,
                image.width,
                image.height,
                image.layout
            );
            return Err(SampleError::PixelRead { offset });
        }
    };

    Ok(match image.layout {
        ChannelLayout::Gray8 | ChannelLayout::GrayAlpha8 => Rgb::new(pixel[0], pixel[0], pixel[0]),
        ChannelLayout::Rgb8 | ChannelLayout::Rgba8 => Rgb::new(pixel[0], pixel[1], pixel[2]),
    })
}
