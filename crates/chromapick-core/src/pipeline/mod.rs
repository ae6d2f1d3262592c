//! The sampling pipeline.
//!
//! Composes the stages in a fixed order: resolve orientation, derive the
//! display frame, validate the click, map it into buffer space, validate
//! again, read the pixel, convert and classify. Every stage is a pure
//! function of its inputs; nothing is retained between requests, so any
//! number of requests can run in parallel with no shared state.

#[cfg(test)]
mod tests;

use log::debug;
use serde::Serialize;

use crate::bounds;
use crate::color::{classify_temperature, rgb_to_hsl, RoundedHsl, Temperature};
use crate::decoders::{self, DecodedImage};
use crate::error::SampleError;
use crate::orientation::{DisplayFrame, OrientationClass};
use crate::sampler;
use crate::transform::{self, ClickPoint};

/// The color sampled at a clicked point, in every representation the caller
/// reports: raw RGB, hex, rounded HSL, and the temperature class derived
/// from that same rounded HSL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampledColor {
    pub rgb: [u8; 3],
    pub hex: String,
    pub hsl: RoundedHsl,
    pub temperature: Temperature,
    pub coordinates: ClickPoint,
}

/// Sample the color at a display-space click on a decoded image.
pub fn sample(image: &DecodedImage, click: ClickPoint) -> Result<SampledColor, SampleError> {
    let class = OrientationClass::resolve(image.orientation_code);
    let frame = DisplayFrame::for_buffer(image.width, image.height, class);

    bounds::check_display(click, frame)?;
    let (bx, by) = transform::map_to_buffer(click, frame, class);
    let point = bounds::check_buffer(bx, by, image.width, image.height)?;

    let rgb = sampler::sample_pixel(image, point)?;
    let hsl = rgb_to_hsl(rgb).rounded();
    let temperature = classify_temperature(hsl);

    debug!(
        "sampled ({}, {}) via {:?} -> buffer ({}, {}) = {}",
        click.x,
        click.y,
        class,
        point.x,
        point.y,
        rgb.to_hex()
    );

    Ok(SampledColor {
        rgb: [rgb.r, rgb.g, rgb.b],
        hex: rgb.to_hex(),
        hsl,
        temperature,
        coordinates: click,
    })
}

/// Decode image bytes and sample a click in one call. Orientation comes from
/// the EXIF metadata embedded in the bytes.
pub fn sample_bytes(bytes: &[u8], click: ClickPoint) -> Result<SampledColor, SampleError> {
    sample_bytes_with_orientation(bytes, None, click)
}

/// Decode and sample, letting a caller that stores orientation metadata
/// separately override whatever the bytes embed.
pub fn sample_bytes_with_orientation(
    bytes: &[u8],
    orientation_code: Option<u32>,
    click: ClickPoint,
) -> Result<SampledColor, SampleError> {
    let mut image = decoders::decode_bytes(bytes)?;
    if orientation_code.is_some() {
        image.orientation_code = orientation_code;
    }
    sample(&image, click)
}
