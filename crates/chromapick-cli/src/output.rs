//! Text output formatting.

use chromapick_core::models::format_file_size;
use chromapick_core::{DecodedImage, DisplayFrame, OrientationClass, SampledColor};

/// Render one sampled color as a human-readable block.
pub fn format_sample(sample: &SampledColor) -> String {
    format!(
        "({}, {})\n  rgb:         {}, {}, {}\n  hex:         {}\n  hsl:         {}, {}%, {}%\n  temperature: {}",
        sample.coordinates.x,
        sample.coordinates.y,
        sample.rgb[0],
        sample.rgb[1],
        sample.rgb[2],
        sample.hex,
        sample.hsl.h,
        sample.hsl.s,
        sample.hsl.l,
        sample.temperature.as_str()
    )
}

/// Render image metadata for the `info` command.
pub fn format_info(image: &DecodedImage, file_size: u64) -> String {
    let class = OrientationClass::resolve(image.orientation_code);
    let frame = DisplayFrame::for_buffer(image.width, image.height, class);

    let mut out = String::new();
    out.push_str(&format!("buffer:       {}x{}\n", image.width, image.height));
    out.push_str(&format!("display:      {}x{}\n", frame.width, frame.height));
    out.push_str(&format!("layout:       {:?}\n", image.layout));
    out.push_str(&format!(
        "orientation:  {:?} (exif code {})\n",
        class,
        image
            .orientation_code
            .map(|c| c.to_string())
            .unwrap_or_else(|| "absent".to_string())
    ));
    out.push_str(&format!("file size:    {}", format_file_size(file_size)));
    out
}
