//! End-to-end tests for the sampling pipeline.

use super::*;
use crate::decoders::ChannelLayout;
use crate::transform::BufferPoint;

/// Build an RGB image whose pixel at (x, y) encodes its own coordinates,
/// so a sample proves exactly which buffer pixel was read.
fn coordinate_image(width: u32, height: u32, orientation_code: Option<u32>) -> DecodedImage {
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            data.push(x as u8);
            data.push(y as u8);
            data.push(0);
        }
    }
    DecodedImage {
        width,
        height,
        data,
        layout: ChannelLayout::Rgb8,
        orientation_code,
    }
}

#[test]
fn test_normal_sampling_reads_raw_pixel() {
    let image = coordinate_image(16, 8, None);
    for (x, y) in [(0, 0), (15, 0), (0, 7), (15, 7), (9, 3)] {
        let sampled = sample(&image, ClickPoint::new(x, y)).unwrap();
        assert_eq!(sampled.rgb, [x as u8, y as u8, 0]);
    }
}

#[test]
fn test_rotated_cw_end_to_end() {
    // EXIF 8 resolves to the clockwise click mapping: a 100x200 native
    // buffer displays as 200x100, and the click at display (10, 5) must
    // land on buffer (94, 10)
    let image = coordinate_image(100, 200, Some(8));
    let sampled = sample(&image, ClickPoint::new(10, 5)).unwrap();
    assert_eq!(sampled.rgb, [94, 10, 0]);
    assert_eq!(sampled.coordinates, ClickPoint::new(10, 5));
}

#[test]
fn test_rotated_ccw_end_to_end() {
    let image = coordinate_image(100, 200, Some(6));
    // (bx, by) = (y, dw - 1 - x) with dw = 200
    let sampled = sample(&image, ClickPoint::new(10, 5)).unwrap();
    assert_eq!(sampled.rgb, [5, 189, 0]);
}

#[test]
fn test_sampling_matches_physically_rotated_display() {
    // Ground truth straight from the codec's own rotation: the displayed
    // image for EXIF 6 is the buffer rotated 90 degrees clockwise (270 for
    // EXIF 8), and every click must return exactly the pixel the viewer
    // sees at that display position
    let mut buffer = image::RgbImage::new(4, 2);
    for y in 0..2 {
        for x in 0..4 {
            buffer.put_pixel(x, y, image::Rgb([x as u8, y as u8, 0]));
        }
    }

    let cases = [
        (Some(6), image::imageops::rotate90(&buffer)),
        (Some(8), image::imageops::rotate270(&buffer)),
    ];
    for (code, displayed) in cases {
        let decoded = DecodedImage {
            width: 4,
            height: 2,
            data: buffer.as_raw().clone(),
            layout: ChannelLayout::Rgb8,
            orientation_code: code,
        };
        for y in 0..displayed.height() {
            for x in 0..displayed.width() {
                let sampled = sample(&decoded, ClickPoint::new(x as i32, y as i32)).unwrap();
                assert_eq!(
                    sampled.rgb,
                    displayed.get_pixel(x, y).0,
                    "exif {:?}, display ({}, {})",
                    code,
                    x,
                    y
                );
            }
        }
    }
}

#[test]
fn test_rotated_sampling_matches_inverse_transform() {
    // For every buffer pixel, the display point it maps to must sample it
    let image = coordinate_image(8, 5, Some(6));
    let class = OrientationClass::resolve(image.orientation_code);
    let frame = DisplayFrame::for_buffer(image.width, image.height, class);

    for by in 0..image.height {
        for bx in 0..image.width {
            let click =
                transform::map_to_display(BufferPoint { x: bx, y: by }, frame, class);
            let sampled = sample(&image, click).unwrap();
            assert_eq!(sampled.rgb, [bx as u8, by as u8, 0]);
        }
    }
}

#[test]
fn test_out_of_frame_click_rejected() {
    let image = coordinate_image(16, 8, None);
    for (x, y) in [(-1, 0), (0, -1), (16, 0), (0, 8)] {
        let err = sample(&image, ClickPoint::new(x, y)).unwrap_err();
        assert_eq!(
            err,
            SampleError::OutOfDisplayBounds {
                x,
                y,
                width: 16,
                height: 8
            }
        );
    }
}

#[test]
fn test_rotated_frame_bounds_apply() {
    // 16x8 buffer rotated CW displays as 8x16: x is now bounded by 8
    let image = coordinate_image(16, 8, Some(6));
    assert!(sample(&image, ClickPoint::new(7, 15)).is_ok());
    let err = sample(&image, ClickPoint::new(15, 7)).unwrap_err();
    assert!(matches!(err, SampleError::OutOfDisplayBounds { .. }));
}

#[test]
fn test_sampled_color_fields_agree() {
    let mut image = coordinate_image(1, 1, None);
    image.data = vec![255, 0, 0];
    let sampled = sample(&image, ClickPoint::new(0, 0)).unwrap();

    assert_eq!(sampled.rgb, [255, 0, 0]);
    assert_eq!(sampled.hex, "#ff0000");
    assert_eq!(sampled.hsl, RoundedHsl { h: 0, s: 100, l: 50 });
    assert_eq!(sampled.temperature, Temperature::Warm);
}

#[test]
fn test_sample_bytes_round_trip() {
    let img = image::RgbImage::from_pixel(3, 3, image::Rgb([0, 255, 255]));
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();

    let sampled = sample_bytes(&bytes, ClickPoint::new(1, 1)).unwrap();
    assert_eq!(sampled.hex, "#00ffff");
    assert_eq!(sampled.hsl.h, 180);
    assert_eq!(sampled.temperature, Temperature::Cold);
}

#[test]
fn test_orientation_override() {
    // The PNG bytes carry no EXIF; an override supplied by the caller must
    // reorient sampling all the same
    let mut img = image::RgbImage::new(2, 3);
    img.put_pixel(0, 2, image::Rgb([1, 2, 3]));
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();

    // A 2x3 buffer shown rotated 90 CW displays as 3x2, with the buffer's
    // bottom-left pixel (0, 2) landing in the displayed top-left corner
    let sampled =
        sample_bytes_with_orientation(&bytes, Some(6), ClickPoint::new(0, 0)).unwrap();
    assert_eq!(sampled.rgb, [1, 2, 3]);
}

#[test]
fn test_json_shape_matches_reporting_contract() {
    let mut image = coordinate_image(1, 1, None);
    image.data = vec![255, 255, 255];
    let sampled = sample(&image, ClickPoint::new(0, 0)).unwrap();
    let json = serde_json::to_value(&sampled).unwrap();

    assert_eq!(json["hex"], "#ffffff");
    assert_eq!(json["hsl"]["l"], 100);
    assert_eq!(json["temperature"], "warm");
    assert_eq!(json["coordinates"]["x"], 0);
}
