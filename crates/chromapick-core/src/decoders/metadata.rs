//! EXIF orientation extraction.

use std::io::Cursor;

/// Read the EXIF orientation tag (0x0112) from raw image bytes.
///
/// Returns `None` when the container carries no EXIF segment or the tag is
/// absent; the resolver treats that as "no rotation".
pub(crate) fn read_orientation(bytes: &[u8]) -> Option<u32> {
    let mut cursor = Cursor::new(bytes);
    let reader = exif::Reader::new().read_from_container(&mut cursor).ok()?;
    reader
        .get_field(exif::Tag::Orientation, exif::In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
}
