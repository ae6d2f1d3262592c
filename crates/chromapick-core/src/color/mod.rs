//! Color representations and conversions.
//!
//! Everything here is deterministic: the same RGB triple always yields the
//! same hex string, the same HSL triple, and the same temperature class.

pub mod hsl;
pub mod temperature;


pub use hsl::{rgb_to_hsl, Hsl, RoundedHsl};
pub use temperature::{classify_temperature, Temperature};

use serde::Serialize;

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Lowercase `#rrggbb` representation.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
