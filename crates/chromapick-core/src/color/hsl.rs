//! RGB to HSL conversion.
//!
//! The standard cylindrical transform, computed in f64 so results are
//! bit-for-bit reproducible across platforms. Channel comparisons use exact
//! equality: the normalized values come straight from `u8 / 255.0` and are
//! never the product of further arithmetic.

use serde::{Deserialize, Serialize};

use super::Rgb;

/// HSL color: hue in degrees `[0, 360)`, saturation and lightness in
/// percent `[0, 100]`. Unrounded; see [`Hsl::rounded`] for reporting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// HSL rounded to the integers reported to the caller. The temperature
/// classifier consumes this same triple, keeping output self-consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundedHsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    /// Round to nearest integers for reporting. A hue that rounds up to 360
    /// wraps to 0 so the reported value stays inside `[0, 360)`.
    pub fn rounded(self) -> RoundedHsl {
        let mut h = self.h.round() as u16;
        if h >= 360 {
            h = 0;
        }
        RoundedHsl {
            h,
            s: self.s.round() as u8,
            l: self.l.round() as u8,
        }
    }
}

/// Convert an 8-bit RGB triple to HSL.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = max - min;

    let l = (max + min) / 2.0;

    // Achromatic case
    if diff == 0.0 {
        return Hsl {
            h: 0.0,
            s: 0.0,
            l: l * 100.0,
        };
    }

    let s = if l > 0.5 {
        diff / (2.0 - max - min)
    } else {
        diff / (max + min)
    };

    let mut h = if max == r {
        (g - b) / diff + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / diff + 2.0
    } else {
        (r - g) / diff + 4.0
    };
    h /= 6.0;

    Hsl {
        h: h * 360.0,
        s: s * 100.0,
        l: l * 100.0,
    }
}
