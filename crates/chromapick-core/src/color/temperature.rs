//! Warm/cold/neutral classification of an HSL triple.

use serde::{Deserialize, Serialize};

use super::RoundedHsl;

/// Coarse color temperature class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Temperature {
    Warm,
    Cold,
    Neutral,
}

impl Temperature {
    pub fn as_str(self) -> &'static str {
        match self {
            Temperature::Warm => "warm",
            Temperature::Cold => "cold",
            Temperature::Neutral => "neutral",
        }
    }
}

/// Classify a rounded HSL triple. Rules run in order, first match wins;
/// the lightness extremes come first, so pure black is cold and pure white
/// warm even though both are achromatic.
pub fn classify_temperature(hsl: RoundedHsl) -> Temperature {
    if hsl.l == 0 {
        Temperature::Cold
    } else if hsl.l == 100 {
        Temperature::Warm
    } else if hsl.s == 0 {
        Temperature::Neutral
    } else if hsl.h <= 90 || (270..=359).contains(&hsl.h) {
        Temperature::Warm
    } else {
        Temperature::Cold
    }
}
