//! Chromapick Core Library
//!
//! Core functionality for orientation-aware pixel color sampling: mapping a
//! clicked display-space point back into a decoded image buffer, reading the
//! pixel there, and converting it to hex/HSL plus a warm/cold/neutral class.

pub mod bounds;
pub mod color;
pub mod config;
pub mod decoders;
pub mod error;
pub mod models;
pub mod orientation;
pub mod pipeline;
pub mod sampler;
pub mod transform;

// Re-export commonly used types
pub use color::{classify_temperature, rgb_to_hsl, Hsl, Rgb, RoundedHsl, Temperature};
pub use decoders::{ChannelLayout, DecodedImage};
pub use error::SampleError;
pub use models::{Account, ImageRecord, Subscription, SubscriptionStatus};
pub use orientation::{DisplayFrame, OrientationClass};
pub use pipeline::{sample, sample_bytes, sample_bytes_with_orientation, SampledColor};
pub use transform::{BufferPoint, ClickPoint};
