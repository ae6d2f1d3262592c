//! Uploaded image records and the retention window.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::config::ServiceConfig;

/// Metadata for one uploaded image. The pixel bytes live in the external
/// store; this record carries everything needed for gating and display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: i64,
    pub account_id: String,
    pub filename: String,
    pub original_filename: String,
    pub file_size: u64,
    pub mime_type: String,
    pub width: u32,
    pub height: u32,
    pub created_at: DateTime<Utc>,
}

impl ImageRecord {
    /// When this image stops being accessible. Premium accounts have no
    /// retention window.
    pub fn expires_at(&self, premium: bool, config: &ServiceConfig) -> Option<DateTime<Utc>> {
        if premium {
            None
        } else {
            Some(self.created_at + Duration::hours(config.retention_hours))
        }
    }

    /// Whether the retention window has elapsed. Viewing and sampling must
    /// both be refused once this returns true.
    pub fn is_expired(&self, premium: bool, now: DateTime<Utc>, config: &ServiceConfig) -> bool {
        match self.expires_at(premium, config) {
            Some(deadline) => now > deadline,
            None => false,
        }
    }

    /// Human-readable file size.
    pub fn file_size_display(&self) -> String {
        format_file_size(self.file_size)
    }
}

/// Format a byte count as a human-readable string with one decimal place.
pub fn format_file_size(size_bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];

    if size_bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = size_bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    format!("{:.1} {}", size, UNITS[unit])
}
