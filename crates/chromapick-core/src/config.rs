//! Service configuration.
//!
//! Optional YAML file controlling retention and upload limits. Missing file
//! or unparseable content falls back to the built-in defaults; problems are
//! reported as warnings rather than hard errors so a bad config never takes
//! sampling down.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Candidate config file names searched in the working directory.
const CONFIG_FILENAMES: &[&str] = &["chromapick.yml", "chromapick.yaml"];

/// Default retention window for non-premium accounts, in hours.
pub const DEFAULT_RETENTION_HOURS: i64 = 24;

/// Default image limits per account tier.
pub const DEFAULT_FREE_IMAGE_LIMIT: usize = 3;
pub const DEFAULT_PREMIUM_IMAGE_LIMIT: usize = 50;

/// Default maximum upload size: 15 MB.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 15 * 1024 * 1024;

/// Tunable service limits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Hours until a non-premium image expires.
    pub retention_hours: i64,

    /// Image count limit for free accounts.
    pub free_image_limit: usize,

    /// Image count limit for premium accounts.
    pub premium_image_limit: usize,

    /// Largest accepted upload, in bytes.
    pub max_upload_bytes: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            retention_hours: DEFAULT_RETENTION_HOURS,
            free_image_limit: DEFAULT_FREE_IMAGE_LIMIT,
            premium_image_limit: DEFAULT_PREMIUM_IMAGE_LIMIT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

/// A loaded configuration together with where it came from and any warnings
/// produced while loading it.
#[derive(Debug)]
pub struct ConfigHandle {
    pub config: ServiceConfig,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

/// Load configuration from an explicit path, or search the working directory
/// for the candidate file names. Falls back to defaults when nothing is
/// found or parsing fails.
pub fn load_config(explicit: Option<&Path>) -> ConfigHandle {
    let mut warnings = Vec::new();

    let candidate = match explicit {
        Some(path) => {
            if path.is_file() {
                Some(path.to_path_buf())
            } else {
                warnings.push(format!("config file not found: {}", path.display()));
                None
            }
        }
        None => CONFIG_FILENAMES
            .iter()
            .map(PathBuf::from)
            .find(|p| p.is_file()),
    };

    let Some(path) = candidate else {
        return ConfigHandle {
            config: ServiceConfig::default(),
            source: None,
            warnings,
        };
    };

    match fs::read_to_string(&path) {
        Ok(content) => match serde_yaml::from_str::<ServiceConfig>(&content) {
            Ok(config) => ConfigHandle {
                config,
                source: Some(path),
                warnings,
            },
            Err(e) => {
                warnings.push(format!("failed to parse {}: {}", path.display(), e));
                ConfigHandle {
                    config: ServiceConfig::default(),
                    source: Some(path),
                    warnings,
                }
            }
        },
        Err(e) => {
            warnings.push(format!("failed to read {}: {}", path.display(), e));
            ConfigHandle {
                config: ServiceConfig::default(),
                source: None,
                warnings,
            }
        }
    }
}
