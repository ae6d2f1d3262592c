//! Account records and upload limits.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::ServiceConfig;

use super::Subscription;

/// An account owning uploaded images.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,

    /// Manual premium flag, honored independently of any subscription.
    pub premium: bool,

    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Human-readable name: full name, first name, the local part of the
    /// email address, or a generic fallback, in that order.
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.clone(),
            _ => match &self.email {
                Some(email) => email.split('@').next().unwrap_or(email).to_string(),
                None => format!("User {}", self.id),
            },
        }
    }

    /// Whether the account currently counts as premium: an active
    /// subscription, or the manual flag.
    pub fn has_active_subscription(
        &self,
        subscriptions: &[Subscription],
        now: DateTime<Utc>,
    ) -> bool {
        self.premium || subscriptions.iter().any(|s| s.is_active(now))
    }

    /// Maximum number of images this account may keep.
    pub fn max_images(
        &self,
        subscriptions: &[Subscription],
        now: DateTime<Utc>,
        config: &ServiceConfig,
    ) -> usize {
        if self.has_active_subscription(subscriptions, now) {
            config.premium_image_limit
        } else {
            config.free_image_limit
        }
    }

    /// Whether another upload is allowed given the current image count.
    pub fn can_upload(
        &self,
        image_count: usize,
        subscriptions: &[Subscription],
        now: DateTime<Utc>,
        config: &ServiceConfig,
    ) -> bool {
        image_count < self.max_images(subscriptions, now, config)
    }
}
