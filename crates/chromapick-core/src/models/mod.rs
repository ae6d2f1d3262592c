//! Data model for the resource lifecycle boundary.
//!
//! The relational store itself lives outside this crate; these are the plain
//! records the caller hydrates from it. Their only job here is the gating
//! logic: whether an account may upload, and whether an image is still
//! accessible when a view or sampling request arrives. An expired image must
//! never reach the pipeline.

mod account;
mod image_record;
mod subscription;


pub use account::Account;
pub use image_record::{format_file_size, ImageRecord};
pub use subscription::{Subscription, SubscriptionStatus};
