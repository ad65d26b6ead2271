//! Configuration system for guidepost guided tours.
//!
//! This crate provides loading, validation, and canonical ordering for the
//! JSON guide files that describe a tour. It includes:
//!
//! - Guide and step descriptor types
//! - JSON loading with typed errors
//! - The ascending-by-`order` step ordering contract

pub mod config;
pub mod error;

// Re-export main types for convenience
pub use config::{DEFAULT_DIALOG_IMAGE_WIDTH, GuideConfig, StepDescriptor};
pub use error::ConfigError;
