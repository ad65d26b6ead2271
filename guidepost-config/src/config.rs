//! Guide configuration types and JSON loading.
//!
//! A guide file is a single JSON object describing an ordered sequence of
//! tour steps plus optional intro/outro messaging and image sizing. Loading
//! produces the canonical step ordering used by the controller: ascending by
//! `order`, with declaration order preserved among equal keys. The controller
//! never re-sorts.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Rendered image width cap applied when the guide file does not set
/// `dialog_image_width`, in pixels.
pub const DEFAULT_DIALOG_IMAGE_WIDTH: u32 = 500;

/// One unit of the guided tour: a target widget, descriptive text, and
/// optional image and pre-action.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StepDescriptor {
    /// Sort key. Need not be contiguous or unique; ties keep declaration
    /// order.
    #[serde(default)]
    pub order: i64,
    /// Widget-lookup identifier, matched case-sensitively against the host's
    /// registered target names.
    pub object_name: String,
    /// Tooltip body text.
    pub description: String,
    /// Image path, relative to the guide file's directory.
    #[serde(default)]
    pub image: Option<String>,
    /// Name of a host callback invoked before this step is displayed.
    #[serde(default)]
    pub pre_action: Option<String>,
}

/// A loaded, validated guide: non-empty steps in canonical order.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GuideConfig {
    /// Shown alongside the first step.
    #[serde(default)]
    pub intro_message: Option<String>,
    /// Shown after the last step completes.
    #[serde(default)]
    pub outro_message: Option<String>,
    /// Max rendered image width in pixels; aspect ratio is preserved.
    #[serde(default)]
    pub dialog_image_width: Option<u32>,
    /// Tour steps, sorted ascending by `order` after load.
    #[serde(default)]
    pub steps: Vec<StepDescriptor>,
}

impl GuideConfig {
    /// Load and validate a guide file.
    ///
    /// Fails with [`ConfigError::Io`] when the file is unreadable, with
    /// [`ConfigError::Parse`] when the JSON is malformed or a step is
    /// missing a required field, and with [`ConfigError::Validation`] when
    /// `steps` is absent or empty, or a step has an empty `object_name`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        log::info!("Loading guide config from {:?}", path);
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Parse and validate a guide from a JSON string.
    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        let mut config: GuideConfig = serde_json::from_str(contents)?;
        config.validate()?;
        // Vec::sort_by_key is stable, so equal `order` keys keep their
        // declaration order.
        config.steps.sort_by_key(|step| step.order);
        log::debug!("Guide config loaded with {} steps", config.steps.len());
        Ok(config)
    }

    /// Number of steps in canonical order.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Max rendered image width, falling back to
    /// [`DEFAULT_DIALOG_IMAGE_WIDTH`].
    pub fn image_width(&self) -> u32 {
        self.dialog_image_width.unwrap_or(DEFAULT_DIALOG_IMAGE_WIDTH)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.steps.is_empty() {
            return Err(ConfigError::Validation(
                "guide must define at least one step".to_string(),
            ));
        }
        for (i, step) in self.steps.iter().enumerate() {
            if step.object_name.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "step {i}: object_name must not be empty"
                )));
            }
        }
        Ok(())
    }
}
