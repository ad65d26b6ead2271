//! Typed errors for guide control flow.
//!
//! Structural/config problems abort before any UI is shown; per-step runtime
//! problems (unresolvable widget, missing pre-action, bad image) degrade
//! gracefully and are surfaced through `log::warn!` instead of errors.

use thiserror::Error;

/// Errors that can abort starting a guide.
#[derive(Debug, Error)]
pub enum GuideError {
    /// The step sequence is empty; a runnable guide needs at least one step.
    #[error("guide has no steps to show")]
    NoSteps,
}
