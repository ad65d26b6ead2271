//! Configuration-driven guided tour overlays for egui applications.
//!
//! A guide is described by a JSON file: an ordered sequence of steps, each
//! naming a host widget, a description, and optionally an image and a
//! pre-action callback. Starting the guide highlights each named widget in
//! turn and shows a floating dialog with Next/Skip controls anchored next to
//! it, until the sequence completes or the user skips out.
//!
//! The host application owns the egui event loop. It records the rectangles
//! of tour-relevant widgets into a [`TargetRegistry`] while laying them out,
//! and calls [`Guidepost::show`] once per frame; the tour coexists with the
//! host's normal interaction loop instead of pausing it.

/// Library version (root crate version, for use by sub-crates).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod actions;
pub mod config {
    //! Guide configuration re-exports from the guidepost-config crate.
    pub use guidepost_config::{
        ConfigError, DEFAULT_DIALOG_IMAGE_WIDTH, GuideConfig, StepDescriptor,
    };
}
pub mod controller;
pub mod error;
pub mod guide;
pub mod image_cache;
pub mod overlay;
pub mod placement;
pub mod targets;
pub mod tour_dialog;

pub use actions::PreActionRegistry;
pub use controller::{GuideController, GuideHost, GuideState};
pub use error::GuideError;
pub use guide::Guidepost;
pub use overlay::HighlightOverlay;
pub use targets::TargetRegistry;
pub use tour_dialog::{TourDialogAction, TourDialogUI};
