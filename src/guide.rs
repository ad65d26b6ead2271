//! Top-level guide facade wiring config, controller, and UI together.

use std::path::{Path, PathBuf};

use egui::{Context, Rect};
use guidepost_config::{ConfigError, GuideConfig};

use crate::actions::PreActionRegistry;
use crate::controller::{GuideController, GuideHost, GuideState};
use crate::error::GuideError;
use crate::image_cache::StepImageCache;
use crate::overlay::HighlightOverlay;
use crate::targets::TargetRegistry;
use crate::tour_dialog::{TourDialogAction, TourDialogUI};

/// Runtime state of one in-progress traversal.
#[derive(Debug, Clone, Copy, Default)]
struct TourSession {
    /// Last successfully resolved rect for the current step. Keeps the
    /// dialog anchored when a pre-action destroys the target mid-display.
    last_target: Option<Rect>,
    /// True until the session's first displayed step is advanced past. The
    /// intro message accompanies that step even when step 0 was skipped as
    /// unresolvable.
    intro_pending: bool,
}

/// Adapter lending the controller resolve/invoke capabilities over the
/// registries for the duration of one transition.
struct HostAdapter<'a> {
    targets: &'a TargetRegistry,
    actions: &'a mut PreActionRegistry,
}

impl GuideHost for HostAdapter<'_> {
    fn resolve_target(&self, id: &str) -> Option<Rect> {
        self.targets.resolve(id)
    }

    fn invoke_pre_action(&mut self, name: &str) -> bool {
        self.actions.invoke(name)
    }
}

/// A configuration-driven guided tour for an egui application.
///
/// The host constructs one `Guidepost` from a guide file, registers any
/// pre-action callbacks, records widget rects into a [`TargetRegistry`]
/// while laying out its UI, and calls [`show`](Self::show) once per frame.
/// [`start_guide`](Self::start_guide) kicks off a traversal; Next/Skip are
/// driven through the rendered dialog controls.
pub struct Guidepost {
    config: GuideConfig,
    images_dir: PathBuf,
    controller: GuideController,
    overlay: HighlightOverlay,
    dialog: TourDialogUI,
    images: StepImageCache,
    actions: PreActionRegistry,
    session: TourSession,
}

impl Guidepost {
    /// Load a guide from a JSON file.
    ///
    /// Step images resolve relative to the file's directory. Fails with
    /// [`ConfigError`] on unreadable, malformed, or step-less configs; no
    /// partial tour ever starts.
    pub fn from_path(config_path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config_path = config_path.as_ref();
        let config = GuideConfig::load(config_path)?;
        let images_dir = config_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();
        Ok(Self::from_config(config, images_dir))
    }

    /// Build a guide from an already loaded config, with images resolved
    /// relative to `images_dir`.
    pub fn from_config(config: GuideConfig, images_dir: PathBuf) -> Self {
        Self {
            config,
            images_dir,
            controller: GuideController::new(),
            overlay: HighlightOverlay::new(),
            dialog: TourDialogUI::new(),
            images: StepImageCache::new(),
            actions: PreActionRegistry::new(),
            session: TourSession::default(),
        }
    }

    /// The loaded guide configuration.
    pub fn config(&self) -> &GuideConfig {
        &self.config
    }

    /// Current controller state.
    pub fn state(&self) -> GuideState {
        self.controller.state()
    }

    /// True while a step is being displayed.
    pub fn is_active(&self) -> bool {
        self.controller.is_active()
    }

    /// Whether the intro message accompanies the currently displayed step.
    ///
    /// True for the session's first *displayed* step, which may not be step
    /// 0 when leading steps were skipped as unresolvable.
    pub fn intro_visible(&self) -> bool {
        self.is_active() && self.session.intro_pending
    }

    /// Register a named pre-action callback.
    pub fn register_action(&mut self, name: impl Into<String>, action: impl FnMut() + 'static) {
        self.actions.register(name, action);
    }

    /// Start (or restart) the tour.
    ///
    /// Resolves the first displayable step against the registry's current
    /// geometry. Callable again after `Completed`/`Cancelled` — a fresh
    /// session is created each run.
    pub fn start_guide(&mut self, targets: &TargetRegistry) -> Result<(), GuideError> {
        self.dialog.hide_outro();
        self.session = TourSession {
            last_target: None,
            intro_pending: true,
        };
        let mut host = HostAdapter {
            targets,
            actions: &mut self.actions,
        };
        let state = self.controller.start(&self.config.steps, &mut host)?;
        self.sync_presentation(state);
        Ok(())
    }

    /// Per-frame driver: paints the overlay and dialog for the current step
    /// and feeds dialog actions back into the controller.
    pub fn show(&mut self, ctx: &Context, targets: &TargetRegistry) {
        match self.controller.state() {
            GuideState::AwaitingStep(index) => self.show_step(ctx, targets, index),
            _ => {
                if self.dialog.outro_visible()
                    && let Some(outro) = self.config.outro_message.clone()
                {
                    self.dialog.show_outro_card(ctx, &outro);
                }
            }
        }
    }

    fn show_step(&mut self, ctx: &Context, targets: &TargetRegistry, index: usize) {
        let Some(step) = self.config.steps.get(index) else {
            return;
        };

        // Fresh resolution every frame so the overlay and dialog track
        // moves and resizes; fall back to the last known rect if the target
        // vanished mid-display.
        let resolved = targets.resolve(&step.object_name);
        if resolved.is_some() {
            self.session.last_target = resolved;
        }
        let Some(target) = resolved.or(self.session.last_target) else {
            // Nothing to anchor to yet (e.g. the host has not recorded its
            // targets this run); skip painting this frame.
            return;
        };

        self.overlay.paint(ctx, resolved);
        let action = self.dialog.show_step(
            ctx,
            &self.config,
            index,
            step,
            target,
            self.session.intro_pending,
            &mut self.images,
            &self.images_dir,
        );

        match action {
            TourDialogAction::Next { step } => {
                self.session.intro_pending = false;
                let mut host = HostAdapter {
                    targets,
                    actions: &mut self.actions,
                };
                let state = self
                    .controller
                    .advance_from(step, &self.config.steps, &mut host);
                self.sync_presentation(state);
            }
            TourDialogAction::Skip { step } => {
                let state = self.controller.skip_from(step);
                self.sync_presentation(state);
            }
            TourDialogAction::CloseOutro | TourDialogAction::None => {}
        }
    }

    /// Align overlay/dialog presentation with a new controller state.
    fn sync_presentation(&mut self, state: GuideState) {
        self.dialog.invalidate_size();
        self.session.last_target = None;
        match state {
            GuideState::AwaitingStep(i) => {
                if let Some(step) = self.config.steps.get(i) {
                    self.overlay.attach(step.object_name.clone());
                }
            }
            GuideState::Completed => {
                self.overlay.detach();
                if self.config.outro_message.is_some() {
                    self.dialog.show_outro();
                }
            }
            GuideState::Cancelled | GuideState::Idle => {
                self.overlay.detach();
            }
        }
    }
}
