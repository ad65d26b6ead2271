//! Guide traversal state machine.
//!
//! The controller is egui-free: it talks to the host through the
//! [`GuideHost`] trait, which supplies fresh target geometry and pre-action
//! invocation. All transitions run synchronously from UI input; there are no
//! background threads.

use egui::Rect;
use guidepost_config::StepDescriptor;

use crate::error::GuideError;

/// Host capabilities the controller needs during a transition.
pub trait GuideHost {
    /// Resolve a target identifier to its current on-screen rect.
    ///
    /// Resolution happens fresh on every step activation — a pre-action may
    /// have created, renamed, or moved widgets since the last step.
    fn resolve_target(&self, id: &str) -> Option<Rect>;

    /// Invoke a named pre-action. Returns false when the name is unknown.
    fn invoke_pre_action(&mut self, name: &str) -> bool;
}

/// Lifecycle of one guide traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideState {
    /// No tour has started.
    Idle,
    /// Step `i` is on screen, waiting for Next/Skip.
    AwaitingStep(usize),
    /// The tour ran to the end (or ran out of resolvable steps).
    Completed,
    /// The user skipped out early.
    Cancelled,
}

/// Orchestrates step order, pre-action invocation, and
/// start/advance/skip/finish transitions.
///
/// `Completed` and `Cancelled` are terminal only until the next
/// [`start`](Self::start): the controller is reusable across tour runs.
pub struct GuideController {
    state: GuideState,
}

impl Default for GuideController {
    fn default() -> Self {
        Self::new()
    }
}

impl GuideController {
    /// Create a controller in `Idle`.
    pub fn new() -> Self {
        Self {
            state: GuideState::Idle,
        }
    }

    /// Current state.
    pub fn state(&self) -> GuideState {
        self.state
    }

    /// True while a step is being displayed.
    pub fn is_active(&self) -> bool {
        matches!(self.state, GuideState::AwaitingStep(_))
    }

    /// Begin a traversal from the first step.
    ///
    /// Fails with [`GuideError::NoSteps`] on an empty sequence, leaving the
    /// state unchanged. Callable from terminal states to start a fresh run.
    /// When no step at all resolves, the tour ends quietly in `Completed`
    /// with nothing shown.
    pub fn start(
        &mut self,
        steps: &[StepDescriptor],
        host: &mut dyn GuideHost,
    ) -> Result<GuideState, GuideError> {
        if steps.is_empty() {
            return Err(GuideError::NoSteps);
        }
        log::info!("Starting guide with {} steps", steps.len());
        self.state = activate_from(0, steps, host);
        Ok(self.state)
    }

    /// Advance past step `expected`.
    ///
    /// Honored only when the controller is awaiting exactly that step; a
    /// stale index (repeated click, duplicate event in one frame) is
    /// ignored, so the cursor moves by at most one per displayed step.
    /// All transitions run synchronously on the caller's thread, so this
    /// guard is the only reentrancy protection needed.
    pub fn advance_from(
        &mut self,
        expected: usize,
        steps: &[StepDescriptor],
        host: &mut dyn GuideHost,
    ) -> GuideState {
        if self.state != GuideState::AwaitingStep(expected) {
            log::debug!("Ignoring advance from step {expected} in state {:?}", self.state);
            return self.state;
        }
        self.state = activate_from(expected + 1, steps, host);
        self.state
    }

    /// End the tour early from step `expected`, discarding remaining steps.
    pub fn skip_from(&mut self, expected: usize) -> GuideState {
        if self.state != GuideState::AwaitingStep(expected) {
            log::debug!("Ignoring skip from step {expected} in state {:?}", self.state);
            return self.state;
        }
        log::info!("Guide skipped at step {expected}");
        self.state = GuideState::Cancelled;
        self.state
    }
}

/// Scan forward from `index` for the first step whose target resolves.
///
/// Pre-actions run for every step examined, including ones later skipped as
/// unresolvable: the action may be what creates the *next* step's widget.
/// Exhausting the sequence ends in `Completed`.
fn activate_from(index: usize, steps: &[StepDescriptor], host: &mut dyn GuideHost) -> GuideState {
    for (i, step) in steps.iter().enumerate().skip(index) {
        if let Some(name) = &step.pre_action {
            log::info!("Executing pre-action: {name}");
            if !host.invoke_pre_action(name) {
                log::warn!("Pre-action '{name}' is not registered; continuing");
            }
        }
        if host.resolve_target(&step.object_name).is_some() {
            return GuideState::AwaitingStep(i);
        }
        log::warn!("Widget '{}' not found; skipping this step", step.object_name);
    }
    log::info!("Guide completed");
    GuideState::Completed
}
