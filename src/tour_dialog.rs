//! Tour dialog: the floating popup presenting step content and navigation.
//!
//! A non-modal `egui::Window` anchored next to the highlighted widget. It
//! shows the step description (plus the intro message on the first step and
//! an optional image), and Next/Skip controls; on the final step Next is
//! relabeled Finish. After the last step an optional outro card is shown
//! centered while the controller is already terminal.

use std::path::Path;

use egui::{Align2, Context, Id, Order, Rect, RichText, Vec2, Window};
use guidepost_config::{GuideConfig, StepDescriptor};

use crate::image_cache::{self, StepImageCache};
use crate::placement;

/// Size estimate used for placement on the first frame, before the dialog
/// has been measured.
const DEFAULT_DIALOG_SIZE: Vec2 = Vec2::new(320.0, 140.0);

/// Action returned by the tour dialog for the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourDialogAction {
    /// Advance past the step the dialog was shown for.
    Next { step: usize },
    /// End the tour early from the step the dialog was shown for.
    Skip { step: usize },
    /// Dismiss the outro card.
    CloseOutro,
    /// No action this frame.
    None,
}

/// State for the floating step dialog and the outro card.
pub struct TourDialogUI {
    /// Measured dialog size from the previous frame, used for placement
    /// before the current frame's size is known.
    last_size: Option<Vec2>,
    /// Whether the outro card is visible.
    outro_visible: bool,
}

impl Default for TourDialogUI {
    fn default() -> Self {
        Self::new()
    }
}

impl TourDialogUI {
    /// Create a hidden dialog.
    pub fn new() -> Self {
        Self {
            last_size: None,
            outro_visible: false,
        }
    }

    /// Forget the measured size. Called on step transitions so a new step's
    /// placement is not computed from the previous step's dimensions.
    pub fn invalidate_size(&mut self) {
        self.last_size = None;
    }

    /// Show the outro card on subsequent frames.
    pub fn show_outro(&mut self) {
        self.outro_visible = true;
    }

    /// Hide the outro card.
    pub fn hide_outro(&mut self) {
        self.outro_visible = false;
    }

    /// Whether the outro card is visible.
    pub fn outro_visible(&self) -> bool {
        self.outro_visible
    }

    /// Render the dialog for step `index` anchored to `target`, returning
    /// any navigation action.
    ///
    /// `show_intro` is true while this is the session's first *displayed*
    /// step — which need not be step 0, since unresolvable leading steps
    /// are skipped. The intro message rides along with it.
    ///
    /// Placement is recomputed every call from the live target rect and the
    /// current screen rect, so the dialog follows the widget across moves
    /// and window resizes.
    #[allow(clippy::too_many_arguments)]
    pub fn show_step(
        &mut self,
        ctx: &Context,
        config: &GuideConfig,
        index: usize,
        step: &StepDescriptor,
        target: Rect,
        show_intro: bool,
        images: &mut StepImageCache,
        images_dir: &Path,
    ) -> TourDialogAction {
        let mut action = TourDialogAction::None;
        let is_last = index + 1 == config.steps.len();

        let screen = ctx.screen_rect();
        let dialog_size = self.last_size.unwrap_or(DEFAULT_DIALOG_SIZE);
        let pos = placement::anchored_origin(target, dialog_size, screen);

        let response = Window::new("Guide")
            .id(Id::new("guidepost_step_dialog"))
            .title_bar(false)
            .resizable(false)
            .collapsible(false)
            .order(Order::Tooltip)
            .fixed_pos(pos)
            .show(ctx, |ui| {
                ui.set_max_width(config.image_width() as f32);

                if show_intro && let Some(intro) = &config.intro_message {
                    ui.label(RichText::new(intro).strong());
                    ui.separator();
                }

                ui.label(&step.description);

                if let Some(image_name) = &step.image {
                    let path = images_dir.join(image_name);
                    if let Some(tex) = images.texture(ctx, &path) {
                        let size =
                            image_cache::scaled_size(tex.size_vec2(), config.image_width() as f32);
                        ui.add(egui::Image::new(&tex).fit_to_exact_size(size));
                    }
                }

                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    let next_label = if is_last { "Finish" } else { "Next" };
                    if ui.button(next_label).clicked() {
                        action = TourDialogAction::Next { step: index };
                    }
                    if ui.button("Skip Guide").clicked() {
                        action = TourDialogAction::Skip { step: index };
                    }
                });
            });

        if let Some(response) = response {
            self.last_size = Some(response.response.rect.size());
        }
        action
    }

    /// Render the outro card when visible, returning `CloseOutro` once the
    /// user dismisses it.
    pub fn show_outro_card(&mut self, ctx: &Context, message: &str) -> TourDialogAction {
        if !self.outro_visible {
            return TourDialogAction::None;
        }
        let mut action = TourDialogAction::None;

        Window::new("Guide Completed")
            .id(Id::new("guidepost_outro_dialog"))
            .resizable(false)
            .collapsible(false)
            .order(Order::Foreground)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(6.0);
                if ui.button("Close").clicked() {
                    action = TourDialogAction::CloseOutro;
                }
            });

        if action == TourDialogAction::CloseOutro {
            self.outro_visible = false;
        }
        action
    }
}
