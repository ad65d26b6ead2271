//! Highlight overlay for the current tour target.

use egui::{Color32, Context, Id, LayerId, Order, Rect, Stroke, StrokeKind};

/// Stroke width of the highlight border.
const HIGHLIGHT_STROKE_WIDTH: f32 = 3.0;
/// Highlight border color.
const HIGHLIGHT_COLOR: Color32 = Color32::from_rgb(0, 170, 0);
/// Padding between the widget edge and the highlight border.
const HIGHLIGHT_PADDING: f32 = 2.0;
/// Corner rounding of the highlight border.
const HIGHLIGHT_ROUNDING: f32 = 2.0;

/// Visual emphasis bound to a named target's live rectangle.
///
/// Paint-only: the overlay draws on its own foreground layer and never
/// claims pointer or keyboard input, so interaction with the highlighted
/// widget passes through untouched. Because the target rect is re-resolved
/// every frame, the highlight tracks widget moves and resizes for free.
pub struct HighlightOverlay {
    target: Option<String>,
}

impl Default for HighlightOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl HighlightOverlay {
    /// Create a detached overlay.
    pub fn new() -> Self {
        Self { target: None }
    }

    /// Begin highlighting `id`, implicitly detaching any previous target.
    pub fn attach(&mut self, id: impl Into<String>) {
        let id = id.into();
        if let Some(prev) = self.target.replace(id) {
            log::debug!("Highlight moved off '{prev}'");
        }
    }

    /// Stop highlighting and remove the visual.
    pub fn detach(&mut self) {
        self.target = None;
    }

    /// Name of the currently highlighted target, if any.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Paint the highlight around the target's current rect.
    ///
    /// Skips the frame when the target did not resolve — a pre-action may
    /// have destroyed the widget mid-display, and painting a stale rect
    /// would highlight empty space.
    pub fn paint(&self, ctx: &Context, resolved: Option<Rect>) {
        if self.target.is_none() {
            return;
        }
        let Some(rect) = resolved else {
            return;
        };
        let painter = ctx.layer_painter(LayerId::new(
            Order::Foreground,
            Id::new("guidepost_highlight"),
        ));
        painter.rect_stroke(
            rect.expand(HIGHLIGHT_PADDING),
            HIGHLIGHT_ROUNDING,
            Stroke::new(HIGHLIGHT_STROKE_WIDTH, HIGHLIGHT_COLOR),
            StrokeKind::Outside,
        );
    }
}
