//! Dialog placement geometry.
//!
//! Pure functions: given the target widget's rect, the dialog's measured
//! size, and the visible screen rect, compute a dialog origin adjacent to
//! the target that keeps the whole dialog on screen. Recomputed every time
//! the dialog is shown — screen geometry and widget position can differ per
//! step and per frame.

use egui::{Pos2, Rect, Vec2};

/// Gap between the target widget and the dialog, in points.
pub const ANCHOR_MARGIN: f32 = 10.0;

/// Compute the dialog origin for a target rect.
///
/// The candidate anchor sits below-right of the target's bottom-left
/// corner. If that would push the dialog past the right or bottom screen
/// edge, the origin shifts left/up by the overflow; it is then clamped so
/// it never goes above or left of the screen origin. The top-left clamp
/// wins when the dialog is larger than the screen.
pub fn anchored_origin(target: Rect, dialog_size: Vec2, screen: Rect) -> Pos2 {
    let mut x = target.left();
    let mut y = target.bottom() + ANCHOR_MARGIN;

    if x + dialog_size.x > screen.right() {
        x = screen.right() - dialog_size.x;
    }
    if y + dialog_size.y > screen.bottom() {
        y = screen.bottom() - dialog_size.y;
    }

    Pos2::new(x.max(screen.left()), y.max(screen.top()))
}
