//! Named widget-target registry.
//!
//! The immediate-mode stand-in for a retained widget tree: the host records
//! each tour-relevant widget's rectangle under a stable name while laying it
//! out, and step targets resolve against the latest recorded geometry. The
//! registry is re-recorded every frame, so resolution always sees live
//! positions and nothing is cached across steps.

use std::collections::HashMap;

use egui::Rect;

/// Registry mapping target names to current on-screen rectangles.
#[derive(Debug, Clone, Default)]
pub struct TargetRegistry {
    rects: HashMap<String, Rect>,
}

impl TargetRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current rect for a named target. The last write in a frame
    /// wins.
    pub fn record(&mut self, id: impl Into<String>, rect: Rect) {
        self.rects.insert(id.into(), rect);
    }

    /// Record a target from a widget response.
    pub fn track(&mut self, id: impl Into<String>, response: &egui::Response) {
        self.record(id, response.rect);
    }

    /// Resolve a target by exact, case-sensitive name.
    pub fn resolve(&self, id: &str) -> Option<Rect> {
        self.rects.get(id).copied()
    }

    /// Drop all recorded rects. Hosts with dynamic layouts call this at the
    /// top of each frame so widgets that are no longer laid out stop
    /// resolving.
    pub fn clear(&mut self) {
        self.rects.clear();
    }

    /// Number of currently registered targets.
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Whether no targets are registered.
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}
