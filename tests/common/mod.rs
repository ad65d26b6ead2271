//! Shared integration test helpers for guidepost.
//!
//! Canonical fixture factories and a scripted mock host used across the
//! `tests/` integration suite.
//!
//! Note: Rust integration tests use `mod common;` (not `use`) to bring in
//! helpers from `tests/common/mod.rs`. The `#[allow(dead_code)]` attribute
//! suppresses warnings when only a subset of helpers are used per file.

#![allow(dead_code)]

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use egui::{Pos2, Rect, Vec2};
use guidepost::GuideHost;
use guidepost::config::StepDescriptor;
use tempfile::TempDir;

/// Write `contents` as `guide.json` inside a fresh temp dir.
///
/// The `TempDir` must be kept alive for the duration of the test — drop it
/// only after all config/image I/O has completed.
pub fn write_guide(contents: &str) -> (PathBuf, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("guide.json");
    fs::write(&path, contents).expect("Failed to write guide fixture");
    (path, dir)
}

/// Write a solid-color PNG fixture next to a guide file.
pub fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([10, 200, 60, 255]));
    img.save(&path).expect("Failed to write png fixture");
    path
}

/// A minimal step descriptor for controller tests.
pub fn step(order: i64, name: &str) -> StepDescriptor {
    StepDescriptor {
        order,
        object_name: name.to_string(),
        description: format!("About {name}"),
        image: None,
        pre_action: None,
    }
}

/// A step with a pre-action attached.
pub fn step_with_action(order: i64, name: &str, action: &str) -> StepDescriptor {
    StepDescriptor {
        pre_action: Some(action.to_string()),
        ..step(order, name)
    }
}

/// Scripted host: a set of resolvable target names plus a recording of
/// every pre-action invocation, in order.
pub struct MockHost {
    pub resolvable: HashSet<String>,
    pub known_actions: HashSet<String>,
    pub invoked: Vec<String>,
}

impl MockHost {
    pub fn new(resolvable: &[&str]) -> Self {
        Self {
            resolvable: resolvable.iter().map(|s| s.to_string()).collect(),
            known_actions: HashSet::new(),
            invoked: Vec::new(),
        }
    }

    pub fn with_actions(mut self, names: &[&str]) -> Self {
        self.known_actions = names.iter().map(|s| s.to_string()).collect();
        self
    }
}

impl GuideHost for MockHost {
    fn resolve_target(&self, id: &str) -> Option<Rect> {
        self.resolvable
            .contains(id)
            .then(|| Rect::from_min_size(Pos2::new(10.0, 10.0), Vec2::new(80.0, 24.0)))
    }

    fn invoke_pre_action(&mut self, name: &str) -> bool {
        self.invoked.push(name.to_string());
        self.known_actions.contains(name)
    }
}
