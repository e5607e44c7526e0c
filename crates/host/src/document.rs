//! Host document: root element, element geometry, viewport

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Identifier of an element in the host document
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(String);

impl ElementId {
    /// Create an element identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Bounding box in viewport coordinates (CSS pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub left: f64,
    /// Top edge
    pub top: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Rect {
    /// Create a rectangle
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Center point as `(x, y)`
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Viewport dimensions (CSS pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Viewport width
    pub width: f64,
    /// Viewport height
    pub height: f64,
}

impl Viewport {
    /// Create a viewport
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Center point as `(x, y)`
    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// Length of the viewport diagonal
    pub fn diagonal(&self) -> f64 {
        self.width.hypot(self.height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

/// The parts of a host document the orchestrator touches
pub trait Document: Send + Sync {
    /// Add (`present = true`) or remove the marker class on the root element
    fn set_root_class(&self, class: &str, present: bool);

    /// Whether the root element currently carries `class`
    fn has_root_class(&self, class: &str) -> bool;

    /// Current viewport dimensions
    fn viewport(&self) -> Viewport;

    /// Bounding box of a mounted element, `None` if it is not mounted
    fn bounding_rect(&self, element: &ElementId) -> Option<Rect>;
}

/// In-memory document for headless hosts and tests
#[derive(Debug, Default)]
pub struct HeadlessDocument {
    root_classes: RwLock<BTreeSet<String>>,
    viewport: RwLock<Viewport>,
    elements: RwLock<HashMap<ElementId, Rect>>,
}

impl HeadlessDocument {
    /// Create a document with the given viewport
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport: RwLock::new(viewport), ..Default::default() }
    }

    /// Resize the viewport
    pub fn set_viewport(&self, viewport: Viewport) {
        *self.viewport.write() = viewport;
    }

    /// Mount (or move) an element at `rect`
    pub fn place_element(&self, id: impl Into<ElementId>, rect: Rect) {
        self.elements.write().insert(id.into(), rect);
    }

    /// Unmount an element
    pub fn remove_element(&self, id: &ElementId) -> bool {
        self.elements.write().remove(id).is_some()
    }

    /// Snapshot of the root element's classes
    pub fn root_classes(&self) -> Vec<String> {
        self.root_classes.read().iter().cloned().collect()
    }
}

impl Document for HeadlessDocument {
    fn set_root_class(&self, class: &str, present: bool) {
        let mut classes = self.root_classes.write();
        if present {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }

    fn has_root_class(&self, class: &str) -> bool {
        self.root_classes.read().contains(class)
    }

    fn viewport(&self) -> Viewport {
        *self.viewport.read()
    }

    fn bounding_rect(&self, element: &ElementId) -> Option<Rect> {
        self.elements.read().get(element).copied()
    }
}
