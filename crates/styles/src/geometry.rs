//! Anchor geometry for origin-centered animations

use host::{Document, ElementId, Viewport};
use serde::{Deserialize, Serialize};

/// A point in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position
    pub x: f64,
    /// Vertical position
    pub y: f64,
}

impl Point {
    /// Create a point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Origin of a circle or blur-circle reveal, computed fresh per transition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    /// Center of the reveal
    pub origin: Point,
    /// Distance from the origin to the farthest viewport corner
    pub max_radius: f64,
    /// Viewport the anchor was resolved against
    pub viewport: Viewport,
}

impl Anchor {
    /// Resolve the anchor for `element` (if bound) inside `document`
    pub fn resolve(document: &dyn Document, element: Option<&ElementId>) -> Self {
        let viewport = document.viewport();
        let origin = resolve_anchor(document, element);
        Self {
            origin,
            max_radius: max_radius(origin.x, origin.y, viewport.width, viewport.height),
            viewport,
        }
    }
}

/// Center of the bound element's bounding box, or the viewport center when
/// no element is bound or it is not mounted
pub fn resolve_anchor(document: &dyn Document, element: Option<&ElementId>) -> Point {
    let (x, y) = match element.and_then(|id| document.bounding_rect(id)) {
        Some(rect) => rect.center(),
        None => document.viewport().center(),
    };
    Point::new(x, y)
}

/// Distance from `(x, y)` to the farthest corner of a `width` x `height` viewport
pub fn max_radius(x: f64, y: f64, width: f64, height: f64) -> f64 {
    x.max(width - x).hypot(y.max(height - y))
}
