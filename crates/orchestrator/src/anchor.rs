//! Bindable anchor handle

use host::ElementId;
use parking_lot::RwLock;
use std::sync::Arc;

/// Handle a UI layer binds to the element that triggers theme switches.
///
/// Circle and blur-circle animations emanate from the bound element's
/// center; with nothing bound they start at the viewport center.
#[derive(Debug, Clone, Default)]
pub struct AnchorHandle {
    element: Arc<RwLock<Option<ElementId>>>,
}

impl AnchorHandle {
    /// Create an unbound handle
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the handle to an element
    pub fn bind(&self, element: impl Into<ElementId>) {
        *self.element.write() = Some(element.into());
    }

    /// Release the bound element
    pub fn unbind(&self) {
        *self.element.write() = None;
    }

    /// The currently bound element
    pub fn element(&self) -> Option<ElementId> {
        self.element.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_and_unbind() {
        let handle = AnchorHandle::new();
        assert_eq!(handle.element(), None);

        handle.bind("toggle");
        assert_eq!(handle.element(), Some(ElementId::new("toggle")));

        // Clones share the binding
        let clone = handle.clone();
        clone.unbind();
        assert_eq!(handle.element(), None);
    }
}
