//! Host capabilities a theme switch runs against

use host::{
    Document, ManualPreferences, MemoryStyleInjector, NoViewTransitions, PreferenceSource,
    StyleInjector, ViewTransitionApi,
};
use std::sync::Arc;
use storage::{MemoryStore, PersistentStore};

/// Bundle of host capabilities.
///
/// `document` is `None` outside a document-capable environment; in that
/// case every switch is a direct state change and nothing is persisted.
#[derive(Clone)]
pub struct Environment {
    /// Host document, if any
    pub document: Option<Arc<dyn Document>>,
    /// Stylesheet injection point
    pub styles: Arc<dyn StyleInjector>,
    /// View transition primitive
    pub transitions: Arc<dyn ViewTransitionApi>,
    /// Ambient preference signals
    pub preferences: Arc<dyn PreferenceSource>,
    /// Persistent key-value store
    pub store: Arc<dyn PersistentStore>,
}

impl Environment {
    /// An environment with no document, no transition primitive and
    /// in-memory storage
    pub fn headless() -> Self {
        Self {
            document: None,
            styles: Arc::new(MemoryStyleInjector::new()),
            transitions: Arc::new(NoViewTransitions),
            preferences: Arc::new(ManualPreferences::default()),
            store: Arc::new(MemoryStore::new()),
        }
    }

    /// Attach a document
    pub fn with_document(mut self, document: Arc<dyn Document>) -> Self {
        self.document = Some(document);
        self
    }

    /// Use a different style injector
    pub fn with_styles(mut self, styles: Arc<dyn StyleInjector>) -> Self {
        self.styles = styles;
        self
    }

    /// Use a different view transition primitive
    pub fn with_transitions(mut self, transitions: Arc<dyn ViewTransitionApi>) -> Self {
        self.transitions = transitions;
        self
    }

    /// Use a different preference source
    pub fn with_preferences(mut self, preferences: Arc<dyn PreferenceSource>) -> Self {
        self.preferences = preferences;
        self
    }

    /// Use a different persistent store
    pub fn with_store(mut self, store: Arc<dyn PersistentStore>) -> Self {
        self.store = store;
        self
    }

    /// Whether a document is attached
    pub fn has_document(&self) -> bool {
        self.document.is_some()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::headless()
    }
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment").field("has_document", &self.has_document()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use host::HeadlessDocument;

    #[test]
    fn test_headless_has_no_document() {
        let env = Environment::headless();
        assert!(!env.has_document());
        assert_eq!(env.transitions.supports_view_transitions(), Ok(false));
    }

    #[test]
    fn test_with_document() {
        let env = Environment::headless().with_document(Arc::new(HeadlessDocument::default()));
        assert!(env.has_document());
    }
}
