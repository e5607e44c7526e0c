//! Stylesheet fragment injection

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Identifier-keyed stylesheet injection point.
///
/// At most one fragment exists per identifier: `set` replaces whatever was
/// stored under the same id.
pub trait StyleInjector: Send + Sync {
    /// Create or replace the fragment `id` with `css`
    fn set(&self, id: &str, css: &str);

    /// Remove the fragment `id`, returning whether one existed
    fn clear(&self, id: &str) -> bool;

    /// Current contents of fragment `id`
    fn css(&self, id: &str) -> Option<String>;

    /// Whether fragment `id` exists
    fn contains(&self, id: &str) -> bool {
        self.css(id).is_some()
    }
}

/// In-memory [`StyleInjector`] that also counts fragment creations
#[derive(Debug, Default)]
pub struct MemoryStyleInjector {
    fragments: RwLock<HashMap<String, String>>,
    created: AtomicUsize,
}

impl MemoryStyleInjector {
    /// Create an empty injector
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of `set` calls over the injector's lifetime
    pub fn created_count(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    /// Number of fragments currently alive
    pub fn len(&self) -> usize {
        self.fragments.read().len()
    }

    /// Whether no fragment is alive
    pub fn is_empty(&self) -> bool {
        self.fragments.read().is_empty()
    }
}

impl StyleInjector for MemoryStyleInjector {
    fn set(&self, id: &str, css: &str) {
        self.fragments.write().insert(id.to_string(), css.to_string());
        self.created.fetch_add(1, Ordering::SeqCst);
    }

    fn clear(&self, id: &str) -> bool {
        self.fragments.write().remove(id).is_some()
    }

    fn css(&self, id: &str) -> Option<String> {
        self.fragments.read().get(id).cloned()
    }
}
