//! Preference and persistence bridge
//!
//! Resolves the initial theme (stored choice first, then the ambient color
//! scheme), writes explicit choices back to storage, and follows ambient
//! color scheme changes while no explicit choice is stored.

use host::PreferenceSource;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use storage::{PersistentStore, ThemeMode};
use styles::TransitionConfig;
use tokio::sync::oneshot;

/// Bridge between the theme state and its environment-dependent inputs
#[derive(Clone)]
pub struct PreferenceBridge {
    store: Arc<dyn PersistentStore>,
    preferences: Arc<dyn PreferenceSource>,
    storage_key: String,
    respect_system_preference: bool,
    document_available: bool,
}

impl PreferenceBridge {
    /// Create a bridge for `config`.
    ///
    /// Without a document the bridge neither reads nor writes storage.
    pub fn new(
        store: Arc<dyn PersistentStore>,
        preferences: Arc<dyn PreferenceSource>,
        config: &TransitionConfig,
        document_available: bool,
    ) -> Self {
        Self {
            store,
            preferences,
            storage_key: config.storage_key.clone(),
            respect_system_preference: config.respect_system_preference,
            document_available,
        }
    }

    /// Initial theme: stored value, else the ambient preference when
    /// respected, else light
    pub fn resolve_initial_theme(&self) -> bool {
        if !self.document_available {
            return false;
        }

        if let Some(mode) = self.stored_preference() {
            return mode.is_dark();
        }

        self.respect_system_preference && self.preferences.prefers_dark()
    }

    /// The explicit theme choice in storage, if any
    pub fn stored_preference(&self) -> Option<ThemeMode> {
        if !self.document_available {
            return None;
        }

        match self.store.read(&self.storage_key) {
            Ok(Some(value)) => {
                let mode = ThemeMode::from_stored(&value);
                if mode.is_none() {
                    tracing::warn!(key = %self.storage_key, %value, "ignoring unrecognized stored theme");
                }
                mode
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(key = %self.storage_key, "failed to read stored theme: {}", e);
                None
            }
        }
    }

    /// Write the theme choice back to storage
    pub fn persist(&self, is_dark: bool) {
        if !self.document_available {
            return;
        }

        let mode = ThemeMode::from_dark(is_dark);
        if let Err(e) = self.store.write(&self.storage_key, mode.as_str()) {
            tracing::warn!(key = %self.storage_key, %mode, "failed to persist theme: {}", e);
        }
    }

    /// Follow ambient color scheme changes.
    ///
    /// `on_change` runs with the new ambient value for every change seen
    /// while no explicit choice is stored. The subscription ends when the
    /// returned handle is stopped or dropped. Must be called from within a
    /// tokio runtime.
    pub fn subscribe_ambient<F>(&self, on_change: F) -> AmbientSubscription
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        let (stop_tx, mut stop_rx) = oneshot::channel();
        let mut rx = self.preferences.subscribe_color_scheme();
        let active = Arc::new(AtomicBool::new(true));
        let bridge = self.clone();
        let task_active = Arc::clone(&active);

        let handle = tokio::spawn(async move {
            loop {
                tokio::select! {
                    changed = rx.changed() => {
                        if changed.is_err() {
                            // Preference source went away
                            break;
                        }

                        let dark = *rx.borrow_and_update();
                        match bridge.stored_preference() {
                            Some(stored) => {
                                tracing::trace!(dark, %stored, "ambient change ignored, explicit theme stored");
                            }
                            None => {
                                tracing::debug!(dark, "applying ambient color scheme");
                                on_change(dark);
                            }
                        }
                    }
                    _ = &mut stop_rx => {
                        break;
                    }
                }
            }

            task_active.store(false, Ordering::SeqCst);
        });

        AmbientSubscription { stop_tx: Some(stop_tx), active, _handle: handle }
    }
}

impl std::fmt::Debug for PreferenceBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceBridge")
            .field("storage_key", &self.storage_key)
            .field("respect_system_preference", &self.respect_system_preference)
            .field("document_available", &self.document_available)
            .finish()
    }
}

/// Handle for an ambient preference subscription
///
/// When dropped, the subscription is stopped.
pub struct AmbientSubscription {
    stop_tx: Option<oneshot::Sender<()>>,
    active: Arc<AtomicBool>,
    _handle: tokio::task::JoinHandle<()>,
}

impl AmbientSubscription {
    /// Whether the subscription task is still running
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Stop following ambient changes
    pub fn stop(mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for AmbientSubscription {
    fn drop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl std::fmt::Debug for AmbientSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AmbientSubscription").field("active", &self.is_active()).finish()
    }
}
