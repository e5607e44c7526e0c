//! Ambient user preferences (color scheme, reduced motion)

use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::watch;

/// Operating-system level preference signals
pub trait PreferenceSource: Send + Sync {
    /// Whether the ambient color scheme is dark
    fn prefers_dark(&self) -> bool;

    /// Whether the user asked for reduced motion
    fn prefers_reduced_motion(&self) -> bool;

    /// Subscribe to ambient color scheme changes.
    ///
    /// The receiver's current value is the dark preference; a change is
    /// signalled every time it flips.
    fn subscribe_color_scheme(&self) -> watch::Receiver<bool>;
}

/// Preference source whose signals are set by hand
///
/// Stands in for a media-query backed source in headless hosts and tests.
#[derive(Debug)]
pub struct ManualPreferences {
    dark_tx: watch::Sender<bool>,
    reduced_motion: AtomicBool,
}

impl ManualPreferences {
    /// Create a source with the given initial signals
    pub fn new(prefers_dark: bool, prefers_reduced_motion: bool) -> Self {
        let (dark_tx, _) = watch::channel(prefers_dark);
        Self { dark_tx, reduced_motion: AtomicBool::new(prefers_reduced_motion) }
    }

    /// Flip the ambient color scheme, notifying subscribers on change
    pub fn set_prefers_dark(&self, dark: bool) {
        let changed = self.dark_tx.send_if_modified(|current| {
            if *current == dark {
                false
            } else {
                *current = dark;
                true
            }
        });

        if changed {
            tracing::trace!(dark, "ambient color scheme changed");
        }
    }

    /// Set the reduced-motion signal
    pub fn set_prefers_reduced_motion(&self, reduced: bool) {
        self.reduced_motion.store(reduced, Ordering::SeqCst);
    }
}

impl Default for ManualPreferences {
    fn default() -> Self {
        Self::new(false, false)
    }
}

impl PreferenceSource for ManualPreferences {
    fn prefers_dark(&self) -> bool {
        *self.dark_tx.borrow()
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion.load(Ordering::SeqCst)
    }

    fn subscribe_color_scheme(&self) -> watch::Receiver<bool> {
        self.dark_tx.subscribe()
    }
}
