//! Transition orchestrator
//!
//! The state machine behind a theme switch:
//!
//! - **Idle -> Idle** (direct): no document, no view transition primitive,
//!   reduced motion requested, or animation kind `none`. The theme state
//!   changes immediately and no styles are synthesized.
//! - **Idle -> Transitioning**: resolve the anchor, replace the style
//!   fragment, raise the transitioning flag, start the platform transition
//!   with a callback that mutates the theme synchronously, then await
//!   readiness.
//! - **Transitioning -> Idle**: a fixed delay of `duration` after readiness,
//!   the fragment is removed and the flag cleared.
//!
//! Only [`TransitionOrchestrator::toggle_theme`] is rejected while
//! transitioning; `set_theme` always proceeds.

use host::{Document, ViewTransition};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use styles::{synth, tokens::ids, Anchor, AnimationKind, TransitionConfig};

use crate::anchor::AnchorHandle;
use crate::binding::ThemeBinding;
use crate::bridge::PreferenceBridge;
use crate::environment::Environment;

/// Orchestrator state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionState {
    /// No transition in flight
    Idle,
    /// A transition was accepted and has not been cleaned up yet
    Transitioning,
}

/// Where a theme update originated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateSource {
    /// An explicit `set_theme` / `toggle_theme` call; persisted
    Explicit,
    /// An ambient color scheme change; not persisted
    Ambient,
}

/// Sequences theme switches against the host environment
pub struct TransitionOrchestrator {
    config: TransitionConfig,
    env: Environment,
    binding: Arc<dyn ThemeBinding>,
    bridge: PreferenceBridge,
    anchor: AnchorHandle,
    transitioning: AtomicBool,
}

impl TransitionOrchestrator {
    /// Create an orchestrator. `config` must already be validated.
    pub fn new(
        config: TransitionConfig,
        env: Environment,
        binding: Arc<dyn ThemeBinding>,
        bridge: PreferenceBridge,
        anchor: AnchorHandle,
    ) -> Self {
        Self { config, env, binding, bridge, anchor, transitioning: AtomicBool::new(false) }
    }

    /// The configuration this orchestrator was built with
    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }

    /// The anchor handle
    pub fn anchor(&self) -> &AnchorHandle {
        &self.anchor
    }

    /// The preference bridge
    pub fn bridge(&self) -> &PreferenceBridge {
        &self.bridge
    }

    /// Current theme state, read from the binding
    pub fn is_dark(&self) -> bool {
        self.binding.is_dark()
    }

    /// Whether a transition is in flight
    pub fn is_transitioning(&self) -> bool {
        self.transitioning.load(Ordering::SeqCst)
    }

    /// Current state machine state
    pub fn state(&self) -> TransitionState {
        if self.is_transitioning() {
            TransitionState::Transitioning
        } else {
            TransitionState::Idle
        }
    }

    /// The single update path: write through the binding, then reflect the
    /// binding's value onto the document
    pub fn commit(&self, dark: bool, source: UpdateSource) {
        self.binding.set_dark(dark);
        let effective = self.sync_document();

        if source == UpdateSource::Explicit {
            self.bridge.persist(effective);
        }
        tracing::debug!(dark = effective, ?source, "theme committed");
    }

    /// Apply the marker class for the binding's current value, returning it
    pub fn sync_document(&self) -> bool {
        let dark = self.binding.is_dark();
        if let Some(document) = &self.env.document {
            document.set_root_class(&self.config.marker_class, dark);
        }
        dark
    }

    /// Flip the theme, unless a transition is already in flight
    pub async fn toggle_theme(self: &Arc<Self>) {
        // Claim the flag before anything else so concurrent toggles cannot
        // both get through
        if self
            .transitioning
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::debug!("toggle rejected, transition in flight");
            return;
        }
        let target = !self.binding.is_dark();
        self.switch_to(target, true).await;
    }

    /// Switch to `dark`, animating when the environment allows it
    pub async fn set_theme(self: &Arc<Self>, dark: bool) {
        self.switch_to(dark, false).await;
    }

    /// `claimed` is set when the caller already raised the transitioning
    /// flag and must have it released if no transition starts
    async fn switch_to(self: &Arc<Self>, dark: bool, claimed: bool) {
        if self.binding.is_dark() == dark {
            tracing::trace!(dark, "theme already active");
            self.release(claimed);
            return;
        }

        let document = match self.animation_target() {
            Ok(document) => document,
            Err(reason) => {
                tracing::debug!(reason, "switching theme without animation");
                self.commit(dark, UpdateSource::Explicit);
                self.release(claimed);
                return;
            }
        };

        self.ensure_base_styles();

        let element =
            if self.config.animation.uses_anchor() { self.anchor.element() } else { None };
        let anchor = Anchor::resolve(document.as_ref(), element.as_ref());
        let styles = self.env.styles.as_ref();

        styles.clear(&self.config.style_id);
        if let Some(fragment) = synth::synthesize(&self.config, &anchor) {
            fragment.inject(styles);
        }

        self.transitioning.store(true, Ordering::SeqCst);
        tracing::debug!(
            dark,
            kind = %self.config.animation,
            x = anchor.origin.x,
            y = anchor.origin.y,
            "starting theme transition"
        );

        let applied = Arc::new(AtomicBool::new(false));
        let update = {
            let this = Arc::clone(self);
            let applied = Arc::clone(&applied);
            Box::new(move || {
                this.commit(dark, UpdateSource::Explicit);
                applied.store(true, Ordering::SeqCst);
            })
        };

        let mut transition = match self.env.transitions.start_view_transition(update) {
            Ok(transition) => transition,
            Err(e) => {
                tracing::warn!("failed to start view transition: {}", e);
                styles.clear(&self.config.style_id);
                self.transitioning.store(false, Ordering::SeqCst);
                if !applied.load(Ordering::SeqCst) {
                    self.commit(dark, UpdateSource::Explicit);
                }
                return;
            }
        };

        if self.config.animation == AnimationKind::Circle {
            synth::circle_reveal(&self.config, &anchor).inject(styles);
        }

        if let Err(e) = transition.ready().await {
            tracing::warn!("view transition did not become ready: {}", e);
        }
        self.schedule_cleanup();
    }

    fn release(&self, claimed: bool) {
        if claimed {
            self.transitioning.store(false, Ordering::SeqCst);
        }
    }

    /// Remove the fragment and clear the flag after the configured delay
    fn schedule_cleanup(self: &Arc<Self>) {
        let this = Arc::clone(self);
        let delay = self.config.cleanup_delay();

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            this.env.styles.clear(&this.config.style_id);
            this.transitioning.store(false, Ordering::SeqCst);
            tracing::debug!(delay_ms = delay.as_millis() as u64, "theme transition cleaned up");
        });
    }

    /// The document to animate on, or why animation is not possible
    fn animation_target(&self) -> Result<Arc<dyn Document>, &'static str> {
        let Some(document) = self.env.document.clone() else {
            return Err("no document");
        };

        match self.env.transitions.supports_view_transitions() {
            Ok(true) => {}
            Ok(false) => return Err("view transitions unsupported"),
            Err(e) => {
                tracing::debug!("view transition capability probe failed: {}", e);
                return Err("view transition capability unavailable");
            }
        }

        if self.env.preferences.prefers_reduced_motion() {
            return Err("reduced motion requested");
        }

        if self.config.animation == AnimationKind::None {
            return Err("animation disabled");
        }

        Ok(document)
    }

    /// Inject the base reset stylesheet once; it stays for the process lifetime
    fn ensure_base_styles(&self) {
        let styles = self.env.styles.as_ref();
        if !styles.contains(ids::BASE_STYLE_ID) {
            styles.set(ids::BASE_STYLE_ID, &synth::base_reset());
        }
    }
}

impl std::fmt::Debug for TransitionOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionOrchestrator")
            .field("animation", &self.config.animation)
            .field("is_dark", &self.is_dark())
            .field("state", &self.state())
            .finish()
    }
}
