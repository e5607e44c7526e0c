//! Theme switch facade

use std::sync::Arc;
use styles::{ConfigError, TransitionConfig};

use crate::anchor::AnchorHandle;
use crate::binding::{ExternalTheme, LocalTheme, ThemeBinding};
use crate::bridge::{AmbientSubscription, PreferenceBridge};
use crate::environment::Environment;
use crate::orchestrator::{TransitionOrchestrator, TransitionState, UpdateSource};

/// Public entry point: an animated light/dark theme switch
///
/// Building the switch mounts it: the initial theme is resolved, the marker
/// class applied and, when configured, ambient color scheme changes are
/// followed until the switch is dropped.
pub struct ThemeSwitch {
    orchestrator: Arc<TransitionOrchestrator>,
    ambient: Option<AmbientSubscription>,
}

impl ThemeSwitch {
    /// Start building a switch against `env`
    pub fn builder(env: Environment) -> ThemeSwitchBuilder {
        ThemeSwitchBuilder::new(env)
    }

    /// Handle to bind the element animations emanate from
    pub fn anchor(&self) -> AnchorHandle {
        self.orchestrator.anchor().clone()
    }

    /// Flip the theme; ignored while a transition is in flight
    pub async fn toggle_theme(&self) {
        self.orchestrator.toggle_theme().await;
    }

    /// Switch to the given theme
    pub async fn set_theme(&self, dark: bool) {
        self.orchestrator.set_theme(dark).await;
    }

    /// Current theme state
    pub fn is_dark_mode(&self) -> bool {
        self.orchestrator.is_dark()
    }

    /// Whether a transition is in flight
    pub fn is_transitioning(&self) -> bool {
        self.orchestrator.is_transitioning()
    }

    /// Current orchestrator state
    pub fn transition_state(&self) -> TransitionState {
        self.orchestrator.state()
    }

    /// Re-apply the marker class from the current binding value.
    ///
    /// Call after changing caller-owned state outside the switch.
    pub fn refresh(&self) -> bool {
        self.orchestrator.sync_document()
    }

    /// Whether ambient color scheme changes are being followed
    pub fn follows_ambient(&self) -> bool {
        self.ambient.as_ref().is_some_and(AmbientSubscription::is_active)
    }

    /// Active configuration
    pub fn config(&self) -> &TransitionConfig {
        self.orchestrator.config()
    }
}

impl std::fmt::Debug for ThemeSwitch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeSwitch")
            .field("orchestrator", &self.orchestrator)
            .field("ambient", &self.ambient)
            .finish()
    }
}

/// Builder for [`ThemeSwitch`]
#[derive(Debug)]
pub struct ThemeSwitchBuilder {
    env: Environment,
    config: TransitionConfig,
    external: Option<ExternalTheme>,
}

impl ThemeSwitchBuilder {
    fn new(env: Environment) -> Self {
        Self { env, config: TransitionConfig::default(), external: None }
    }

    /// Set the transition configuration
    pub fn config(mut self, config: TransitionConfig) -> Self {
        self.config = config;
        self
    }

    /// Let the caller own the theme state
    pub fn external(mut self, binding: ExternalTheme) -> Self {
        self.external = Some(binding);
        self
    }

    /// Validate the configuration and mount the switch.
    ///
    /// Following ambient changes spawns a task on the current tokio
    /// runtime. Built outside a runtime, the switch still mounts but does
    /// not follow ambient changes.
    pub fn build(self) -> Result<ThemeSwitch, ConfigError> {
        self.config.validate()?;

        let bridge = PreferenceBridge::new(
            self.env.store.clone(),
            self.env.preferences.clone(),
            &self.config,
            self.env.has_document(),
        );

        let binding: Arc<dyn ThemeBinding> = match self.external {
            Some(external) => Arc::new(external),
            None => Arc::new(LocalTheme::new(bridge.resolve_initial_theme())),
        };

        let mut follow_ambient =
            self.config.respect_system_preference && self.env.has_document();
        if follow_ambient && tokio::runtime::Handle::try_current().is_err() {
            tracing::warn!("no tokio runtime, ambient color scheme changes will not be followed");
            follow_ambient = false;
        }
        let orchestrator = Arc::new(TransitionOrchestrator::new(
            self.config,
            self.env,
            binding,
            bridge.clone(),
            AnchorHandle::new(),
        ));

        let dark = orchestrator.sync_document();
        tracing::debug!(
            dark,
            animation = %orchestrator.config().animation,
            follow_ambient,
            "theme switch mounted"
        );

        let ambient = follow_ambient.then(|| {
            let weak = Arc::downgrade(&orchestrator);
            bridge.subscribe_ambient(move |dark| {
                if let Some(orchestrator) = weak.upgrade() {
                    orchestrator.commit(dark, UpdateSource::Ambient);
                }
            })
        });

        Ok(ThemeSwitch { orchestrator, ambient })
    }
}
