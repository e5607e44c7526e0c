//! theme-shift
//!
//! Animated light/dark theme switching on top of a host's view transition
//! primitive. The workspace is split into:
//!
//! - [`storage`] - persistent key-value capability and the remembered theme mode
//! - [`host`] - document, style, preference and view transition capabilities
//! - [`styles`] - transition configuration and stylesheet synthesis
//! - [`orchestrator`] - the transition state machine and the [`ThemeSwitch`] facade
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use theme_shift::host::{HeadlessDocument, ImmediateViewTransitions};
//! use theme_shift::styles::{AnimationKind, TransitionConfig};
//! use theme_shift::{Environment, ThemeSwitch};
//!
//! #[tokio::main]
//! async fn main() {
//!     let env = Environment::headless()
//!         .with_document(Arc::new(HeadlessDocument::default()))
//!         .with_transitions(Arc::new(ImmediateViewTransitions::new()));
//!
//!     let switch = ThemeSwitch::builder(env)
//!         .config(TransitionConfig::default().animation(AnimationKind::BlurCircle))
//!         .build()
//!         .unwrap();
//!
//!     switch.anchor().bind("theme-toggle");
//!     switch.toggle_theme().await;
//! }
//! ```

pub use host;
pub use orchestrator;
pub use storage;
pub use styles;

pub use crate::orchestrator::{Environment, ExternalTheme, ThemeSwitch, TransitionState};
pub use crate::styles::{AnimationKind, SlideDirection, TransitionConfig};
