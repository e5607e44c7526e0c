//! Theme switch orchestration for theme-shift
//!
//! This crate sequences a light/dark theme switch through the host's view
//! transition primitive: capture the old visual state, mutate the theme
//! synchronously, let the platform interpolate, then clean up.
//!
//! # Components
//!
//! - [`bridge`] - initial theme resolution, persistence, ambient preference subscription
//! - [`binding`] - single source of truth for the theme flag (internal or caller-owned)
//! - [`orchestrator`] - the Idle / Transitioning state machine
//! - [`switch`] - the public facade, [`ThemeSwitch`]
//!
//! # Example
//!
//! ```no_run
//! use orchestrator::{Environment, ThemeSwitch};
//! use styles::{AnimationKind, TransitionConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let switch = ThemeSwitch::builder(Environment::headless())
//!         .config(TransitionConfig::default().animation(AnimationKind::Fade))
//!         .build()
//!         .unwrap();
//!
//!     switch.toggle_theme().await;
//!     assert!(switch.is_dark_mode());
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod anchor;
pub mod binding;
pub mod bridge;
pub mod environment;
pub mod orchestrator;
pub mod switch;

pub use anchor::AnchorHandle;
pub use binding::{ExternalTheme, LocalTheme, ThemeBinding};
pub use bridge::{AmbientSubscription, PreferenceBridge};
pub use environment::Environment;
pub use orchestrator::{TransitionOrchestrator, TransitionState, UpdateSource};
pub use switch::{ThemeSwitch, ThemeSwitchBuilder};
