//! Transition styling for theme-shift
//!
//! This crate turns a [`TransitionConfig`] and the geometry of the current
//! document into the temporary stylesheet fragments that drive a theme
//! switch animation.
//!
//! # Animation kinds
//!
//! - [`AnimationKind::Circle`] - clip-path circle grows from the anchor
//! - [`AnimationKind::BlurCircle`] - soft-edged radial mask grows from the anchor
//! - [`AnimationKind::Fade`] - symmetric cross-fade
//! - [`AnimationKind::Slide`] - new theme slides in from one edge
//! - [`AnimationKind::None`] - no fragment, instant switch
//!
//! # Modules
//!
//! - [`config`] - Transition configuration, builder and validation
//! - [`tokens`] - Duration, easing and identifier defaults
//! - [`geometry`] - Anchor point and reveal radius
//! - [`synth`] - Stylesheet fragment synthesis
//!
//! # Example
//!
//! ```rust
//! use styles::{synth, AnimationKind, TransitionConfig};
//!
//! let config = TransitionConfig::default()
//!     .animation(AnimationKind::Fade)
//!     .duration_ms(500);
//! assert!(config.validate().is_ok());
//!
//! let fragment = synth::fade(&config);
//! assert!(fragment.css.contains(synth::FADE_IN));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod geometry;
pub mod synth;
pub mod tokens;

// Re-export commonly used types
pub use config::{AnimationKind, ConfigError, SlideDirection, TransitionConfig};
pub use geometry::{max_radius, resolve_anchor, Anchor, Point};
pub use synth::StyleFragment;
