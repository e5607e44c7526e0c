//! Host-document capabilities for theme-shift
//!
//! The theme orchestrator never talks to a real document directly. It goes
//! through the small capability traits defined here:
//!
//! - [`Document`] - root marker class, element geometry, viewport size
//! - [`StyleInjector`] - identifier-keyed stylesheet fragments
//! - [`ViewTransitionApi`] / [`ViewTransition`] - the platform's visual
//!   transition primitive (start / ready / finished)
//! - [`PreferenceSource`] - ambient color scheme and reduced-motion signals
//!
//! Each capability ships with a headless in-memory implementation so the
//! orchestrator can run without a browser.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod error;
pub mod preference;
pub mod style;
pub mod transition;

pub use document::{Document, ElementId, HeadlessDocument, Rect, Viewport};
pub use error::{PlatformError, Result};
pub use preference::{ManualPreferences, PreferenceSource};
pub use style::{MemoryStyleInjector, StyleInjector};
pub use transition::{
    CompletedTransition, DomUpdate, ImmediateViewTransitions, NoViewTransitions, ViewTransition,
    ViewTransitionApi,
};
