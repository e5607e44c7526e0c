//! Transition configuration
//!
//! A [`TransitionConfig`] is supplied once when a theme switch is set up and
//! is never mutated afterwards. Reconfiguring means building a new switch.
//!
//! # Usage
//!
//! ```rust
//! use styles::config::{AnimationKind, SlideDirection, TransitionConfig};
//!
//! let config = TransitionConfig::default()
//!     .animation(AnimationKind::Slide)
//!     .slide_direction(SlideDirection::Up)
//!     .duration_ms(400);
//! assert!(config.validate().is_ok());
//!
//! let parsed = TransitionConfig::from_json(r#"{"animation": "blur-circle", "blurAmount": 4}"#)
//!     .unwrap();
//! assert_eq!(parsed.animation, AnimationKind::BlurCircle);
//! assert_eq!(parsed.duration_ms, 750);
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::tokens::{self, easing, ids};

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Duration must be strictly positive
    #[error("Invalid duration: must be greater than 0ms")]
    InvalidDuration,

    /// Easing is not a recognized CSS easing function
    #[error("Invalid easing: {0}")]
    InvalidEasing(String),

    /// Blur intensity must be finite and non-negative
    #[error("Invalid blur amount: {0}")]
    InvalidBlur(f64),

    /// A document identifier was empty
    #[error("Empty identifier: {0}")]
    EmptyIdentifier(&'static str),

    /// Configuration JSON could not be parsed
    #[error("Configuration parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

// =============================================================================
// Animation Kind
// =============================================================================

/// Built-in theme switch animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationKind {
    /// Circular clip reveal centered on the anchor
    #[default]
    Circle,
    /// Soft-edged radial mask reveal centered on the anchor
    BlurCircle,
    /// Opacity cross-fade
    Fade,
    /// New theme slides in from an edge
    Slide,
    /// Instant switch, no animation
    None,
}

impl AnimationKind {
    /// Get the kind's configuration name
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationKind::Circle => "circle",
            AnimationKind::BlurCircle => "blur-circle",
            AnimationKind::Fade => "fade",
            AnimationKind::Slide => "slide",
            AnimationKind::None => "none",
        }
    }

    /// Whether the animation emanates from the anchor point
    pub fn uses_anchor(&self) -> bool {
        matches!(self, AnimationKind::Circle | AnimationKind::BlurCircle)
    }
}

impl std::fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AnimationKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "circle" => Ok(AnimationKind::Circle),
            "blur-circle" => Ok(AnimationKind::BlurCircle),
            "fade" => Ok(AnimationKind::Fade),
            "slide" => Ok(AnimationKind::Slide),
            "none" => Ok(AnimationKind::None),
            _ => Err(format!("Unknown animation kind: {}", s)),
        }
    }
}

// =============================================================================
// Slide Direction
// =============================================================================

/// Direction the new theme travels when sliding in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SlideDirection {
    /// Enters from below, moving up
    Up,
    /// Enters from above, moving down
    Down,
    /// Enters from the right, moving left
    Left,
    /// Enters from the left, moving right
    #[default]
    Right,
}

impl SlideDirection {
    /// Starting `(x, y)` translation of the entering snapshot
    pub fn start_offset(&self) -> (&'static str, &'static str) {
        match self {
            SlideDirection::Up => ("0", "100%"),
            SlideDirection::Down => ("0", "-100%"),
            SlideDirection::Left => ("100%", "0"),
            SlideDirection::Right => ("-100%", "0"),
        }
    }
}

impl std::str::FromStr for SlideDirection {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" => Ok(SlideDirection::Up),
            "down" => Ok(SlideDirection::Down),
            "left" => Ok(SlideDirection::Left),
            "right" => Ok(SlideDirection::Right),
            _ => Err(format!("Unknown slide direction: {}", s)),
        }
    }
}

// =============================================================================
// Transition Config
// =============================================================================

/// Per-switch transition settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransitionConfig {
    /// Animation duration in milliseconds
    pub duration_ms: u64,
    /// CSS easing function
    pub easing: String,
    /// Animation kind
    pub animation: AnimationKind,
    /// Blur intensity (blur-circle only)
    pub blur_amount: f64,
    /// Slide direction (slide only)
    pub slide_direction: SlideDirection,
    /// Class toggled on the root element while dark
    pub marker_class: String,
    /// Storage key for the remembered theme
    pub storage_key: String,
    /// Identifier of the injected style fragment
    pub style_id: String,
    /// Fall back to the ambient color scheme when nothing is stored
    pub respect_system_preference: bool,
    /// Extra delay before cleanup, on top of the duration
    pub cleanup_grace_ms: u64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_ms: tokens::duration::DEFAULT,
            easing: easing::DEFAULT.to_string(),
            animation: AnimationKind::default(),
            blur_amount: tokens::BLUR_AMOUNT,
            slide_direction: SlideDirection::default(),
            marker_class: ids::MARKER_CLASS.to_string(),
            storage_key: ids::STORAGE_KEY.to_string(),
            style_id: ids::STYLE_ID.to_string(),
            respect_system_preference: true,
            cleanup_grace_ms: 0,
        }
    }
}

impl TransitionConfig {
    /// Parse and validate a JSON configuration; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the duration in milliseconds
    pub fn duration_ms(mut self, ms: u64) -> Self {
        self.duration_ms = ms;
        self
    }

    /// Set the easing function
    pub fn easing(mut self, easing: impl Into<String>) -> Self {
        self.easing = easing.into();
        self
    }

    /// Set the animation kind
    pub fn animation(mut self, kind: AnimationKind) -> Self {
        self.animation = kind;
        self
    }

    /// Set the blur intensity
    pub fn blur_amount(mut self, amount: f64) -> Self {
        self.blur_amount = amount;
        self
    }

    /// Set the slide direction
    pub fn slide_direction(mut self, direction: SlideDirection) -> Self {
        self.slide_direction = direction;
        self
    }

    /// Set the root marker class
    pub fn marker_class(mut self, class: impl Into<String>) -> Self {
        self.marker_class = class.into();
        self
    }

    /// Set the storage key
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Set the style fragment identifier
    pub fn style_id(mut self, id: impl Into<String>) -> Self {
        self.style_id = id.into();
        self
    }

    /// Enable or disable the ambient color scheme fallback
    pub fn respect_system_preference(mut self, enabled: bool) -> Self {
        self.respect_system_preference = enabled;
        self
    }

    /// Set the cleanup grace margin in milliseconds
    pub fn cleanup_grace_ms(mut self, ms: u64) -> Self {
        self.cleanup_grace_ms = ms;
        self
    }

    /// Delay between transition readiness and fragment cleanup
    pub fn cleanup_delay(&self) -> Duration {
        Duration::from_millis(self.duration_ms.saturating_add(self.cleanup_grace_ms))
    }

    /// Check every field against its constraints
    pub fn validate(&self) -> Result<()> {
        if self.duration_ms == 0 {
            return Err(ConfigError::InvalidDuration);
        }
        if !is_valid_easing(&self.easing) {
            return Err(ConfigError::InvalidEasing(self.easing.clone()));
        }
        if !self.blur_amount.is_finite() || self.blur_amount < 0.0 {
            return Err(ConfigError::InvalidBlur(self.blur_amount));
        }
        if self.marker_class.trim().is_empty() {
            return Err(ConfigError::EmptyIdentifier("marker_class"));
        }
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyIdentifier("storage_key"));
        }
        if self.style_id.trim().is_empty() {
            return Err(ConfigError::EmptyIdentifier("style_id"));
        }
        Ok(())
    }
}

// =============================================================================
// Easing Validation
// =============================================================================

/// Whether `value` is a CSS easing function this crate can emit
pub fn is_valid_easing(value: &str) -> bool {
    let value = value.trim();
    if easing::KEYWORDS.contains(&value) {
        return true;
    }

    if let Some(args) = function_args(value, "cubic-bezier") {
        let points: Vec<f64> = args.iter().filter_map(|a| a.parse().ok()).collect();
        return args.len() == 4
            && points.len() == 4
            && points.iter().all(|p| p.is_finite())
            && (0.0..=1.0).contains(&points[0])
            && (0.0..=1.0).contains(&points[2]);
    }

    if let Some(args) = function_args(value, "steps") {
        let count_ok = args
            .first()
            .and_then(|n| n.parse::<u32>().ok())
            .is_some_and(|n| n > 0);
        let position_ok = match args.get(1) {
            None => true,
            Some(p) => matches!(
                *p,
                "jump-start" | "jump-end" | "jump-none" | "jump-both" | "start" | "end"
            ),
        };
        return count_ok && position_ok && args.len() <= 2;
    }

    if let Some(args) = function_args(value, "linear") {
        return !args.is_empty()
            && args.iter().all(|stop| {
                stop.split_whitespace()
                    .next()
                    .and_then(|n| n.parse::<f64>().ok())
                    .is_some()
            });
    }

    false
}

/// Split `name(a, b, c)` into trimmed arguments
fn function_args<'a>(value: &'a str, name: &str) -> Option<Vec<&'a str>> {
    let inner = value.strip_prefix(name)?.trim_start().strip_prefix('(')?.strip_suffix(')')?;
    if inner.trim().is_empty() {
        return Some(Vec::new());
    }
    Some(inner.split(',').map(str::trim).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TransitionConfig::default();
        assert_eq!(config.duration_ms, 750);
        assert_eq!(config.easing, easing::EASE_IN_OUT);
        assert_eq!(config.animation, AnimationKind::Circle);
        assert_eq!(config.blur_amount, 2.0);
        assert_eq!(config.slide_direction, SlideDirection::Right);
        assert_eq!(config.marker_class, "dark");
        assert_eq!(config.storage_key, "theme");
        assert_eq!(config.style_id, ids::STYLE_ID);
        assert!(config.respect_system_preference);
        assert_eq!(config.cleanup_grace_ms, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = TransitionConfig::default()
            .duration_ms(300)
            .easing("ease-out")
            .animation(AnimationKind::BlurCircle)
            .blur_amount(6.0)
            .slide_direction(SlideDirection::Down)
            .marker_class("theme-dark")
            .storage_key("app-theme")
            .style_id("switch")
            .respect_system_preference(false)
            .cleanup_grace_ms(50);

        assert_eq!(config.duration_ms, 300);
        assert_eq!(config.cleanup_delay(), Duration::from_millis(350));
        assert_eq!(config.easing, "ease-out");
        assert_eq!(config.animation, AnimationKind::BlurCircle);
        assert_eq!(config.slide_direction, SlideDirection::Down);
        assert_eq!(config.marker_class, "theme-dark");
        assert!(!config.respect_system_preference);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_duration() {
        let config = TransitionConfig::default().duration_ms(0);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidDuration)));
    }

    #[test]
    fn test_validate_rejects_bad_blur() {
        let config = TransitionConfig::default().blur_amount(-1.0);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidBlur(_))));

        let config = TransitionConfig::default().blur_amount(f64::NAN);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidBlur(_))));
    }

    #[test]
    fn test_validate_rejects_empty_identifiers() {
        let config = TransitionConfig::default().style_id("  ");
        assert!(matches!(config.validate(), Err(ConfigError::EmptyIdentifier("style_id"))));

        let config = TransitionConfig::default().marker_class("");
        assert!(matches!(config.validate(), Err(ConfigError::EmptyIdentifier("marker_class"))));
    }

    #[test]
    fn test_easing_validation() {
        assert!(is_valid_easing("linear"));
        assert!(is_valid_easing("ease-in-out"));
        assert!(is_valid_easing("cubic-bezier(0.4, 0, 0.2, 1)"));
        assert!(is_valid_easing("cubic-bezier(0.34, 1.56, 0.64, 1)"));
        assert!(is_valid_easing("steps(4, jump-end)"));
        assert!(is_valid_easing("steps(3)"));
        assert!(is_valid_easing("linear(0, 0.25 75%, 1)"));

        assert!(!is_valid_easing(""));
        assert!(!is_valid_easing("bouncy"));
        assert!(!is_valid_easing("cubic-bezier(1.5, 0, 0.2, 1)"));
        assert!(!is_valid_easing("cubic-bezier(0.4, 0, 0.2)"));
        assert!(!is_valid_easing("steps(0)"));
        assert!(!is_valid_easing("steps(2, sideways)"));
        assert!(!is_valid_easing("linear()"));
    }

    #[test]
    fn test_from_json_with_defaults() {
        let config =
            TransitionConfig::from_json(r#"{"animation": "slide", "slideDirection": "left"}"#)
                .unwrap();
        assert_eq!(config.animation, AnimationKind::Slide);
        assert_eq!(config.slide_direction, SlideDirection::Left);
        assert_eq!(config.duration_ms, 750);
        assert_eq!(config.storage_key, "theme");
    }

    #[test]
    fn test_from_json_validates() {
        let result = TransitionConfig::from_json(r#"{"durationMs": 0}"#);
        assert!(matches!(result, Err(ConfigError::InvalidDuration)));

        let result = TransitionConfig::from_json(r#"{"animation": "spiral"}"#);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = TransitionConfig::default().animation(AnimationKind::None);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"animation\":\"none\""));
        assert!(json.contains("\"respectSystemPreference\":true"));

        let parsed: TransitionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_animation_kind_from_str() {
        assert_eq!("circle".parse::<AnimationKind>().unwrap(), AnimationKind::Circle);
        assert_eq!("Blur-Circle".parse::<AnimationKind>().unwrap(), AnimationKind::BlurCircle);
        assert_eq!(AnimationKind::Fade.to_string(), "fade");
        assert!("spiral".parse::<AnimationKind>().is_err());

        assert!(AnimationKind::Circle.uses_anchor());
        assert!(AnimationKind::BlurCircle.uses_anchor());
        assert!(!AnimationKind::Slide.uses_anchor());
    }

    #[test]
    fn test_slide_direction_offsets() {
        assert_eq!(SlideDirection::Up.start_offset(), ("0", "100%"));
        assert_eq!(SlideDirection::Down.start_offset(), ("0", "-100%"));
        assert_eq!(SlideDirection::Left.start_offset(), ("100%", "0"));
        assert_eq!(SlideDirection::Right.start_offset(), ("-100%", "0"));
        assert_eq!("UP".parse::<SlideDirection>().unwrap(), SlideDirection::Up);
    }
}
