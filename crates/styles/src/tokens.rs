//! Design tokens for theme transitions
//!
//! Durations, easing curves and the default identifiers the orchestrator
//! uses when nothing else is configured.

// =============================================================================
// Duration Tokens
// =============================================================================

/// Animation durations in milliseconds
pub mod duration {
    /// Default theme switch (750ms)
    pub const DEFAULT: u64 = 750;
}

// =============================================================================
// Easing Tokens
// =============================================================================

/// Easing functions
pub mod easing {
    /// Ease in out
    pub const EASE_IN_OUT: &str = "cubic-bezier(0.4, 0, 0.2, 1)";
    /// Default theme switch curve
    pub const DEFAULT: &str = EASE_IN_OUT;

    /// CSS easing keywords accepted without arguments
    pub const KEYWORDS: &[&str] =
        &["linear", "ease", "ease-in", "ease-out", "ease-in-out", "step-start", "step-end"];
}

// =============================================================================
// Identifier Tokens
// =============================================================================

/// Default names used on the host document
pub mod ids {
    /// Marker class toggled on the root element for the dark theme
    pub const MARKER_CLASS: &str = "dark";
    /// Storage key for the remembered theme
    pub const STORAGE_KEY: &str = "theme";
    /// Identifier of the per-transition style fragment
    pub const STYLE_ID: &str = "theme-switch-style";
    /// Identifier of the base reset style fragment
    pub const BASE_STYLE_ID: &str = "theme-switch-base-style";
}

/// Default blur intensity for the blur-circle animation
pub const BLUR_AMOUNT: f64 = 2.0;

/// Blur-circle mask grows to the viewport diagonal times this factor
pub const BLUR_CIRCLE_SCALE: f64 = 5.5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_easing_is_keyword_free_curve() {
        assert!(easing::DEFAULT.starts_with("cubic-bezier("));
        assert!(!easing::KEYWORDS.contains(&easing::DEFAULT));
    }
}
