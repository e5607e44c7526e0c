//! Stylesheet synthesis for theme transitions
//!
//! Every animated transition owns one fragment, stored under the configured
//! style identifier. Fragments are injected with remove-then-create
//! discipline so at most one exists per identifier.
//!
//! The circle kind is built in two steps: [`circle_prelude`] is injected
//! before the platform transition starts, and [`circle_reveal`] replaces it
//! right after, once the anchor geometry is final.

use host::{StyleInjector, Viewport};
use std::fmt::Write;

use crate::config::{AnimationKind, TransitionConfig};
use crate::geometry::{Anchor, Point};
use crate::tokens::BLUR_CIRCLE_SCALE;

/// Keyframes revealing the new theme through a growing clip circle
pub const CIRCLE_REVEAL: &str = "theme-circle-reveal";
/// Keyframes growing the blur-circle mask
pub const BLUR_CIRCLE_EXPAND: &str = "theme-blur-circle-expand";
/// Keyframes fading the new theme in
pub const FADE_IN: &str = "theme-fade-in";
/// Keyframes fading the old theme out
pub const FADE_OUT: &str = "theme-fade-out";
/// Keyframes sliding the new theme in
pub const SLIDE_IN: &str = "theme-slide-in";

/// Number of intermediate mask positions in the blur-circle keyframes
const BLUR_CIRCLE_STEPS: u32 = 4;

/// A synthesized stylesheet fragment
#[derive(Debug, Clone, PartialEq)]
pub struct StyleFragment {
    /// Identifier the fragment is injected under
    pub id: String,
    /// Stylesheet text
    pub css: String,
    /// Names of the keyframes the fragment defines
    pub keyframes: Vec<&'static str>,
}

impl StyleFragment {
    fn new(config: &TransitionConfig, css: String, keyframes: Vec<&'static str>) -> Self {
        Self { id: config.style_id.clone(), css, keyframes }
    }

    /// Replace whatever is stored under this fragment's id with this fragment
    pub fn inject(&self, styles: &dyn StyleInjector) {
        styles.clear(&self.id);
        styles.set(&self.id, &self.css);
    }
}

/// Stylesheet that turns off the platform's default cross-fade so only
/// synthesized fragments animate
pub fn base_reset() -> String {
    "::view-transition-old(root),\n\
     ::view-transition-new(root) {\n  \
     animation: none;\n  \
     mix-blend-mode: normal;\n\
     }\n"
        .to_string()
}

/// Build the pre-transition fragment for the configured kind.
///
/// Returns `None` for [`AnimationKind::None`]. For the circle kind this is
/// only the prelude; the reveal is built by [`circle_reveal`].
pub fn synthesize(config: &TransitionConfig, anchor: &Anchor) -> Option<StyleFragment> {
    let fragment = match config.animation {
        AnimationKind::Circle => circle_prelude(config),
        AnimationKind::BlurCircle => blur_circle(config, anchor.origin, anchor.viewport),
        AnimationKind::Fade => fade(config),
        AnimationKind::Slide => slide(config),
        AnimationKind::None => return None,
    };
    tracing::trace!(kind = %config.animation, id = %fragment.id, "synthesized style fragment");
    Some(fragment)
}

/// Group timing for the circle kind, injected before the transition starts
pub fn circle_prelude(config: &TransitionConfig) -> StyleFragment {
    StyleFragment::new(config, group_timing(config), Vec::new())
}

/// Full circle reveal: clip circle from radius 0 to `anchor.max_radius`
pub fn circle_reveal(config: &TransitionConfig, anchor: &Anchor) -> StyleFragment {
    let Point { x, y } = anchor.origin;
    let mut css = group_timing(config);

    let _ = write!(
        css,
        "::view-transition-new(root) {{\n  animation: {name} {d}ms {e} forwards;\n}}\n\
         ::view-transition-old(root) {{\n  animation: none;\n}}\n\
         @keyframes {name} {{\n  \
         from {{ clip-path: circle(0px at {x}px {y}px); }}\n  \
         to {{ clip-path: circle({r}px at {x}px {y}px); }}\n}}\n",
        name = CIRCLE_REVEAL,
        d = config.duration_ms,
        e = config.easing,
        x = num(x),
        y = num(y),
        r = num(anchor.max_radius),
    );

    StyleFragment::new(config, css, vec![CIRCLE_REVEAL])
}

/// Soft-edged radial mask growing from the anchor to the viewport diagonal
/// times [`BLUR_CIRCLE_SCALE`], with the old theme fading out behind it
pub fn blur_circle(config: &TransitionConfig, origin: Point, viewport: Viewport) -> StyleFragment {
    let final_size = viewport.diagonal() * BLUR_CIRCLE_SCALE;
    // Each unit of blur feathers 5% of the mask radius
    let solid_stop = (100.0 - config.blur_amount * 5.0).clamp(0.0, 100.0);
    let gradient = format!(
        "radial-gradient(circle closest-side, #000 0%, #000 {}%, transparent 100%)",
        num(solid_stop)
    );

    let mut css = group_timing(config);
    let _ = write!(
        css,
        "::view-transition-old(root) {{\n  animation: {fade_out} {d}ms {e} forwards;\n  z-index: 1;\n}}\n\
         ::view-transition-new(root) {{\n  z-index: 2;\n  \
         mask-image: {g};\n  -webkit-mask-image: {g};\n  \
         mask-repeat: no-repeat;\n  -webkit-mask-repeat: no-repeat;\n  \
         animation: {expand} {d}ms {e} forwards;\n}}\n",
        fade_out = FADE_OUT,
        expand = BLUR_CIRCLE_EXPAND,
        d = config.duration_ms,
        e = config.easing,
        g = gradient,
    );

    let _ = writeln!(css, "@keyframes {} {{", BLUR_CIRCLE_EXPAND);
    for step in 0..=BLUR_CIRCLE_STEPS {
        let t = f64::from(step) / f64::from(BLUR_CIRCLE_STEPS);
        let size = final_size * t;
        let _ = writeln!(
            css,
            "  {pct}% {{ mask-size: {s}px {s}px; mask-position: {px}px {py}px; }}",
            pct = num(t * 100.0),
            s = num(size),
            px = num(origin.x - size / 2.0),
            py = num(origin.y - size / 2.0),
        );
    }
    css.push_str("}\n");
    css.push_str(&opacity_keyframes(FADE_OUT, 1, 0));

    StyleFragment::new(config, css, vec![BLUR_CIRCLE_EXPAND, FADE_OUT])
}

/// Symmetric opacity cross-fade
pub fn fade(config: &TransitionConfig) -> StyleFragment {
    let mut css = group_timing(config);
    let _ = write!(
        css,
        "::view-transition-old(root) {{\n  animation: {out} {d}ms {e} forwards;\n}}\n\
         ::view-transition-new(root) {{\n  animation: {inn} {d}ms {e} forwards;\n}}\n",
        out = FADE_OUT,
        inn = FADE_IN,
        d = config.duration_ms,
        e = config.easing,
    );
    css.push_str(&opacity_keyframes(FADE_IN, 0, 1));
    css.push_str(&opacity_keyframes(FADE_OUT, 1, 0));

    StyleFragment::new(config, css, vec![FADE_IN, FADE_OUT])
}

/// New theme slides in from the configured edge while fading in
pub fn slide(config: &TransitionConfig) -> StyleFragment {
    let (dx, dy) = config.slide_direction.start_offset();
    let mut css = group_timing(config);
    let _ = write!(
        css,
        "::view-transition-old(root) {{\n  animation: {out} {d}ms {e} forwards;\n}}\n\
         ::view-transition-new(root) {{\n  animation: {slide} {d}ms {e} forwards;\n}}\n\
         @keyframes {slide} {{\n  \
         from {{ transform: translate({dx}, {dy}); opacity: 0; }}\n  \
         to {{ transform: translate(0, 0); opacity: 1; }}\n}}\n",
        out = FADE_OUT,
        slide = SLIDE_IN,
        d = config.duration_ms,
        e = config.easing,
    );
    css.push_str(&opacity_keyframes(FADE_OUT, 1, 0));

    StyleFragment::new(config, css, vec![SLIDE_IN, FADE_OUT])
}

fn group_timing(config: &TransitionConfig) -> String {
    format!(
        "::view-transition-group(root) {{\n  animation-duration: {}ms;\n  animation-timing-function: {};\n}}\n",
        config.duration_ms, config.easing
    )
}

fn opacity_keyframes(name: &str, from: u8, to: u8) -> String {
    format!("@keyframes {name} {{\n  from {{ opacity: {from}; }}\n  to {{ opacity: {to}; }}\n}}\n")
}

/// Format a pixel value with at most two decimals
fn num(value: f64) -> String {
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SlideDirection;
    use host::{HeadlessDocument, MemoryStyleInjector};

    fn anchor_at(x: f64, y: f64, viewport: Viewport) -> Anchor {
        let doc = HeadlessDocument::new(viewport);
        doc.place_element("toggle", host::Rect::new(x, y, 0.0, 0.0));
        Anchor::resolve(&doc, Some(&host::ElementId::new("toggle")))
    }

    #[test]
    fn test_num_formatting() {
        assert_eq!(num(141.4213), "141.42");
        assert_eq!(num(100.0), "100");
        assert_eq!(num(12.5), "12.5");
        assert_eq!(num(-0.001), "0");
    }

    #[test]
    fn test_base_reset_disables_default_animation() {
        let css = base_reset();
        assert!(css.contains("::view-transition-old(root)"));
        assert!(css.contains("::view-transition-new(root)"));
        assert!(css.contains("animation: none;"));
    }

    #[test]
    fn test_none_kind_has_no_fragment() {
        let config = TransitionConfig::default().animation(AnimationKind::None);
        let anchor = anchor_at(0.0, 0.0, Viewport::new(100.0, 100.0));
        assert_eq!(synthesize(&config, &anchor), None);
    }

    #[test]
    fn test_circle_prelude_only_sets_timing() {
        let config = TransitionConfig::default().duration_ms(600).easing("linear");
        let anchor = anchor_at(0.0, 0.0, Viewport::new(100.0, 100.0));
        let fragment = synthesize(&config, &anchor).unwrap();

        assert_eq!(fragment.id, config.style_id);
        assert!(fragment.keyframes.is_empty());
        assert!(fragment.css.contains("animation-duration: 600ms;"));
        assert!(fragment.css.contains("animation-timing-function: linear;"));
        assert!(!fragment.css.contains("@keyframes"));
    }

    #[test]
    fn test_circle_reveal_geometry() {
        let config = TransitionConfig::default().duration_ms(500).easing("ease");
        let anchor = anchor_at(0.0, 0.0, Viewport::new(100.0, 100.0));
        let fragment = circle_reveal(&config, &anchor);

        assert_eq!(fragment.keyframes, vec![CIRCLE_REVEAL]);
        assert!(fragment.css.contains("clip-path: circle(0px at 0px 0px)"));
        assert!(fragment.css.contains("clip-path: circle(141.42px at 0px 0px)"));
        assert!(fragment.css.contains("animation: theme-circle-reveal 500ms ease forwards;"));
    }

    #[test]
    fn test_blur_circle_grows_centered() {
        let config = TransitionConfig::default()
            .animation(AnimationKind::BlurCircle)
            .blur_amount(2.0);
        let fragment = blur_circle(&config, Point::new(150.0, 200.0), Viewport::new(300.0, 400.0));

        // diagonal 500 * 5.5
        assert!(fragment.css.contains("0% { mask-size: 0px 0px; mask-position: 150px 200px; }"));
        assert!(fragment
            .css
            .contains("100% { mask-size: 2750px 2750px; mask-position: -1225px -1175px; }"));
        assert!(fragment.css.contains("#000 90%"));
        assert!(fragment.css.contains("z-index: 1;"));
        assert_eq!(fragment.keyframes, vec![BLUR_CIRCLE_EXPAND, FADE_OUT]);
    }

    #[test]
    fn test_blur_amount_clamps_feather() {
        let config = TransitionConfig::default().blur_amount(40.0);
        let fragment = blur_circle(&config, Point::new(0.0, 0.0), Viewport::new(10.0, 10.0));
        assert!(fragment.css.contains("#000 0%, #000 0%"));
    }

    #[test]
    fn test_fade_defines_both_keyframes() {
        let config = TransitionConfig::default().animation(AnimationKind::Fade).duration_ms(500);
        let fragment = fade(&config);

        assert!(fragment.css.contains("@keyframes theme-fade-in"));
        assert!(fragment.css.contains("@keyframes theme-fade-out"));
        assert!(fragment.css.contains("from { opacity: 0; }"));
        assert!(fragment.css.contains("animation: theme-fade-out 500ms"));
        assert_eq!(fragment.keyframes, vec![FADE_IN, FADE_OUT]);
    }

    #[test]
    fn test_slide_offsets_per_direction() {
        let cases = [
            (SlideDirection::Up, "translate(0, 100%)"),
            (SlideDirection::Down, "translate(0, -100%)"),
            (SlideDirection::Left, "translate(100%, 0)"),
            (SlideDirection::Right, "translate(-100%, 0)"),
        ];

        for (direction, expected) in cases {
            let config = TransitionConfig::default()
                .animation(AnimationKind::Slide)
                .slide_direction(direction);
            let fragment = slide(&config);
            assert!(fragment.css.contains(expected), "{:?}", direction);
            assert!(fragment.css.contains("transform: translate(0, 0); opacity: 1;"));
        }
    }

    #[test]
    fn test_inject_replaces_existing_fragment() {
        let styles = MemoryStyleInjector::new();
        let config = TransitionConfig::default();
        styles.set(&config.style_id, "stale {}");

        let fragment = fade(&config);
        fragment.inject(&styles);

        assert_eq!(styles.len(), 1);
        assert_eq!(styles.css(&config.style_id), Some(fragment.css));
    }
}
