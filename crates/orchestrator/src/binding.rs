//! Theme state ownership
//!
//! The theme flag is owned either by the switch itself ([`LocalTheme`]) or
//! by the caller ([`ExternalTheme`]), never both. Every state change goes
//! through [`ThemeBinding::set_dark`] on the one binding a switch holds.

use std::sync::atomic::{AtomicBool, Ordering};

/// Source of truth for the dark/light flag
pub trait ThemeBinding: Send + Sync {
    /// Current theme state
    fn is_dark(&self) -> bool;

    /// Request a new theme state
    fn set_dark(&self, dark: bool);
}

/// Theme state owned by the switch
#[derive(Debug, Default)]
pub struct LocalTheme {
    dark: AtomicBool,
}

impl LocalTheme {
    /// Create local state seeded with `dark`
    pub fn new(dark: bool) -> Self {
        Self { dark: AtomicBool::new(dark) }
    }
}

impl ThemeBinding for LocalTheme {
    fn is_dark(&self) -> bool {
        self.dark.load(Ordering::SeqCst)
    }

    fn set_dark(&self, dark: bool) {
        self.dark.store(dark, Ordering::SeqCst);
    }
}

type Getter = Box<dyn Fn() -> bool + Send + Sync>;
type OnChange = Box<dyn Fn(bool) + Send + Sync>;

/// Theme state owned by the caller.
///
/// The switch reads the value through `value` and reports requested
/// changes through `on_change`; it never stores the flag itself. The
/// caller is expected to update whatever `value` reads from inside
/// `on_change`, synchronously.
pub struct ExternalTheme {
    value: Getter,
    on_change: OnChange,
}

impl ExternalTheme {
    /// Bind to caller-owned state
    pub fn new<V, C>(value: V, on_change: C) -> Self
    where
        V: Fn() -> bool + Send + Sync + 'static,
        C: Fn(bool) + Send + Sync + 'static,
    {
        Self { value: Box::new(value), on_change: Box::new(on_change) }
    }
}

impl std::fmt::Debug for ExternalTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExternalTheme").field("value", &(self.value)()).finish()
    }
}

impl ThemeBinding for ExternalTheme {
    fn is_dark(&self) -> bool {
        (self.value)()
    }

    fn set_dark(&self, dark: bool) {
        (self.on_change)(dark);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;

    #[test]
    fn test_local_theme() {
        let theme = LocalTheme::new(false);
        assert!(!theme.is_dark());

        theme.set_dark(true);
        assert!(theme.is_dark());
    }

    #[test]
    fn test_external_theme_reads_and_reports() {
        let owner = Arc::new(AtomicBool::new(true));
        let calls = Arc::new(AtomicUsize::new(0));

        let read = Arc::clone(&owner);
        let write = Arc::clone(&owner);
        let counter = Arc::clone(&calls);
        let theme = ExternalTheme::new(
            move || read.load(Ordering::SeqCst),
            move |dark| {
                counter.fetch_add(1, Ordering::SeqCst);
                write.store(dark, Ordering::SeqCst);
            },
        );

        assert!(theme.is_dark());

        theme.set_dark(false);
        assert!(!theme.is_dark());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_external_theme_does_not_store() {
        // A caller that ignores change requests keeps its value
        let theme = ExternalTheme::new(|| false, |_| {});
        theme.set_dark(true);
        assert!(!theme.is_dark());
    }
}
