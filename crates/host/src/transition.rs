//! Platform visual-transition primitive
//!
//! Models the start / ready / finished lifecycle of a document view
//! transition. The platform snapshots the old visual state, runs the DOM
//! update, snapshots the new state, then animates between the two.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::error::{PlatformError, Result};

/// DOM mutation run by the platform between the old and new snapshots
pub type DomUpdate = Box<dyn FnOnce() + Send + 'static>;

/// Capability to start view transitions
pub trait ViewTransitionApi: Send + Sync {
    /// Whether the host exposes the primitive at all
    fn supports_view_transitions(&self) -> Result<bool>;

    /// Start a transition.
    ///
    /// Implementations must run `update` to completion before returning, so
    /// the new snapshot reflects the mutated state.
    fn start_view_transition(&self, update: DomUpdate) -> Result<Box<dyn ViewTransition>>;
}

/// A started view transition
#[async_trait]
pub trait ViewTransition: Send {
    /// Resolves once both snapshots are captured and animation can begin
    async fn ready(&mut self) -> Result<()>;

    /// Resolves once the platform animation has finished
    async fn finished(&mut self) -> Result<()>;
}

/// A transition whose lifecycle completes on its own, optionally after a
/// delay before `ready`
#[derive(Debug, Default)]
pub struct CompletedTransition {
    ready_delay: Duration,
}

impl CompletedTransition {
    /// A transition that is ready immediately
    pub fn immediate() -> Self {
        Self::default()
    }

    /// A transition that becomes ready after `delay`
    pub fn after(delay: Duration) -> Self {
        Self { ready_delay: delay }
    }
}

#[async_trait]
impl ViewTransition for CompletedTransition {
    async fn ready(&mut self) -> Result<()> {
        if !self.ready_delay.is_zero() {
            tokio::time::sleep(self.ready_delay).await;
            self.ready_delay = Duration::ZERO;
        }
        Ok(())
    }

    async fn finished(&mut self) -> Result<()> {
        self.ready().await
    }
}

/// Fallback for hosts without the primitive.
///
/// Reports itself unsupported and refuses to start; the update is dropped
/// without running, leaving the caller to apply it directly.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoViewTransitions;

impl ViewTransitionApi for NoViewTransitions {
    fn supports_view_transitions(&self) -> Result<bool> {
        Ok(false)
    }

    fn start_view_transition(&self, _update: DomUpdate) -> Result<Box<dyn ViewTransition>> {
        Err(PlatformError::Unsupported)
    }
}

/// Headless primitive that reports support and runs updates synchronously
#[derive(Debug, Default)]
pub struct ImmediateViewTransitions {
    started: AtomicUsize,
    ready_delay: Duration,
}

impl ImmediateViewTransitions {
    /// Transitions become ready immediately
    pub fn new() -> Self {
        Self::default()
    }

    /// Transitions become ready after `delay`
    pub fn with_ready_delay(delay: Duration) -> Self {
        Self { ready_delay: delay, ..Default::default() }
    }

    /// Number of transitions started so far
    pub fn started_count(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }
}

impl ViewTransitionApi for ImmediateViewTransitions {
    fn supports_view_transitions(&self) -> Result<bool> {
        Ok(true)
    }

    fn start_view_transition(&self, update: DomUpdate) -> Result<Box<dyn ViewTransition>> {
        self.started.fetch_add(1, Ordering::SeqCst);
        update();
        Ok(Box::new(CompletedTransition::after(self.ready_delay)))
    }
}
