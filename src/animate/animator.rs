use crate::animate::scheduler::{TickHandle, TickScheduler};
use crate::animate::smoothing::{FrameSmoother, Smoothing};
use crate::foundation::core::{FrameCount, FrameIndex};

/// Animator lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimatorState {
    /// Frames are not ready yet, or the animator was stopped. No tick is pending.
    Idle,
    /// One tick is pending at all times; each tick schedules the next.
    Running,
}

/// Drives a [`FrameSmoother`] from a refresh-synchronized tick loop.
///
/// The animator exclusively owns the smoothed and displayed frame. Dropping it cancels the pending
/// tick, so a torn-down owner never leaks a perpetual loop.
pub struct Animator<S: TickScheduler> {
    scheduler: S,
    smoother: FrameSmoother,
    pending: Option<TickHandle>,
}

impl<S: TickScheduler> Animator<S> {
    /// Idle animator resting on frame 0.
    pub fn new(count: FrameCount, alpha: Smoothing, scheduler: S) -> Self {
        Self {
            scheduler,
            smoother: FrameSmoother::new(count, alpha),
            pending: None,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> AnimatorState {
        if self.pending.is_some() {
            AnimatorState::Running
        } else {
            AnimatorState::Idle
        }
    }

    /// Return `true` while the tick loop is live.
    pub fn is_running(&self) -> bool {
        self.state() == AnimatorState::Running
    }

    /// Last published frame.
    pub fn displayed(&self) -> FrameIndex {
        self.smoother.displayed()
    }

    /// Continuous smoothed position.
    pub fn smoothed(&self) -> f64 {
        self.smoother.smoothed()
    }

    /// Handle of the tick the animator is waiting for.
    pub fn pending_tick(&self) -> Option<TickHandle> {
        self.pending
    }

    /// Borrow the scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// `Idle -> Running`: schedule the first tick. No-op when already running.
    pub fn start(&mut self) {
        if self.pending.is_some() {
            return;
        }
        self.pending = Some(self.scheduler.schedule());
        tracing::debug!("animator started");
    }

    /// `Running -> Idle`: cancel the pending tick. No-op when idle.
    pub fn stop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
            tracing::debug!("animator stopped");
        }
    }

    /// Handle one fired tick: smooth toward `target`, then schedule the next tick.
    ///
    /// Ticks that are not the pending one (stale or foreign handles, or any tick while idle) are
    /// ignored. Returns the newly displayed frame when it changed.
    pub fn on_tick(&mut self, handle: TickHandle, target: FrameIndex) -> Option<FrameIndex> {
        if self.pending != Some(handle) {
            return None;
        }
        let published = self.smoother.step(target);
        self.pending = Some(self.scheduler.schedule());
        published
    }
}

impl<S: TickScheduler> Drop for Animator<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

impl<S: TickScheduler> std::fmt::Debug for Animator<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Animator")
            .field("smoother", &self.smoother)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animate/animator.rs"]
mod tests;
