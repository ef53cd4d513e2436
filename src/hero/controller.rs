use crate::animate::animator::{Animator, AnimatorState};
use crate::animate::scheduler::{ManualTickScheduler, TickHandle, TickScheduler};
use crate::foundation::core::{FrameCount, FrameIndex};
use crate::foundation::error::ScrollframeResult;
use crate::frames::address::FrameAddressing;
use crate::frames::store::{FailedFramePolicy, nearest_loaded};
use crate::preload::preloader::PreloadObserver;
use crate::preload::progress::{LoadOutcome, LoadPhase, LoadProgress, ProgressUpdate};
use crate::scroll::tracker::{ScrollMetrics, ScrollTracker};
use crate::site::config::HeroConfig;

/// What the page should show right now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeroView {
    /// Loading screen with a progress bar.
    Loading {
        /// `floor(completed / N * 100)`.
        percent: u8,
    },
    /// Hero showing one frame.
    Frame {
        /// Displayed frame.
        index: FrameIndex,
        /// Address of the displayed frame.
        address: String,
    },
    /// Displayed frame failed to load and the failed-frame policy leaves it empty.
    Blank {
        /// Displayed frame, as positioned by the animator.
        index: FrameIndex,
    },
    /// Controller was torn down.
    Detached,
}

/// Owner of one hero instance: load progress, scroll target and animator.
///
/// All event methods are meant to be called from a single thread in whatever order the host
/// delivers them. No frame is exposed before every frame has settled.
pub struct HeroController<S: TickScheduler> {
    count: FrameCount,
    addressing: FrameAddressing,
    policy: FailedFramePolicy,
    failed: Vec<bool>,
    progress: LoadProgress,
    scroll: ScrollTracker,
    animator: Animator<S>,
    torn_down: bool,
}

impl<S: TickScheduler> HeroController<S> {
    /// Build a controller in the loading phase.
    pub fn new(config: &HeroConfig, scheduler: S) -> ScrollframeResult<Self> {
        let count = config.total_frames;
        config.addressing.validate(count)?;
        Ok(Self {
            count,
            addressing: config.addressing.clone(),
            policy: config.failed_frame_policy,
            failed: vec![false; count.get() as usize],
            progress: LoadProgress::new(count),
            scroll: ScrollTracker::new(count),
            animator: Animator::new(count, config.smoothing, scheduler),
            torn_down: false,
        })
    }

    /// Frame count `N`.
    pub fn frame_count(&self) -> FrameCount {
        self.count
    }

    /// Addressing rule for frame URLs.
    pub fn addressing(&self) -> &FrameAddressing {
        &self.addressing
    }

    /// Load progress counter.
    pub fn progress(&self) -> &LoadProgress {
        &self.progress
    }

    /// Return `true` once every frame has settled.
    pub fn is_ready(&self) -> bool {
        self.progress.phase() == LoadPhase::Ready
    }

    /// Animator lifecycle state.
    pub fn animator_state(&self) -> AnimatorState {
        self.animator.state()
    }

    /// Animator, for inspection.
    pub fn animator(&self) -> &Animator<S> {
        &self.animator
    }

    /// Frame the latest scroll event points at.
    pub fn target_frame(&self) -> FrameIndex {
        self.scroll.target()
    }

    /// Count one settled frame fetch. The completion that makes all `N` settle starts the
    /// animator. Completions after that, and indices outside the frame set, are ignored.
    pub fn frame_settled(
        &mut self,
        idx: FrameIndex,
        outcome: LoadOutcome,
    ) -> Option<ProgressUpdate> {
        if self.torn_down {
            return None;
        }
        if !self.count.contains(idx) {
            tracing::warn!(
                frame = idx.0,
                frames = self.count.get(),
                "settled frame out of range"
            );
            return None;
        }
        let update = self.progress.record(outcome)?;
        if outcome == LoadOutcome::Failed {
            self.failed[idx.as_usize()] = true;
        }
        if update.became_ready {
            tracing::info!(
                frames = self.count.get(),
                failed = self.progress.failed(),
                "hero ready"
            );
            self.animator.start();
        }
        Some(update)
    }

    /// Scroll event: recompute the target frame. Never touches the displayed frame.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> Option<FrameIndex> {
        self.scroll.on_scroll(metrics)
    }

    /// Refresh tick: move the displayed frame toward the target.
    ///
    /// Returns the new displayed frame when a repaint is needed.
    pub fn on_tick(&mut self, handle: TickHandle) -> Option<FrameIndex> {
        let target = self.scroll.target();
        self.animator.on_tick(handle, target)
    }

    /// Displayed frame, or `None` while loading or after teardown.
    pub fn displayed_frame(&self) -> Option<FrameIndex> {
        if self.torn_down || !self.is_ready() {
            return None;
        }
        Some(self.animator.displayed())
    }

    /// Frame to draw for the displayed position after the failed-frame policy.
    ///
    /// `None` while loading, after teardown, or when the displayed frame failed and the policy
    /// has no substitute.
    pub fn shown_frame(&self) -> Option<FrameIndex> {
        self.displayed_frame().and_then(|i| self.resolve(i))
    }

    /// Address of [`HeroController::shown_frame`].
    pub fn displayed_address(&self) -> Option<String> {
        self.shown_frame().map(|i| self.addressing.address(i))
    }

    fn resolve(&self, idx: FrameIndex) -> Option<FrameIndex> {
        let i = idx.as_usize();
        if !self.failed[i] {
            return Some(idx);
        }
        match self.policy {
            FailedFramePolicy::Blank => None,
            FailedFramePolicy::NearestLoaded => {
                nearest_loaded(self.failed.len(), i, |j| !self.failed[j])
                    .map(|j| FrameIndex(j as u32))
            }
        }
    }

    /// Current view of the page.
    pub fn view(&self) -> HeroView {
        if self.torn_down {
            return HeroView::Detached;
        }
        let Some(displayed) = self.displayed_frame() else {
            return HeroView::Loading {
                percent: self.progress.percent(),
            };
        };
        match self.resolve(displayed) {
            Some(index) => HeroView::Frame {
                index,
                address: self.addressing.address(index),
            },
            None => HeroView::Blank { index: displayed },
        }
    }

    /// Cancel the pending tick and detach the scroll listener. Idempotent.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.animator.stop();
        self.scroll.detach();
        self.torn_down = true;
        tracing::debug!("hero torn down");
    }
}

impl HeroController<ManualTickScheduler> {
    /// Fire the pending tick of a manually driven controller, if any.
    pub fn pump(&mut self) -> Option<FrameIndex> {
        let handle = self.animator.scheduler().take_due()?;
        self.on_tick(handle)
    }
}

impl<S: TickScheduler> PreloadObserver for HeroController<S> {
    fn on_frame(&mut self, idx: FrameIndex, outcome: LoadOutcome) {
        self.frame_settled(idx, outcome);
    }
}

impl<S: TickScheduler> Drop for HeroController<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<S: TickScheduler> std::fmt::Debug for HeroController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeroController")
            .field("count", &self.count)
            .field("policy", &self.policy)
            .field("progress", &self.progress)
            .field("scroll", &self.scroll)
            .field("animator", &self.animator)
            .field("torn_down", &self.torn_down)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/hero/controller.rs"]
mod tests;
