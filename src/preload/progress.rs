use crate::foundation::core::FrameCount;

/// How a single frame fetch finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Fetched and decoded.
    Loaded,
    /// Fetch or decode failed.
    Failed,
}

/// Load lifecycle phase. `Loading -> Ready` is one-way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadPhase {
    /// Fewer than `N` fetches have completed.
    Loading,
    /// Every fetch has completed, successfully or not.
    Ready,
}

/// Published after each counted completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressUpdate {
    /// Completed fetches so far, `1..=N`.
    pub completed: u32,
    /// `floor(completed / N * 100)`.
    pub percent: u8,
    /// `true` for exactly one update: the one that made `completed == N`.
    pub became_ready: bool,
}

/// Completion counter for a frame set.
///
/// Failures count toward completion so one bad asset never blocks the ready transition.
/// Completions reported after `N` has been reached are ignored.
#[derive(Clone, Debug)]
pub struct LoadProgress {
    total: FrameCount,
    loaded: u32,
    failed: u32,
}

impl LoadProgress {
    /// Fresh counter at 0% for `total` frames.
    pub fn new(total: FrameCount) -> Self {
        Self {
            total,
            loaded: 0,
            failed: 0,
        }
    }

    /// Frame count `N`.
    pub fn total(&self) -> FrameCount {
        self.total
    }

    /// Completed fetch attempts (loaded + failed).
    pub fn completed(&self) -> u32 {
        self.loaded + self.failed
    }

    /// Successful fetches.
    pub fn loaded(&self) -> u32 {
        self.loaded
    }

    /// Failed fetches.
    pub fn failed(&self) -> u32 {
        self.failed
    }

    /// `floor(completed / N * 100)`, always in `[0, 100]`.
    pub fn percent(&self) -> u8 {
        let pct = u64::from(self.completed()) * 100 / u64::from(self.total.get());
        pct.min(100) as u8
    }

    /// Current phase.
    pub fn phase(&self) -> LoadPhase {
        if self.completed() >= self.total.get() {
            LoadPhase::Ready
        } else {
            LoadPhase::Loading
        }
    }

    /// Return `true` once every fetch has completed.
    pub fn is_ready(&self) -> bool {
        self.phase() == LoadPhase::Ready
    }

    /// Count one completion. Returns `None` when the counter was already at `N`.
    pub fn record(&mut self, outcome: LoadOutcome) -> Option<ProgressUpdate> {
        if self.is_ready() {
            return None;
        }
        match outcome {
            LoadOutcome::Loaded => self.loaded += 1,
            LoadOutcome::Failed => self.failed += 1,
        }
        Some(ProgressUpdate {
            completed: self.completed(),
            percent: self.percent(),
            became_ready: self.is_ready(),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/preload/progress.rs"]
mod tests;
