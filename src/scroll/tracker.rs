use crate::foundation::core::{FrameCount, FrameIndex};

/// Viewport measurements read on a scroll event, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollMetrics {
    /// Current vertical scroll offset of the page.
    pub scroll_top: f64,
    /// Height of the hero container that drives the frame sequence.
    pub container_height: f64,
    /// Height of the visible viewport.
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Scroll distance over which the hero scrubs: `container_height - viewport_height`.
    pub fn max_scroll(&self) -> f64 {
        self.container_height - self.viewport_height
    }

    /// `scroll_top / max_scroll`, or `None` when the hero cannot scroll (viewport at least as tall
    /// as the container) or any input is non-finite.
    pub fn scroll_fraction(&self) -> Option<f64> {
        if !self.scroll_top.is_finite() {
            return None;
        }
        let max = self.max_scroll();
        if !max.is_finite() || max <= 0.0 {
            return None;
        }
        Some(self.scroll_top / max)
    }
}

/// Map a scroll fraction to a frame: `clamp(floor(fraction * N), 0, N - 1)`.
///
/// Fractions below 0 map to the first frame and fractions above 1 to the last.
pub fn target_frame_for_fraction(fraction: f64, count: FrameCount) -> FrameIndex {
    count.clamp_floor(fraction * f64::from(count.get()))
}

/// Holds the target frame implied by the most recent scroll event.
///
/// Only scroll events write the target; the animator reads it on each tick. The last write wins
/// and no history is kept.
#[derive(Clone, Debug)]
pub struct ScrollTracker {
    count: FrameCount,
    target: FrameIndex,
    attached: bool,
}

impl ScrollTracker {
    /// Tracker for `count` frames, targeting frame 0 and attached.
    pub fn new(count: FrameCount) -> Self {
        Self {
            count,
            target: FrameIndex(0),
            attached: true,
        }
    }

    /// Current target frame.
    pub fn target(&self) -> FrameIndex {
        self.target
    }

    /// Return `true` until [`ScrollTracker::detach`] is called.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Stop reacting to scroll events. Later events leave the target untouched.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    /// Recompute the target from live metrics.
    ///
    /// Returns the new target, or `None` when the metrics are degenerate or the tracker is
    /// detached, in which case the previous target is kept.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> Option<FrameIndex> {
        if !self.attached {
            return None;
        }
        let Some(fraction) = metrics.scroll_fraction() else {
            tracing::trace!(?metrics, "degenerate scroll metrics, target unchanged");
            return None;
        };
        self.target = target_frame_for_fraction(fraction, self.count);
        Some(self.target)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/tracker.rs"]
mod tests;
