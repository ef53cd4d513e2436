use crate::foundation::core::{FrameCount, FrameIndex};
use crate::foundation::error::{ScrollframeError, ScrollframeResult};

/// Fraction of the remaining distance to the target closed per tick, in `(0, 1]`.
///
/// Lower values feel heavier and settle slower; `1.0` snaps straight to the target.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Smoothing(f64);

impl Smoothing {
    /// Reference coefficient of the original hero.
    pub const DEFAULT: Self = Self(0.12);

    /// Validate a coefficient.
    pub fn new(alpha: f64) -> ScrollframeResult<Self> {
        if !alpha.is_finite() || alpha <= 0.0 || alpha > 1.0 {
            return Err(ScrollframeError::validation(format!(
                "smoothing coefficient must be in (0, 1], got {alpha}"
            )));
        }
        Ok(Self(alpha))
    }

    /// Raw coefficient.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for Smoothing {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for Smoothing {
    type Error = ScrollframeError;

    fn try_from(alpha: f64) -> Result<Self, Self::Error> {
        Self::new(alpha)
    }
}

impl From<Smoothing> for f64 {
    fn from(s: Smoothing) -> Self {
        s.0
    }
}

/// Exponential smoother chasing a discrete target frame.
#[derive(Clone, Debug)]
pub struct FrameSmoother {
    count: FrameCount,
    alpha: Smoothing,
    smoothed: f64,
    displayed: FrameIndex,
}

impl FrameSmoother {
    /// Smoother resting on frame 0.
    pub fn new(count: FrameCount, alpha: Smoothing) -> Self {
        Self {
            count,
            alpha,
            smoothed: 0.0,
            displayed: FrameIndex(0),
        }
    }

    /// Continuous smoothed position.
    pub fn smoothed(&self) -> f64 {
        self.smoothed
    }

    /// Last published frame.
    pub fn displayed(&self) -> FrameIndex {
        self.displayed
    }

    /// Smoothing coefficient.
    pub fn alpha(&self) -> Smoothing {
        self.alpha
    }

    /// Advance one tick toward `target`.
    ///
    /// Returns the new displayed frame only when the rounded position crossed an integer boundary.
    pub fn step(&mut self, target: FrameIndex) -> Option<FrameIndex> {
        let target = self.count.clamp(target);
        let delta = f64::from(target.0) - self.smoothed;
        self.smoothed += delta * self.alpha.get();

        let next = self.count.clamp_round(self.smoothed);
        if next == self.displayed {
            return None;
        }
        self.displayed = next;
        Some(next)
    }

    /// Jump straight to `frame` without smoothing.
    pub fn snap_to(&mut self, frame: FrameIndex) {
        let frame = self.count.clamp(frame);
        self.smoothed = f64::from(frame.0);
        self.displayed = frame;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animate/smoothing.rs"]
mod tests;
