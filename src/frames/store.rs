use crate::foundation::core::{FrameCount, FrameIndex};
use crate::frames::decode::PreparedFrame;

/// What to show for a frame whose fetch or decode failed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailedFramePolicy {
    /// Show nothing for the failed frame.
    #[default]
    Blank,
    /// Show the closest loaded frame, preferring earlier frames on ties.
    NearestLoaded,
}

/// Result of preloading one frame.
#[derive(Clone, Debug)]
pub enum FrameSlot {
    /// Frame fetched and decoded.
    Loaded(PreparedFrame),
    /// Fetch or decode failed; counted as complete all the same.
    Failed,
}

impl FrameSlot {
    /// Return `true` for [`FrameSlot::Loaded`].
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// Preloaded frame set, one slot per index.
#[derive(Clone, Debug)]
pub struct FrameStore {
    slots: Vec<FrameSlot>,
    policy: FailedFramePolicy,
}

impl FrameStore {
    /// Build a store from slots in index order.
    pub fn from_slots(slots: Vec<FrameSlot>, policy: FailedFramePolicy) -> Self {
        Self { slots, policy }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Return `true` when the store holds no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Frame count of the store, when non-empty.
    pub fn frame_count(&self) -> Option<FrameCount> {
        u32::try_from(self.slots.len())
            .ok()
            .and_then(|n| FrameCount::new(n).ok())
    }

    /// Raw slot for `idx`.
    pub fn slot(&self, idx: FrameIndex) -> Option<&FrameSlot> {
        self.slots.get(idx.as_usize())
    }

    /// Indices whose slot is [`FrameSlot::Failed`], ascending.
    pub fn failed_indices(&self) -> Vec<FrameIndex> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.is_loaded())
            .map(|(i, _)| FrameIndex(i as u32))
            .collect()
    }

    /// Index of the frame to draw for `idx`, after applying the failed-frame policy.
    pub fn resolve_index(&self, idx: FrameIndex) -> Option<FrameIndex> {
        let i = idx.as_usize();
        match self.slots.get(i)? {
            FrameSlot::Loaded(_) => Some(idx),
            FrameSlot::Failed => match self.policy {
                FailedFramePolicy::Blank => None,
                FailedFramePolicy::NearestLoaded => {
                    self.nearest_loaded(i).map(|j| FrameIndex(j as u32))
                }
            },
        }
    }

    /// Frame to draw for `idx`, after applying the failed-frame policy.
    pub fn resolve(&self, idx: FrameIndex) -> Option<&PreparedFrame> {
        let resolved = self.resolve_index(idx)?;
        match self.slots.get(resolved.as_usize())? {
            FrameSlot::Loaded(frame) => Some(frame),
            FrameSlot::Failed => None,
        }
    }

    fn nearest_loaded(&self, i: usize) -> Option<usize> {
        nearest_loaded(self.slots.len(), i, |j| self.slots[j].is_loaded())
    }
}

/// Closest index to `i` in `[0, n)` for which `is_loaded` holds, excluding `i` itself. Earlier
/// indices win ties.
pub(crate) fn nearest_loaded(
    n: usize,
    i: usize,
    is_loaded: impl Fn(usize) -> bool,
) -> Option<usize> {
    for dist in 1..n {
        if let Some(j) = i.checked_sub(dist)
            && is_loaded(j)
        {
            return Some(j);
        }
        let j = i + dist;
        if j < n && is_loaded(j) {
            return Some(j);
        }
        if dist > i && j >= n {
            break;
        }
    }
    None
}

#[cfg(test)]
#[path = "../../tests/unit/frames/store.rs"]
mod tests;
