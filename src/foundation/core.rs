use std::num::NonZeroU32;

use crate::foundation::error::{ScrollframeError, ScrollframeResult};

/// 0-based position of a frame within the frame set.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct FrameIndex(pub u32);

impl FrameIndex {
    /// Index as `usize`, for slot lookups.
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for FrameIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of frames `N` in the frame set. Always `>= 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct FrameCount(u32);

impl FrameCount {
    /// Create a validated frame count.
    pub fn new(n: u32) -> ScrollframeResult<Self> {
        if n == 0 {
            return Err(ScrollframeError::validation("frame count must be > 0"));
        }
        Ok(Self(n))
    }

    /// Frame count from a value already known to be non-zero.
    pub const fn from_nonzero(n: NonZeroU32) -> Self {
        Self(n.get())
    }

    /// Raw frame count.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Highest valid index, `N - 1`.
    pub fn last(self) -> FrameIndex {
        FrameIndex(self.0 - 1)
    }

    /// Return `true` when `idx` is inside `[0, N)`.
    pub fn contains(self, idx: FrameIndex) -> bool {
        idx.0 < self.0
    }

    /// Clamp an index into `[0, N - 1]`.
    pub fn clamp(self, idx: FrameIndex) -> FrameIndex {
        FrameIndex(idx.0.min(self.0 - 1))
    }

    /// Clamp a continuous frame position into `[0, N - 1]` after truncating toward negative
    /// infinity. Non-finite input maps to frame 0.
    pub fn clamp_floor(self, pos: f64) -> FrameIndex {
        if !pos.is_finite() || pos <= 0.0 {
            return FrameIndex(0);
        }
        let max = f64::from(self.0 - 1);
        FrameIndex(pos.floor().min(max) as u32)
    }

    /// Same as [`FrameCount::clamp_floor`] but rounds to the nearest frame (half away from zero).
    pub fn clamp_round(self, pos: f64) -> FrameIndex {
        if !pos.is_finite() || pos <= 0.0 {
            return FrameIndex(0);
        }
        let max = f64::from(self.0 - 1);
        FrameIndex(pos.round().min(max) as u32)
    }

    /// Iterate every index of the frame set in order.
    pub fn indices(self) -> impl Iterator<Item = FrameIndex> {
        (0..self.0).map(FrameIndex)
    }
}

impl TryFrom<u32> for FrameCount {
    type Error = ScrollframeError;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<FrameCount> for u32 {
    fn from(n: FrameCount) -> Self {
        n.0
    }
}

/// Straight-alpha RGBA8 color, e.g. the page accent token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Parse `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional, case-insensitive).
    pub fn parse_hex(s: &str) -> ScrollframeResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        fn hex_byte(pair: &str) -> ScrollframeResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| ScrollframeError::config(format!("invalid hex byte \"{pair}\"")))
        }

        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ScrollframeError::config(format!(
                "hex color \"{s}\" must contain only hex digits"
            )));
        }

        match s.len() {
            6 => Ok(Self {
                r: hex_byte(&s[0..2])?,
                g: hex_byte(&s[2..4])?,
                b: hex_byte(&s[4..6])?,
                a: 255,
            }),
            8 => Ok(Self {
                r: hex_byte(&s[0..2])?,
                g: hex_byte(&s[2..4])?,
                b: hex_byte(&s[4..6])?,
                a: hex_byte(&s[6..8])?,
            }),
            _ => Err(ScrollframeError::config(
                "hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)",
            )),
        }
    }

    /// Format as lowercase `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
