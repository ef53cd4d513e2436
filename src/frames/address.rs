use crate::foundation::core::{FrameCount, FrameIndex};
use crate::foundation::error::{ScrollframeError, ScrollframeResult};

/// Remote storage location of the reference frame set.
pub const DEFAULT_BASE_PATH: &str =
    "https://rsecsgeiuzkskyxbqalw.supabase.co/storage/v1/object/public/Protfolio%202/";

/// URL-construction rule mapping a [`FrameIndex`] to a frame address.
///
/// `address(i) = base_path + prefix + zero_pad(i, pad_width) + suffix + extension`.
/// The defaults reproduce the naming of the existing asset store
/// (`frame_007_delay-0.042s.webp`).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FrameAddressing {
    /// Location prefix, usually ending in `/`.
    pub base_path: String,
    /// File name prefix before the padded index.
    pub prefix: String,
    /// Minimum number of digits; shorter indices are left-padded with `0`.
    pub pad_width: usize,
    /// File name part after the padded index.
    pub suffix: String,
    /// File extension including the leading dot.
    pub extension: String,
}

impl Default for FrameAddressing {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_owned(),
            prefix: "frame_".to_owned(),
            pad_width: 3,
            suffix: "_delay-0.042s".to_owned(),
            extension: ".webp".to_owned(),
        }
    }
}

impl FrameAddressing {
    /// Same naming rule rooted at a different location.
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    /// File name of frame `idx`, without the base path.
    pub fn file_name(&self, idx: FrameIndex) -> String {
        format!(
            "{}{:0width$}{}{}",
            self.prefix,
            idx.0,
            self.suffix,
            self.extension,
            width = self.pad_width
        )
    }

    /// Full address of frame `idx`.
    pub fn address(&self, idx: FrameIndex) -> String {
        let mut out = String::with_capacity(self.base_path.len() + 32);
        out.push_str(&self.base_path);
        out.push_str(&self.file_name(idx));
        out
    }

    /// Addresses of every frame in `[0, count)`, in index order.
    pub fn addresses(&self, count: FrameCount) -> Vec<String> {
        count.indices().map(|i| self.address(i)).collect()
    }

    /// Check that every index below `count` fits in `pad_width` digits and that the extension is
    /// well-formed.
    pub fn validate(&self, count: FrameCount) -> ScrollframeResult<()> {
        if self.pad_width == 0 {
            return Err(ScrollframeError::config("frame pad_width must be > 0"));
        }
        let digits = count.last().0.to_string().len();
        if digits > self.pad_width {
            return Err(ScrollframeError::config(format!(
                "frame pad_width {} is too small for {} frames (needs {digits} digits)",
                self.pad_width,
                count.get()
            )));
        }
        if !self.extension.is_empty() && !self.extension.starts_with('.') {
            return Err(ScrollframeError::config(
                "frame extension must start with '.'",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frames/address.rs"]
mod tests;
