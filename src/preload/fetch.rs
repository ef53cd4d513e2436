use std::path::PathBuf;

use crate::foundation::core::FrameIndex;
use crate::foundation::error::{ScrollframeError, ScrollframeResult};

/// Source of raw frame bytes.
///
/// Called from preload worker threads, so implementations must be `Sync`. A returned error marks
/// the frame failed; it is never retried.
pub trait FrameFetcher: Sync {
    /// Fetch the bytes of frame `idx`, located at `address`.
    fn fetch(&self, idx: FrameIndex, address: &str) -> ScrollframeResult<Vec<u8>>;
}

impl<F> FrameFetcher for F
where
    F: Fn(FrameIndex, &str) -> ScrollframeResult<Vec<u8>> + Sync,
{
    fn fetch(&self, idx: FrameIndex, address: &str) -> ScrollframeResult<Vec<u8>> {
        self(idx, address)
    }
}

/// Fetches frames from a local directory that mirrors the remote asset store.
///
/// Only the last path segment of each address is used, so the directory holds files named like
/// `frame_000_delay-0.042s.webp`.
#[derive(Clone, Debug)]
pub struct DirFrameFetcher {
    root: PathBuf,
}

impl DirFrameFetcher {
    /// Fetcher reading from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory frames are read from.
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

impl FrameFetcher for DirFrameFetcher {
    fn fetch(&self, idx: FrameIndex, address: &str) -> ScrollframeResult<Vec<u8>> {
        let name = file_name_of(address).ok_or_else(|| {
            ScrollframeError::fetch(format!("frame {idx}: address '{address}' has no file name"))
        })?;
        let path = self.root.join(name);
        std::fs::read(&path).map_err(|e| {
            ScrollframeError::fetch(format!("frame {idx}: read '{}': {e}", path.display()))
        })
    }
}

/// Last `/`-separated segment of an address, ignoring any query or fragment.
pub(crate) fn file_name_of(address: &str) -> Option<&str> {
    let end = address.find(['?', '#']).unwrap_or(address.len());
    let name = address[..end].rsplit('/').next()?;
    if name.is_empty() || name == "." || name == ".." {
        return None;
    }
    Some(name)
}

#[cfg(test)]
#[path = "../../tests/unit/preload/fetch.rs"]
mod tests;
