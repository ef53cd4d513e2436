//! Scrollframe drives a scroll-scrubbed image-sequence hero.
//!
//! - Preload a fixed frame set with [`Preloader`] and track progress with [`LoadProgress`]
//! - Map scroll position to a target frame with [`ScrollTracker`]
//! - Smooth the displayed frame toward the target on every refresh tick with [`Animator`]
//! - Wire all three together on one thread with [`HeroController`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animate;
mod foundation;
mod frames;
mod hero;
mod preload;
mod scroll;
mod site;

pub use crate::animate::animator::{Animator, AnimatorState};
pub use crate::animate::scheduler::{ManualTickScheduler, TickHandle, TickScheduler};
pub use crate::animate::smoothing::{FrameSmoother, Smoothing};
pub use crate::foundation::core::{FrameCount, FrameIndex, Rgba8};
pub use crate::foundation::error::{ScrollframeError, ScrollframeResult};
pub use crate::frames::address::{DEFAULT_BASE_PATH, FrameAddressing};
pub use crate::frames::decode::{PreparedFrame, decode_frame};
pub use crate::frames::store::{FailedFramePolicy, FrameSlot, FrameStore};
pub use crate::hero::controller::{HeroController, HeroView};
pub use crate::preload::fetch::{DirFrameFetcher, FrameFetcher};
pub use crate::preload::preloader::{
    PreloadObserver, PreloadOpts, PreloadOutcome, PreloadReport, Preloader,
};
pub use crate::preload::progress::{LoadOutcome, LoadPhase, LoadProgress, ProgressUpdate};
pub use crate::scroll::tracker::{ScrollMetrics, ScrollTracker, target_frame_for_fraction};
pub use crate::site::config::{
    DEFAULT_ACCENT, DEFAULT_TOTAL_FRAMES, FaqEntry, HeroConfig, LearningPath, SiteConfig,
    SocialLink, ThemeConfig,
};
