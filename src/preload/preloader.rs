use std::sync::mpsc;

use crate::foundation::core::{FrameCount, FrameIndex};
use crate::foundation::error::{ScrollframeError, ScrollframeResult};
use crate::frames::address::FrameAddressing;
use crate::frames::decode::{PreparedFrame, decode_frame};
use crate::frames::store::{FailedFramePolicy, FrameSlot, FrameStore};
use crate::preload::fetch::FrameFetcher;
use crate::preload::progress::{LoadOutcome, LoadProgress, ProgressUpdate};
use crate::site::config::HeroConfig;

/// Options controlling [`Preloader::run`].
#[derive(Clone, Debug, Default)]
pub struct PreloadOpts {
    /// Cap the number of rayon worker threads. `None` runs one worker per frame, so every
    /// request is in flight at once.
    pub threads: Option<usize>,
    /// Display policy baked into the resulting [`FrameStore`].
    pub failed_frame_policy: FailedFramePolicy,
}

/// Summary of a finished preload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreloadReport {
    /// Frame count `N`.
    pub total: u32,
    /// Frames fetched and decoded.
    pub loaded: u32,
    /// Frames that failed to fetch or decode.
    pub failed: u32,
    /// Indices of failed frames, ascending.
    pub failed_indices: Vec<FrameIndex>,
}

/// Everything a preload produced.
#[derive(Clone, Debug)]
pub struct PreloadOutcome {
    /// Decoded frames, one slot per index.
    pub store: FrameStore,
    /// Counts and failures.
    pub report: PreloadReport,
}

/// Receives preload events on the thread that called [`Preloader::run`].
///
/// Events arrive in completion order, which is not index order.
pub trait PreloadObserver {
    /// One frame settled, successfully or not.
    fn on_frame(&mut self, _idx: FrameIndex, _outcome: LoadOutcome) {}

    /// Progress after a counted completion.
    fn on_progress(&mut self, _update: ProgressUpdate) {}

    /// Every frame settled. Called exactly once, after the last `on_progress`.
    fn on_ready(&mut self, _report: &PreloadReport) {}
}

impl PreloadObserver for () {}

/// Fetches and decodes a whole frame set.
///
/// Every frame is requested independently. Unless [`PreloadOpts::threads`] caps it, all `N`
/// fetches run concurrently. Completions are applied one at a time on the calling thread, so the observer and the progress
/// counter never see concurrent writes.
#[derive(Clone, Debug)]
pub struct Preloader {
    count: FrameCount,
    addressing: FrameAddressing,
    opts: PreloadOpts,
}

impl Preloader {
    /// Validate the addressing rule for `count` frames and build a preloader.
    pub fn new(
        count: FrameCount,
        addressing: FrameAddressing,
        opts: PreloadOpts,
    ) -> ScrollframeResult<Self> {
        addressing.validate(count)?;
        Ok(Self {
            count,
            addressing,
            opts,
        })
    }

    /// Preloader for the frame set a hero is configured with. Count, addressing and failed-frame
    /// policy all come from `config`.
    pub fn from_hero(config: &HeroConfig, threads: Option<usize>) -> ScrollframeResult<Self> {
        Self::new(
            config.total_frames,
            config.addressing.clone(),
            PreloadOpts {
                threads,
                failed_frame_policy: config.failed_frame_policy,
            },
        )
    }

    /// Frame count `N`.
    pub fn count(&self) -> FrameCount {
        self.count
    }

    /// Addressing rule used to build fetch addresses.
    pub fn addressing(&self) -> &FrameAddressing {
        &self.addressing
    }

    /// Fetch every frame and block until all have settled.
    ///
    /// Individual fetch or decode failures are not errors: the frame is counted as complete and
    /// its slot marked [`FrameSlot::Failed`]. Only thread-pool setup can fail.
    #[tracing::instrument(skip_all, fields(frames = self.count.get()))]
    pub fn run<F, O>(&self, fetcher: &F, observer: &mut O) -> ScrollframeResult<PreloadOutcome>
    where
        F: FrameFetcher,
        O: PreloadObserver,
    {
        let threads = self.opts.threads.unwrap_or(self.count.get() as usize);
        let pool = build_thread_pool(threads)?;
        let addresses = self.addressing.addresses(self.count);
        let mut slots: Vec<Option<FrameSlot>> = vec![None; addresses.len()];
        let mut progress = LoadProgress::new(self.count);
        let mut report = None;

        let (tx, rx) = mpsc::channel::<(FrameIndex, FrameSlot)>();

        pool.in_place_scope(|scope| {
            for (i, address) in addresses.iter().enumerate() {
                let tx = tx.clone();
                scope.spawn(move |_| {
                    let idx = FrameIndex(i as u32);
                    let slot = match load_one(fetcher, idx, address) {
                        Ok(frame) => FrameSlot::Loaded(frame),
                        Err(e) => {
                            tracing::warn!(frame = idx.0, %address, error = %e, "frame failed to load");
                            FrameSlot::Failed
                        }
                    };
                    // The receiver outlives every worker; a send error means the loop below
                    // already panicked.
                    let _ = tx.send((idx, slot));
                });
            }
            drop(tx);

            for (idx, slot) in rx.iter() {
                let outcome = if slot.is_loaded() {
                    LoadOutcome::Loaded
                } else {
                    LoadOutcome::Failed
                };
                slots[idx.as_usize()] = Some(slot);
                observer.on_frame(idx, outcome);

                let Some(update) = progress.record(outcome) else {
                    continue;
                };
                tracing::debug!(
                    completed = update.completed,
                    percent = update.percent,
                    "preload progress"
                );
                observer.on_progress(update);

                if update.became_ready {
                    let r = PreloadReport {
                        total: self.count.get(),
                        loaded: progress.loaded(),
                        failed: progress.failed(),
                        failed_indices: failed_indices(&slots),
                    };
                    tracing::info!(loaded = r.loaded, failed = r.failed, "frames ready");
                    observer.on_ready(&r);
                    report = Some(r);
                }
            }
        });

        let report = report.ok_or_else(|| {
            ScrollframeError::fetch(format!(
                "preload finished with {} of {} frames settled",
                progress.completed(),
                self.count.get()
            ))
        })?;

        let slots = slots
            .into_iter()
            .map(|s| s.unwrap_or(FrameSlot::Failed))
            .collect();

        Ok(PreloadOutcome {
            store: FrameStore::from_slots(slots, self.opts.failed_frame_policy),
            report,
        })
    }
}

fn load_one<F: FrameFetcher>(
    fetcher: &F,
    idx: FrameIndex,
    address: &str,
) -> ScrollframeResult<PreparedFrame> {
    let bytes = fetcher.fetch(idx, address)?;
    decode_frame(&bytes)
}

fn failed_indices(slots: &[Option<FrameSlot>]) -> Vec<FrameIndex> {
    slots
        .iter()
        .enumerate()
        .filter(|(_, s)| !matches!(s, Some(FrameSlot::Loaded(_))))
        .map(|(i, _)| FrameIndex(i as u32))
        .collect()
}

fn build_thread_pool(threads: usize) -> ScrollframeResult<rayon::ThreadPool> {
    if threads == 0 {
        return Err(ScrollframeError::validation(
            "preload 'threads' must be >= 1 when set",
        ));
    }
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| ScrollframeError::validation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/preload/preloader.rs"]
mod tests;
