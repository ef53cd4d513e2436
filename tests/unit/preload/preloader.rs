use std::collections::BTreeSet;
use std::io::Cursor;

use super::*;

fn png_bytes() -> Vec<u8> {
    let img = image::RgbaImage::from_raw(2, 1, vec![255, 0, 0, 255, 0, 255, 0, 255]).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[derive(Default)]
struct Recorder {
    frames: Vec<(FrameIndex, LoadOutcome)>,
    updates: Vec<ProgressUpdate>,
    ready: Vec<PreloadReport>,
}

impl PreloadObserver for Recorder {
    fn on_frame(&mut self, idx: FrameIndex, outcome: LoadOutcome) {
        self.frames.push((idx, outcome));
    }

    fn on_progress(&mut self, update: ProgressUpdate) {
        self.updates.push(update);
    }

    fn on_ready(&mut self, report: &PreloadReport) {
        self.ready.push(report.clone());
    }
}

fn preloader(n: u32, threads: Option<usize>) -> Preloader {
    Preloader::new(
        FrameCount::new(n).unwrap(),
        FrameAddressing::default().with_base_path("mem/"),
        PreloadOpts {
            threads,
            failed_frame_policy: FailedFramePolicy::Blank,
        },
    )
    .unwrap()
}

#[test]
fn every_frame_settles_and_ready_fires_once() {
    let png = png_bytes();
    let fetcher = |idx: FrameIndex, address: &str| -> ScrollframeResult<Vec<u8>> {
        assert!(address.starts_with("mem/frame_"));
        if idx.0 % 5 == 3 {
            return Err(ScrollframeError::fetch("missing"));
        }
        Ok(png.clone())
    };

    let mut rec = Recorder::default();
    let out = preloader(40, Some(4)).run(&fetcher, &mut rec).unwrap();

    assert_eq!(rec.frames.len(), 40);
    let seen: BTreeSet<_> = rec.frames.iter().map(|(i, _)| i.0).collect();
    assert_eq!(seen.len(), 40);

    assert_eq!(rec.updates.len(), 40);
    let completed: Vec<_> = rec.updates.iter().map(|u| u.completed).collect();
    assert_eq!(completed, (1..=40).collect::<Vec<_>>());
    assert_eq!(rec.updates.iter().filter(|u| u.became_ready).count(), 1);
    assert!(rec.updates.last().unwrap().became_ready);
    assert_eq!(rec.updates.last().unwrap().percent, 100);

    assert_eq!(rec.ready.len(), 1);
    assert_eq!(out.report.total, 40);
    assert_eq!(out.report.failed, 8);
    assert_eq!(out.report.loaded, 32);
    assert_eq!(out.report.failed_indices[0], FrameIndex(3));
    assert_eq!(out.report, rec.ready[0]);

    assert_eq!(out.store.len(), 40);
    assert!(out.store.resolve(FrameIndex(0)).is_some());
    assert!(out.store.resolve(FrameIndex(3)).is_none());
    assert_eq!(out.store.failed_indices(), out.report.failed_indices);
}

#[test]
fn undecodable_bytes_count_as_failed() {
    let fetcher =
        |_idx: FrameIndex, _address: &str| -> ScrollframeResult<Vec<u8>> { Ok(vec![1, 2, 3]) };
    let out = preloader(3, Some(1)).run(&fetcher, &mut ()).unwrap();
    assert_eq!(out.report.failed, 3);
    assert_eq!(out.report.loaded, 0);
    assert_eq!(out.store.failed_indices().len(), 3);
}

#[test]
fn zero_threads_is_rejected() {
    let fetcher =
        |_idx: FrameIndex, _address: &str| -> ScrollframeResult<Vec<u8>> { Ok(Vec::new()) };
    let err = preloader(2, Some(0)).run(&fetcher, &mut ()).unwrap_err();
    assert!(matches!(err, ScrollframeError::Validation(_)));
}

#[test]
fn new_validates_addressing() {
    let res = Preloader::new(
        FrameCount::new(5000).unwrap(),
        FrameAddressing::default(),
        PreloadOpts::default(),
    );
    assert!(res.is_err());
}

#[test]
fn every_fetch_is_in_flight_at_once_by_default() {
    let n = 16;
    let png = png_bytes();
    // Each fetch waits for all the others; a capped pool would never get past the barrier.
    let barrier = std::sync::Barrier::new(n as usize);
    let fetcher = |_idx: FrameIndex, _address: &str| -> ScrollframeResult<Vec<u8>> {
        barrier.wait();
        Ok(png.clone())
    };
    let out = preloader(n, None).run(&fetcher, &mut ()).unwrap();
    assert_eq!(out.report.loaded, n);
}

#[test]
fn from_hero_takes_count_addressing_and_policy() {
    let cfg = HeroConfig {
        total_frames: FrameCount::new(4).unwrap(),
        addressing: FrameAddressing::default().with_base_path("cdn/"),
        failed_frame_policy: FailedFramePolicy::NearestLoaded,
        ..HeroConfig::default()
    };
    let p = Preloader::from_hero(&cfg, Some(2)).unwrap();
    assert_eq!(p.count(), cfg.total_frames);
    assert_eq!(p.addressing(), &cfg.addressing);

    let png = png_bytes();
    let fetcher = |idx: FrameIndex, address: &str| -> ScrollframeResult<Vec<u8>> {
        assert!(address.starts_with("cdn/frame_"));
        if idx.0 == 0 {
            return Err(ScrollframeError::fetch("missing"));
        }
        Ok(png.clone())
    };
    let out = p.run(&fetcher, &mut ()).unwrap();
    assert_eq!(out.store.resolve_index(FrameIndex(0)), Some(FrameIndex(1)));

    let bad = HeroConfig {
        total_frames: FrameCount::new(5000).unwrap(),
        ..HeroConfig::default()
    };
    assert!(Preloader::from_hero(&bad, None).is_err());
}
