use super::*;

fn hero(frames: u32) -> HeroController<ManualTickScheduler> {
    let cfg = HeroConfig {
        total_frames: FrameCount::new(frames).unwrap(),
        ..HeroConfig::default()
    };
    HeroController::new(&cfg, ManualTickScheduler::new()).unwrap()
}

fn settle_all(h: &mut HeroController<ManualTickScheduler>) {
    for idx in h.frame_count().indices() {
        h.frame_settled(idx, LoadOutcome::Loaded);
    }
}

fn half_way() -> ScrollMetrics {
    ScrollMetrics {
        scroll_top: 1500.0,
        container_height: 4000.0,
        viewport_height: 1000.0,
    }
}

#[test]
fn no_frame_is_exposed_while_loading() {
    let mut h = hero(4);
    assert_eq!(h.view(), HeroView::Loading { percent: 0 });
    h.frame_settled(FrameIndex(0), LoadOutcome::Loaded);
    h.frame_settled(FrameIndex(1), LoadOutcome::Failed);
    assert_eq!(h.view(), HeroView::Loading { percent: 50 });
    assert_eq!(h.displayed_frame(), None);
    assert_eq!(h.displayed_address(), None);
    assert_eq!(h.animator_state(), AnimatorState::Idle);
    assert_eq!(h.pump(), None);
}

#[test]
fn ready_starts_animator_once() {
    let mut h = hero(2);
    h.frame_settled(FrameIndex(0), LoadOutcome::Loaded);
    let u = h.frame_settled(FrameIndex(1), LoadOutcome::Loaded).unwrap();
    assert!(u.became_ready);
    assert_eq!(h.animator_state(), AnimatorState::Running);
    assert_eq!(h.animator().scheduler().pending().len(), 1);

    assert_eq!(h.frame_settled(FrameIndex(1), LoadOutcome::Loaded), None);
    assert_eq!(h.animator().scheduler().pending().len(), 1);
    assert_eq!(h.displayed_frame(), Some(FrameIndex(0)));
}

#[test]
fn scroll_before_ready_sets_target_for_later() {
    let mut h = hero(240);
    assert_eq!(h.on_scroll(half_way()), Some(FrameIndex(120)));
    settle_all(&mut h);
    assert_eq!(h.pump(), Some(FrameIndex(14)));
    assert_eq!(h.target_frame(), FrameIndex(120));
}

#[test]
fn scroll_does_not_touch_displayed_frame() {
    let mut h = hero(240);
    settle_all(&mut h);
    h.on_scroll(half_way());
    assert_eq!(h.displayed_frame(), Some(FrameIndex(0)));

    let mut last = 0;
    for _ in 0..200 {
        if let Some(f) = h.pump() {
            assert!(f.0 > last);
            last = f.0;
        }
    }
    assert_eq!(h.displayed_frame(), Some(FrameIndex(120)));
    match h.view() {
        HeroView::Frame { index, address } => {
            assert_eq!(index, FrameIndex(120));
            assert!(address.ends_with("frame_120_delay-0.042s.webp"));
        }
        other => panic!("unexpected view {other:?}"),
    }
}

#[test]
fn teardown_cancels_tick_and_detaches_scroll() {
    let mut h = hero(3);
    settle_all(&mut h);
    let sched = h.animator().scheduler().clone();
    assert_eq!(sched.pending().len(), 1);

    h.teardown();
    assert!(sched.pending().is_empty());
    assert_eq!(sched.canceled().len(), 1);
    assert_eq!(h.view(), HeroView::Detached);
    assert_eq!(h.on_scroll(half_way()), None);
    assert_eq!(h.pump(), None);

    h.teardown();
    assert_eq!(sched.canceled().len(), 1);
}

#[test]
fn drop_tears_down() {
    let sched = ManualTickScheduler::new();
    {
        let mut h = HeroController::new(&HeroConfig::default(), sched.clone()).unwrap();
        settle_all(&mut h);
        assert_eq!(sched.pending().len(), 1);
    }
    assert!(sched.pending().is_empty());
}

#[test]
fn acts_as_preload_observer() {
    let mut h = hero(2);
    h.on_frame(FrameIndex(1), LoadOutcome::Failed);
    h.on_frame(FrameIndex(0), LoadOutcome::Loaded);
    assert!(h.is_ready());
    assert_eq!(h.progress().failed(), 1);
}

fn hero_with_policy(
    frames: u32,
    policy: FailedFramePolicy,
) -> HeroController<ManualTickScheduler> {
    let cfg = HeroConfig {
        total_frames: FrameCount::new(frames).unwrap(),
        failed_frame_policy: policy,
        ..HeroConfig::default()
    };
    HeroController::new(&cfg, ManualTickScheduler::new()).unwrap()
}

#[test]
fn failed_first_frame_shows_nearest_loaded() {
    let mut h = hero_with_policy(3, FailedFramePolicy::NearestLoaded);
    h.on_frame(FrameIndex(2), LoadOutcome::Loaded);
    h.on_frame(FrameIndex(0), LoadOutcome::Failed);
    h.on_frame(FrameIndex(1), LoadOutcome::Loaded);
    assert!(h.is_ready());

    assert_eq!(h.displayed_frame(), Some(FrameIndex(0)));
    assert_eq!(h.shown_frame(), Some(FrameIndex(1)));
    match h.view() {
        HeroView::Frame { index, address } => {
            assert_eq!(index, FrameIndex(1));
            assert!(address.ends_with("frame_001_delay-0.042s.webp"));
        }
        other => panic!("unexpected view {other:?}"),
    }
    assert!(
        h.displayed_address()
            .unwrap()
            .ends_with("frame_001_delay-0.042s.webp")
    );
}

#[test]
fn failed_frame_is_blank_by_default() {
    let mut h = hero(3);
    h.frame_settled(FrameIndex(0), LoadOutcome::Failed);
    h.frame_settled(FrameIndex(1), LoadOutcome::Loaded);
    h.frame_settled(FrameIndex(2), LoadOutcome::Loaded);

    assert_eq!(h.displayed_frame(), Some(FrameIndex(0)));
    assert_eq!(h.shown_frame(), None);
    assert_eq!(h.displayed_address(), None);
    assert_eq!(h.view(), HeroView::Blank { index: FrameIndex(0) });
}

#[test]
fn nearest_loaded_with_nothing_loaded_is_blank() {
    let mut h = hero_with_policy(2, FailedFramePolicy::NearestLoaded);
    h.frame_settled(FrameIndex(0), LoadOutcome::Failed);
    h.frame_settled(FrameIndex(1), LoadOutcome::Failed);
    assert!(h.is_ready());
    assert_eq!(h.view(), HeroView::Blank { index: FrameIndex(0) });
}

#[test]
fn nearest_loaded_follows_the_animator() {
    let mut h = hero_with_policy(240, FailedFramePolicy::NearestLoaded);
    for idx in h.frame_count().indices() {
        let outcome = if (118..=121).contains(&idx.0) {
            LoadOutcome::Failed
        } else {
            LoadOutcome::Loaded
        };
        h.frame_settled(idx, outcome);
    }
    h.on_scroll(half_way());
    for _ in 0..200 {
        h.pump();
    }
    assert_eq!(h.displayed_frame(), Some(FrameIndex(120)));
    assert_eq!(h.shown_frame(), Some(FrameIndex(122)));
}

#[test]
fn out_of_range_and_late_completions_are_ignored() {
    let mut h = hero(2);
    assert_eq!(h.frame_settled(FrameIndex(2), LoadOutcome::Loaded), None);
    assert_eq!(h.progress().completed(), 0);

    settle_all(&mut h);
    assert_eq!(h.frame_settled(FrameIndex(0), LoadOutcome::Failed), None);
    assert_eq!(h.shown_frame(), Some(FrameIndex(0)));
}
