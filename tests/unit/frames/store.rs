use std::sync::Arc;

use super::*;

fn frame(tag: u8) -> FrameSlot {
    FrameSlot::Loaded(PreparedFrame {
        width: 1,
        height: 1,
        rgba8_premul: Arc::new(vec![tag, tag, tag, 255]),
    })
}

fn store(pattern: &str, policy: FailedFramePolicy) -> FrameStore {
    let slots = pattern
        .bytes()
        .enumerate()
        .map(|(i, c)| if c == b'x' { FrameSlot::Failed } else { frame(i as u8) })
        .collect();
    FrameStore::from_slots(slots, policy)
}

#[test]
fn blank_policy_shows_nothing_for_failed_frames() {
    let s = store("ox o", FailedFramePolicy::Blank);
    assert_eq!(s.resolve_index(FrameIndex(0)), Some(FrameIndex(0)));
    assert_eq!(s.resolve_index(FrameIndex(1)), None);
    assert!(s.resolve(FrameIndex(1)).is_none());
    assert_eq!(s.resolve_index(FrameIndex(9)), None);
}

#[test]
fn nearest_loaded_prefers_earlier_on_ties() {
    let s = store("oxo", FailedFramePolicy::NearestLoaded);
    assert_eq!(s.resolve_index(FrameIndex(1)), Some(FrameIndex(0)));
    let f = s.resolve(FrameIndex(1)).unwrap();
    assert_eq!(f.rgba8_premul[0], 0);
}

#[test]
fn nearest_loaded_searches_both_directions() {
    let s = store("xxxo", FailedFramePolicy::NearestLoaded);
    assert_eq!(s.resolve_index(FrameIndex(0)), Some(FrameIndex(3)));

    let s = store("oxxxxx", FailedFramePolicy::NearestLoaded);
    assert_eq!(s.resolve_index(FrameIndex(5)), Some(FrameIndex(0)));

    let s = store("xxx", FailedFramePolicy::NearestLoaded);
    assert_eq!(s.resolve_index(FrameIndex(1)), None);
}

#[test]
fn failed_indices_and_count() {
    let s = store("oxox", FailedFramePolicy::Blank);
    assert_eq!(s.failed_indices(), vec![FrameIndex(1), FrameIndex(3)]);
    assert_eq!(s.frame_count().unwrap().get(), 4);
    assert!(FrameStore::from_slots(vec![], FailedFramePolicy::Blank)
        .frame_count()
        .is_none());
}

#[test]
fn policy_serde_names() {
    assert_eq!(
        serde_json::to_string(&FailedFramePolicy::NearestLoaded).unwrap(),
        "\"nearest_loaded\""
    );
    let p: FailedFramePolicy = serde_json::from_str("\"blank\"").unwrap();
    assert_eq!(p, FailedFramePolicy::Blank);
}
