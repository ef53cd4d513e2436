use super::*;

#[test]
fn defaults_match_reference_page() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.hero.total_frames.get(), 240);
    assert_eq!(cfg.hero.smoothing.get(), 0.12);
    assert_eq!(cfg.hero.failed_frame_policy, FailedFramePolicy::Blank);
    assert_eq!(cfg.theme.accent_color, "#ff5e00");
    assert_eq!(cfg.learning_paths.len(), 4);
    assert_eq!(cfg.learning_paths[0].index, "#01");
    assert_eq!(cfg.learning_paths[3].title, "AI App Development");
    let names: Vec<_> = cfg.social_links.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["YouTube", "Instagram", "X"]);
    assert_eq!(cfg.faq.len(), 3);
    cfg.validate().unwrap();
}

#[test]
fn empty_document_is_the_default() {
    let cfg = SiteConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, SiteConfig::default());
}

#[test]
fn json_roundtrip_preserves_config() {
    let cfg = SiteConfig::default();
    let text = cfg.to_json_pretty().unwrap();
    assert!(text.contains("\"total_frames\": 240"));
    assert_eq!(SiteConfig::from_json_str(&text).unwrap(), cfg);
}

#[test]
fn partial_hero_override() {
    let cfg = SiteConfig::from_json_str(
        r#"{"hero": {"total_frames": 12, "smoothing": 0.5, "failed_frame_policy": "nearest_loaded"}}"#,
    )
    .unwrap();
    assert_eq!(cfg.hero.total_frames.get(), 12);
    assert_eq!(cfg.hero.smoothing.get(), 0.5);
    assert_eq!(cfg.hero.failed_frame_policy, FailedFramePolicy::NearestLoaded);
    assert_eq!(cfg.hero.addressing, FrameAddressing::default());
}

#[test]
fn invalid_documents_are_rejected() {
    assert!(SiteConfig::from_json_str(r#"{"hero": {"total_frames": 0}}"#).is_err());
    assert!(SiteConfig::from_json_str(r#"{"hero": {"smoothing": 0}}"#).is_err());
    assert!(SiteConfig::from_json_str(r#"{"hero": {"total_frames": 1001}}"#).is_err());
    assert!(SiteConfig::from_json_str(r##"{"theme": {"accent_color": "#12"}}"##).is_err());

    let dup = r##"{"learning_paths": [
        {"id": "a", "title": "A", "index": "#01", "description": "", "thumbnail": ""},
        {"id": "a", "title": "B", "index": "#02", "description": "", "thumbnail": ""}
    ]}"##;
    let err = SiteConfig::from_json_str(dup).unwrap_err();
    assert!(matches!(err, ScrollframeError::Config(_)));
}

#[test]
fn accent_parses() {
    let accent = SiteConfig::default().accent().unwrap();
    assert_eq!((accent.r, accent.g, accent.b), (0xff, 0x5e, 0x00));
}
