use super::*;

#[test]
fn missing_or_blank_script_means_defaults() {
    assert!(matches!(parse(None), Ok(None)));
    assert!(matches!(parse(Some("  \n ")), Ok(None)));
}

#[test]
fn script_overrides_are_applied() {
    let cfg = parse(Some(r#"{ "scrollTopThresholdPx": 500 }"#))
        .expect("valid json")
        .expect("overrides present");
    assert!((cfg.scroll_top_threshold_px - 500.0).abs() < f64::EPSILON);
}

#[test]
fn invalid_script_is_an_error() {
    assert!(parse(Some("not json")).is_err());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn read_without_browser_has_no_overrides() {
    assert!(matches!(read(), Ok(None)));
}
