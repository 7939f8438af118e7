// Host-side tests for search gating, debouncing and navigation URLs.

use instant::Instant;
use logo_dock::core::search::{
    parse_suggestions, parse_threshold, search_result_url, slider_background,
    slider_fill_percent, suggest_url, suggestion_query, threshold_label, Debouncer,
};
use std::time::Duration;

#[test]
fn suggestions_need_three_trimmed_chars() {
    assert_eq!(suggestion_query("tu"), None);
    assert_eq!(suggestion_query("  tu  "), None);
    assert_eq!(suggestion_query(" tur "), Some("tur"));
    assert_eq!(suggestion_query("Ceramic Brakes"), Some("Ceramic Brakes"));
    assert_eq!(suggestion_query(""), None);
}

#[test]
fn suggest_url_encodes_like_encode_uri_component() {
    assert_eq!(suggest_url("oil"), "/api/parts_suggest?q=oil");
    assert_eq!(
        suggest_url("brake pads & more"),
        "/api/parts_suggest?q=brake%20pads%20%26%20more"
    );
}

#[test]
fn parses_suggestion_payload() {
    let items = parse_suggestions(r#"{"items": ["Turbocharger", "Titanium Bolts"]}"#).unwrap();
    assert_eq!(items, vec!["Turbocharger", "Titanium Bolts"]);
    assert!(parse_suggestions("{}").unwrap().is_empty());
    assert!(parse_suggestions("not json").is_err());
}

#[test]
fn debouncer_releases_after_delay() {
    let t0 = Instant::now();
    let mut d = Debouncer::new(Duration::from_millis(200));
    d.schedule("tur", t0);
    assert!(d.is_pending());
    assert_eq!(d.take_due(t0 + Duration::from_millis(199)), None);
    assert_eq!(
        d.take_due(t0 + Duration::from_millis(200)).as_deref(),
        Some("tur")
    );
    assert!(!d.is_pending());
    assert_eq!(d.take_due(t0 + Duration::from_millis(500)), None);
}

#[test]
fn debouncer_keeps_only_latest_query() {
    let t0 = Instant::now();
    let mut d = Debouncer::default();
    assert_eq!(d.delay(), Duration::from_millis(200));
    d.schedule("tur", t0);
    d.schedule("turb", t0 + Duration::from_millis(150));
    // first deadline has passed but was superseded
    assert_eq!(d.take_due(t0 + Duration::from_millis(250)), None);
    assert_eq!(
        d.remaining(t0 + Duration::from_millis(250)),
        Some(Duration::from_millis(100))
    );
    assert_eq!(
        d.take_due(t0 + Duration::from_millis(350)).as_deref(),
        Some("turb")
    );
}

#[test]
fn debouncer_cancel_drops_pending() {
    let t0 = Instant::now();
    let mut d = Debouncer::default();
    d.schedule("oil", t0);
    d.cancel();
    assert_eq!(d.remaining(t0), None);
    assert_eq!(d.take_due(t0 + Duration::from_secs(1)), None);
}

#[test]
fn threshold_label_and_fill() {
    assert_eq!(threshold_label("0.5"), "0.50");
    assert_eq!(threshold_label("0.123"), "0.12");
    assert_eq!(threshold_label(""), "0.00");
    assert_eq!(slider_fill_percent("0.5"), 50);
    assert_eq!(slider_fill_percent("0.76"), 76);
    assert_eq!(slider_fill_percent("1.7"), 100);
    assert_eq!(slider_fill_percent("-1"), 0);
    assert_eq!(slider_fill_percent("abc"), 0);
    assert!(parse_threshold("abc").is_nan());
}

#[test]
fn slider_background_splits_at_percent() {
    assert_eq!(
        slider_background(40),
        "linear-gradient(90deg, #2ecc71 0% 40%, rgba(255,255,255,0.12) 40%)"
    );
}

#[test]
fn search_url_trims_name_and_defaults_threshold() {
    assert_eq!(
        search_result_url("  Fuel Pump ", "0.7"),
        "/search_result?name=Fuel+Pump&threshold=0.7"
    );
    assert_eq!(
        search_result_url("", ""),
        "/search_result?name=&threshold=0.5"
    );
}
