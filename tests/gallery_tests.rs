// Host-side tests for gallery payloads and card navigation.

use logo_dock::core::gallery::{
    detail_page_url, detail_request_url, is_activation_key, parse_detail, parse_parts,
};
use logo_dock::core::Error;

#[test]
fn parses_parts_list() {
    let body = r#"[
        {"name": "Turbocharger", "desc": "Boost.", "image": "https://example.com/t.jpg"},
        {"name": "Ceramic Brakes"}
    ]"#;
    let parts = parse_parts(body).unwrap();
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0].name, "Turbocharger");
    assert_eq!(parts[0].image, "https://example.com/t.jpg");
    assert_eq!(parts[1].desc, "");
}

#[test]
fn malformed_parts_payload_is_a_json_error() {
    assert!(matches!(parse_parts(r#"{"items": []}"#), Err(Error::Json(_))));
}

#[test]
fn detail_round_trip_urls() {
    assert_eq!(
        detail_request_url("Carbon Fiber Wing"),
        "/detail?name=Carbon+Fiber+Wing"
    );
    let detail = parse_detail(r#"{"name": "Carbon Fiber Wing"}"#).unwrap();
    assert_eq!(
        detail_page_url(&detail.name),
        "/detail_page?name=Carbon%20Fiber%20Wing"
    );
}

#[test]
fn enter_and_space_open_a_card() {
    assert!(is_activation_key("Enter"));
    assert!(is_activation_key(" "));
    assert!(!is_activation_key("Tab"));
    assert!(!is_activation_key("a"));
}
