// Host-side tests for tuning constants and their relationships.

use logo_dock::core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn curve_ends_right_of_start() {
    assert_eq!(CURVE_START.x, 0.0);
    assert_eq!(CURVE_START.y, 0.0);
    assert!(CURVE_END.x > CURVE_CONTROL_2.x);
    assert!(CURVE_CONTROL_2.x > CURVE_CONTROL_1.x);
    assert!(CURVE_END.x < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn dock_and_camera_constants_are_positive() {
    assert!(DOCK_GAP > 0.0);
    assert!(DOCK_VERTICAL_BIAS > 0.0);
    assert!(LANDING_MARGIN > 0.0);
    assert!(CAMERA_FOV_DEGREES > 0.0 && CAMERA_FOV_DEGREES < 180.0);
    assert!(CAMERA_FIT_MARGIN >= 1.0);
    assert!(CAMERA_NEAR_DIVISOR > 1.0 && CAMERA_FAR_MULTIPLIER > 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn rotation_increment_is_small_relative_to_limit() {
    assert!(ROTATION_SPEED > 0.0);
    assert!(ROTATION_SPEED < ROTATION_LIMIT / 10.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn default_threshold_parses() {
    assert_eq!(DEFAULT_THRESHOLD.parse::<f64>().ok(), Some(0.5));
    assert!(SUGGEST_MIN_CHARS > 0);
    assert!(SUGGEST_DEBOUNCE_MS > 0);
}
