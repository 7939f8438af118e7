// Host-side tests for camera framing.

use glam::{DVec3, DVec4};
use logo_dock::core::{fit_camera_to_volume, try_fit_camera, BoundingVolume, Error};

const EPS: f64 = 1e-9;

fn unit_cube() -> BoundingVolume {
    BoundingVolume {
        center: DVec3::ZERO,
        size: DVec3::ONE,
    }
}

#[test]
fn unit_cube_at_ninety_degrees() {
    let frame = fit_camera_to_volume(&unit_cube(), 90.0, 1.0);
    assert!((frame.distance() - 0.5).abs() < EPS);
    assert!((frame.near - 0.005).abs() < EPS);
    assert!((frame.far - 50.0).abs() < 1e-6);
    assert_eq!(frame.target, DVec3::ZERO);
}

#[test]
fn margin_scales_distance_and_clip_planes() {
    let base = fit_camera_to_volume(&unit_cube(), 75.0, 1.0);
    let padded = fit_camera_to_volume(&unit_cube(), 75.0, 1.1);
    assert!((padded.distance() - base.distance() * 1.1).abs() < EPS);
    assert!((padded.near - padded.distance() / 100.0).abs() < EPS);
    assert!((padded.far - padded.distance() * 100.0).abs() < 1e-6);
}

#[test]
fn camera_sits_in_front_of_off_center_volume() {
    let volume = BoundingVolume::from_min_max(DVec3::new(1.0, 2.0, -1.0), DVec3::new(3.0, 6.0, 1.0));
    assert_eq!(volume.center, DVec3::new(2.0, 4.0, 0.0));
    assert_eq!(volume.max_extent(), 4.0);
    let frame = fit_camera_to_volume(&volume, 90.0, 1.0);
    assert_eq!(frame.position.x, 2.0);
    assert_eq!(frame.position.y, 4.0);
    assert!((frame.position.z - 2.0).abs() < EPS);
    assert!(frame.near > 0.0 && frame.near < frame.far);
}

#[test]
fn largest_side_drives_distance() {
    let flat = BoundingVolume {
        center: DVec3::ZERO,
        size: DVec3::new(0.2, 3.0, 0.1),
    };
    let frame = fit_camera_to_volume(&flat, 90.0, 1.0);
    assert!((frame.distance() - 1.5).abs() < EPS);
}

#[test]
fn view_matrix_puts_target_straight_ahead() {
    let frame = fit_camera_to_volume(&unit_cube(), 75.0, 1.1);
    let v = frame.view_matrix() * DVec4::new(0.0, 0.0, 0.0, 1.0);
    assert!(v.x.abs() < EPS && v.y.abs() < EPS);
    assert!((v.z + frame.distance()).abs() < EPS);
}

#[test]
fn bounding_volume_from_points() {
    let points = [
        DVec3::new(-1.0, 0.0, 2.0),
        DVec3::new(3.0, -2.0, 0.0),
        DVec3::new(0.5, 4.0, 1.0),
    ];
    let volume = BoundingVolume::from_points(points).expect("non-empty");
    assert_eq!(volume.size, DVec3::new(4.0, 6.0, 2.0));
    assert_eq!(volume.center, DVec3::new(1.0, 1.0, 1.0));
}

#[test]
fn empty_geometry_is_rejected() {
    let err = BoundingVolume::from_points(Vec::<DVec3>::new()).unwrap_err();
    assert!(matches!(err, Error::EmptyGeometry));
}

#[test]
fn checked_fit_rejects_degenerate_input() {
    let point = BoundingVolume {
        center: DVec3::ONE,
        size: DVec3::ZERO,
    };
    assert!(matches!(
        try_fit_camera(&point, 75.0, 1.1),
        Err(Error::DegenerateVolume(_))
    ));
    assert!(matches!(
        try_fit_camera(&unit_cube(), 0.0, 1.1),
        Err(Error::InvalidFieldOfView(_))
    ));
    assert!(matches!(
        try_fit_camera(&unit_cube(), 180.0, 1.1),
        Err(Error::InvalidFieldOfView(_))
    ));
    assert!(matches!(
        try_fit_camera(&unit_cube(), 75.0, 0.0),
        Err(Error::InvalidMargin(_))
    ));
}

#[test]
fn checked_fit_matches_unchecked_on_valid_input() {
    let checked = try_fit_camera(&unit_cube(), 75.0, 1.1).expect("valid input");
    assert_eq!(checked, fit_camera_to_volume(&unit_cube(), 75.0, 1.1));
}
