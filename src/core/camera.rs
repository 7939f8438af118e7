//! Camera framing for the logo model.
//!
//! The renderer owns the actual camera; this module only derives where it
//! should sit so the model's bounding box fills the view.

use super::constants::{CAMERA_FAR_MULTIPLIER, CAMERA_NEAR_DIVISOR};
use super::error::{Error, Result};
use glam::{DMat4, DVec3};

/// Axis-aligned box around the model geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingVolume {
    pub center: DVec3,
    pub size: DVec3,
}

impl BoundingVolume {
    pub fn from_min_max(min: DVec3, max: DVec3) -> Self {
        Self {
            center: (min + max) * 0.5,
            size: max - min,
        }
    }

    pub fn from_points<I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = DVec3>,
    {
        let mut iter = points.into_iter();
        let first = iter.next().ok_or(Error::EmptyGeometry)?;
        let (min, max) = iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Ok(Self::from_min_max(min, max))
    }

    #[inline]
    pub fn max_extent(&self) -> f64 {
        self.size.max_element()
    }
}

/// Camera placement derived from a bounding volume.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraFrame {
    pub position: DVec3,
    pub target: DVec3,
    pub near: f64,
    pub far: f64,
}

impl CameraFrame {
    #[inline]
    pub fn distance(&self) -> f64 {
        self.position.z
    }
    /// World to view transform looking at `target` with +Y up.
    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_at_rh(self.position, self.target, DVec3::Y)
    }
    /// Clip-space projection for this frame's clip planes.
    pub fn projection_matrix(&self, fov_degrees: f64, aspect: f64) -> DMat4 {
        DMat4::perspective_rh(fov_degrees.to_radians(), aspect, self.near, self.far)
    }
}

/// Place the camera on +Z so the largest side of `volume` fits the vertical
/// field of view, scaled by `margin`. Degenerate input is not checked; see
/// [`try_fit_camera`].
pub fn fit_camera_to_volume(volume: &BoundingVolume, fov_degrees: f64, margin: f64) -> CameraFrame {
    let max_extent = volume.max_extent();
    let fov = fov_degrees.to_radians();
    let distance = (max_extent / (2.0 * (fov / 2.0).tan())).abs() * margin;
    CameraFrame {
        position: DVec3::new(volume.center.x, volume.center.y, distance),
        target: volume.center,
        near: distance / CAMERA_NEAR_DIVISOR,
        far: distance * CAMERA_FAR_MULTIPLIER,
    }
}

/// [`fit_camera_to_volume`] with its preconditions enforced.
pub fn try_fit_camera(volume: &BoundingVolume, fov_degrees: f64, margin: f64) -> Result<CameraFrame> {
    let max_extent = volume.max_extent();
    if !(max_extent.is_finite() && max_extent > 0.0) {
        return Err(Error::DegenerateVolume(max_extent));
    }
    if !(fov_degrees > 0.0 && fov_degrees < 180.0) {
        return Err(Error::InvalidFieldOfView(fov_degrees));
    }
    if !(margin.is_finite() && margin > 0.0) {
        return Err(Error::InvalidMargin(margin));
    }
    Ok(fit_camera_to_volume(volume, fov_degrees, margin))
}
