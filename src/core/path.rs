//! Scroll-driven motion along a fixed S-shaped cubic Bézier curve.
//!
//! Control points are expressed as fractions of the viewport so the same
//! curve scales with the window. Progress is eased before evaluation to give
//! slow-in/slow-out motion from a linear scroll position.

use super::constants::{CURVE_CONTROL_1, CURVE_CONTROL_2, CURVE_END, CURVE_START};
use glam::DVec2;
use std::f64::consts::PI;

/// Cubic Bézier defined by four viewport-relative control points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SCurve {
    pub start: DVec2,
    pub control1: DVec2,
    pub control2: DVec2,
    pub end: DVec2,
}

impl SCurve {
    pub const DEFAULT: SCurve = SCurve {
        start: CURVE_START,
        control1: CURVE_CONTROL_1,
        control2: CURVE_CONTROL_2,
        end: CURVE_END,
    };

    /// Control points scaled to pixel offsets for the given viewport size.
    pub fn control_points(&self, viewport: DVec2) -> [DVec2; 4] {
        [
            self.start * viewport,
            self.control1 * viewport,
            self.control2 * viewport,
            self.end * viewport,
        ]
    }

    /// Sample the curve at `progress`, which the caller must have clamped to [0, 1].
    pub fn sample(&self, progress: f64, viewport: DVec2) -> DVec2 {
        let [p0, p1, p2, p3] = self.control_points(viewport);
        let t = ease_in_out(progress);
        DVec2::new(
            cubic_bezier(p0.x, p1.x, p2.x, p3.x, t),
            cubic_bezier(p0.y, p1.y, p2.y, p3.y, t),
        )
    }
}

impl Default for SCurve {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Sample the default S-curve. `progress` must already be clamped to [0, 1].
#[inline]
pub fn sample_curve(progress: f64, viewport_width: f64, viewport_height: f64) -> DVec2 {
    SCurve::DEFAULT.sample(progress, DVec2::new(viewport_width, viewport_height))
}

/// Cosine ease-in-out remap of `t` in [0, 1].
#[inline]
pub fn ease_in_out(t: f64) -> f64 {
    0.5 - 0.5 * (PI * t).cos()
}

/// One component of a cubic Bézier in Bernstein form.
#[inline]
pub fn cubic_bezier(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Clamp raw scroll progress into [0, 1]; NaN maps to the start of the path.
#[inline]
pub fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}
