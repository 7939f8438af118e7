//! Entry points for the external 3D renderer.

use crate::constants::LOADER_ID;
use crate::core::constants::{CAMERA_FIT_MARGIN, CAMERA_FOV_DEGREES};
use crate::core::{sample_curve, try_fit_camera, BoundingVolume, CameraFrame};
use crate::dom;
use crate::frame::{self, FrameContext, MODEL_READY};
use glam::DVec3;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::Ordering;
use wasm_bindgen::prelude::*;

/// Camera placement handed to JS; mirrors [`CameraFrame`].
#[wasm_bindgen(js_name = CameraFrame)]
#[derive(Clone, Copy, Debug)]
pub struct CameraFrameJs {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    #[wasm_bindgen(js_name = targetX)]
    pub target_x: f64,
    #[wasm_bindgen(js_name = targetY)]
    pub target_y: f64,
    #[wasm_bindgen(js_name = targetZ)]
    pub target_z: f64,
    pub near: f64,
    pub far: f64,
}

impl From<CameraFrame> for CameraFrameJs {
    fn from(f: CameraFrame) -> Self {
        Self {
            x: f.position.x,
            y: f.position.y,
            z: f.position.z,
            target_x: f.target.x,
            target_y: f.target.y,
            target_z: f.target.z,
            near: f.near,
            far: f.far,
        }
    }
}

fn vec3(name: &str, v: &[f64]) -> Result<DVec3, JsError> {
    match v {
        [x, y, z] => Ok(DVec3::new(*x, *y, *z)),
        _ => Err(JsError::new(&format!("{} must have 3 components", name))),
    }
}

/// `[x, y]` offset along the S-curve; `progress` is clamped by the caller.
#[wasm_bindgen(js_name = sampleCurve)]
pub fn sample_curve_js(progress: f64, viewport_width: f64, viewport_height: f64) -> Vec<f64> {
    let p = sample_curve(progress, viewport_width, viewport_height);
    vec![p.x, p.y]
}

#[wasm_bindgen(js_name = fitCameraToBox)]
pub fn fit_camera_to_box(
    min: &[f64],
    max: &[f64],
    fov_degrees: f64,
    margin: f64,
) -> Result<CameraFrameJs, JsError> {
    let volume = BoundingVolume::from_min_max(vec3("min", min)?, vec3("max", max)?);
    let frame = try_fit_camera(&volume, fov_degrees, margin)?;
    Ok(frame.into())
}

/// Frame the loaded model with the page camera, hide the loader and start
/// the rotation.
#[wasm_bindgen(js_name = markModelLoaded)]
pub fn mark_model_loaded(min: &[f64], max: &[f64]) -> Result<CameraFrameJs, JsError> {
    let frame = fit_camera_to_box(min, max, CAMERA_FOV_DEGREES, CAMERA_FIT_MARGIN)?;
    if let Some(loader) = dom::window_document().and_then(|d| dom::html_by_id(&d, LOADER_ID)) {
        dom::set_style(&loader, "display", "none");
    }
    MODEL_READY.store(true, Ordering::Relaxed);
    log::info!(
        "[model] loaded; camera z={:.3} near={:.4} far={:.1}",
        frame.z,
        frame.near,
        frame.far
    );
    Ok(frame)
}

/// Drive `onFrame(angle)` from `requestAnimationFrame`.
#[wasm_bindgen(js_name = startFrameLoop)]
pub fn start_frame_loop(on_frame: js_sys::Function) {
    frame::start_loop(Rc::new(RefCell::new(FrameContext::new(on_frame))));
}
