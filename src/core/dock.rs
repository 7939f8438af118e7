//! Dock placement policy and the two-state scroll machine.
//!
//! While the page is scrolled above the dock threshold the logo follows the
//! S-curve with absolute positioning. Past the threshold it switches to fixed
//! positioning anchored next to a layout region.

use super::constants::{DOCK_GAP, DOCK_VERTICAL_BIAS, LANDING_MARGIN};
use super::path::{clamp_progress, SCurve};
use glam::DVec2;

/// Bounding client rectangle of a layout element, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DockConfig {
    pub gap: f64,
    pub vertical_bias: f64,
    pub landing_margin: f64,
    /// Used when neither the dock target nor the header title is on the page.
    pub default_padding_left: f64,
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            gap: DOCK_GAP,
            vertical_bias: DOCK_VERTICAL_BIAS,
            landing_margin: LANDING_MARGIN,
            default_padding_left: 0.0,
        }
    }
}

/// Where the docked logo sits, falling back from the dock target to the
/// header title to the header padding.
pub fn resolve_dock_offset(
    reference: Option<Rect>,
    fallback: Option<Rect>,
    gap: f64,
    config: &DockConfig,
) -> DVec2 {
    if let Some(r) = reference {
        return DVec2::new(
            r.left + gap,
            (r.top + gap - config.vertical_bias).max(0.0),
        );
    }
    if let Some(r) = fallback {
        return DVec2::new(r.right + gap, 0.0);
    }
    DVec2::new(config.default_padding_left, 0.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DockState {
    Scrolling,
    Docked,
}

/// CSS `position` the shell applies for a given state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Positioning {
    Absolute,
    Fixed,
}

impl Positioning {
    pub fn as_css(self) -> &'static str {
        match self {
            Positioning::Absolute => "absolute",
            Positioning::Fixed => "fixed",
        }
    }
}

impl DockState {
    pub fn positioning(self) -> Positioning {
        match self {
            DockState::Scrolling => Positioning::Absolute,
            DockState::Docked => Positioning::Fixed,
        }
    }
}

/// Scroll offset at which the logo docks.
#[inline]
pub fn dock_threshold(landing_height: f64, landing_margin: f64) -> f64 {
    landing_height - landing_margin
}

/// No hysteresis: the state depends only on the current scroll offset.
#[inline]
pub fn dock_state(scroll_y: f64, threshold: f64) -> DockState {
    if scroll_y < threshold {
        DockState::Scrolling
    } else {
        DockState::Docked
    }
}

/// Layout measurements read fresh from the page on each scroll/resize.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollInput {
    pub scroll_y: f64,
    pub landing_height: f64,
    pub viewport: DVec2,
    pub dock_target: Option<Rect>,
    pub header_title: Option<Rect>,
}

/// Result of one scroll evaluation, ready to be written to the logo container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub state: DockState,
    pub progress: f64,
    pub positioning: Positioning,
    /// Whole-pixel translation.
    pub translate: DVec2,
}

impl Placement {
    pub fn css_transform(&self) -> String {
        format!(
            "translate({}px, {}px)",
            self.translate.x as i64, self.translate.y as i64
        )
    }
}

pub fn evaluate_scroll(input: &ScrollInput, curve: &SCurve, config: &DockConfig) -> Placement {
    let threshold = dock_threshold(input.landing_height, config.landing_margin);
    let state = dock_state(input.scroll_y, threshold);
    match state {
        DockState::Scrolling => {
            let progress = clamp_progress(input.scroll_y / threshold);
            let offset = curve.sample(progress, input.viewport);
            Placement {
                state,
                progress,
                positioning: state.positioning(),
                // half-up, like the browser's Math.round
                translate: (offset + DVec2::splat(0.5)).floor(),
            }
        }
        DockState::Docked => {
            let offset = resolve_dock_offset(
                input.dock_target,
                input.header_title,
                config.gap,
                config,
            );
            Placement {
                state,
                progress: 1.0,
                positioning: state.positioning(),
                translate: offset.floor(),
            }
        }
    }
}
