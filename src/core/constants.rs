use glam::DVec2;

// Shared layout/animation tuning constants used by the pure core.

// S-curve control points as fractions of the viewport (x of width, y of height)
pub const CURVE_START: DVec2 = DVec2::new(0.0, 0.0);
pub const CURVE_CONTROL_1: DVec2 = DVec2::new(0.14, -0.16);
pub const CURVE_CONTROL_2: DVec2 = DVec2::new(0.26, 0.08);
pub const CURVE_END: DVec2 = DVec2::new(0.38, -0.04); // near the right panel; docking takes over after

// Docking
pub const DOCK_GAP: f64 = 12.0; // px between the logo and the element it docks against
pub const DOCK_VERTICAL_BIAS: f64 = 50.0; // lifts the docked logo above the reference top edge
pub const LANDING_MARGIN: f64 = 400.0; // subtracted from the landing height to get the dock threshold

// Logo rotation (radians)
pub const ROTATION_SPEED: f64 = 0.005; // per frame
pub const ROTATION_LIMIT: f64 = 0.3; // |angle| above this flips the direction

// Camera
pub const CAMERA_FOV_DEGREES: f64 = 75.0;
pub const CAMERA_FIT_MARGIN: f64 = 1.1;
pub const CAMERA_NEAR_DIVISOR: f64 = 100.0;
pub const CAMERA_FAR_MULTIPLIER: f64 = 100.0;

// Search
pub const SUGGEST_MIN_CHARS: usize = 3;
pub const SUGGEST_DEBOUNCE_MS: u64 = 200;
pub const DEFAULT_THRESHOLD: &str = "0.5";
