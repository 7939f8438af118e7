/// DOM hooks and timing constants used by the browser shell.
///
/// Element ids and selectors match the page markup; keeping them here keeps
/// string literals out of the event wiring.
// Layout elements read on every scroll/resize
pub const LOGO_CONTAINER_ID: &str = "container3d";
pub const LANDING_SELECTOR: &str = ".landing-page";
pub const HEADER_SELECTOR: &str = ".header";
pub const DOCK_TARGET_SELECTOR: &str = ".right";
pub const LOADER_ID: &str = "loader-wrapper";

// Call to action
pub const EXPLORE_BUTTON_ID: &str = "exploreNow";
pub const SECOND_PAGE_ID: &str = "secondPage";

// Gallery
pub const GALLERY_ID: &str = "gallery";
pub const GALLERY_SKELETON_COUNT: usize = 6;
pub const GALLERY_SKELETON_HEIGHT: &str = "260px";
pub const PARTS_ENDPOINT: &str = "/api/parts";

// Search
pub const SEARCH_INPUT_ID: &str = "partSearch";
pub const SUGGESTIONS_ID: &str = "suggestions";
pub const THRESHOLD_INPUT_ID: &str = "threshold";
pub const THRESHOLD_VALUE_ID: &str = "thresholdValue";
pub const SEARCH_BUTTON_ID: &str = "doSearch";
pub const SUGGESTIONS_VISIBLE_CLASS: &str = "visible";
pub const SUGGESTIONS_BLUR_HIDE_MS: i32 = 150; // lets a click on a suggestion land before hiding
pub const SEARCH_FOCUS_VISIBILITY: f64 = 0.55; // fraction of #secondPage visible before focusing
