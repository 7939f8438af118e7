pub mod scroll;
pub mod search;

pub use scroll::{wire_explore_button, wire_scroll_and_resize};
pub use search::wire_search;
