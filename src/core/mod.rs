pub mod camera;
pub mod constants;
pub mod dock;
pub mod error;
pub mod gallery;
pub mod path;
pub mod rotation;
pub mod search;

pub use camera::*;
pub use dock::*;
pub use error::{Error, Result};
pub use path::*;
pub use rotation::*;
