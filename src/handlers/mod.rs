// Handler modules
pub mod get;
pub mod version;

// Re-export all handler functions
pub use get::{handle_get, render_images};
pub use version::{BuildInfo, handle_version};
