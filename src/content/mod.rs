/// Content module
///
/// Project records, the built-in project list, and the static page content.

pub mod defaults;
pub mod models;
pub mod profile;

pub use defaults::default_projects;
pub use models::*;
pub use profile::{GalleryItem, Profile, GALLERY, HERO_PHOTO, HIGHLIGHTS, PROFILE};
