/// portfolio library
///
/// Project list, live filter and static content for a student-athlete's
/// portfolio page.

pub mod config;
pub mod content;
pub mod core;
pub mod error;

// Re-exports for convenience
pub use config::PortfolioConfig;
pub use content::ProjectRecord;
pub use core::{ContentStore, FilterView, PortfolioPage};
pub use error::{FailureKind, PortfolioError, Result};
