/// Core functionality modules
///
/// Loading the project list and filtering it for display.

pub mod filter;
pub mod page;
pub mod source;
pub mod store;

pub use filter::{filter_projects, FilterView};
pub use page::PortfolioPage;
pub use source::{source_for, FileSource, HttpSource, ProjectSource};
pub use store::{ContentStore, LoadOutcome, Snapshot};
