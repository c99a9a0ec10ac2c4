//! Log windowing for kubepage
//!
//! This crate splits a container's log into lines, selects the requested
//! page and reports where that page sits in the full log.

mod assemble;
mod error;
mod paging;
mod service;
mod window;

pub use assemble::{assemble, split_lines};
pub use error::{LogsError, LogsResult};
pub use paging::{DEFAULT_PAGE_SIZE, LAST_PAGE, PageMove};
pub use service::{ContainerPolicy, LogService};
pub use window::{select_window, validate_page_size};

// Re-export types used in our public API
pub use kubepage_types::{LogQuery, LogWindowResult};
