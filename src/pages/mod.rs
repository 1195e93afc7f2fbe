//! Page fragments
//!
//! Fragment retrieval and field population for tab bodies.

pub mod populate;
pub mod source;

pub use populate::populate;
pub use source::{FetchError, FragmentSource, FsFragmentSource};
