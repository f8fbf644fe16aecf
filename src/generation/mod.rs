//! Generation domain module - turns an option set into file contents
//!
//! The Makefile is an explicit, statically defined segment list rendered
//! without any I/O. Companion files (source stub, module descriptor) are small
//! Tera templates. Nothing in here touches the filesystem.

pub mod companions;
pub mod errors;
pub mod makefile;
pub mod options;
pub mod sanitizers;
pub mod segments;
pub mod types;

pub use companions::*;
pub use errors::*;
pub use options::*;
pub use segments::*;
pub use types::*;
