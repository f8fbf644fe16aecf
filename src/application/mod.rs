//! Application layer - the scaffold use case and its ports

pub mod dto;
pub mod errors;
pub mod scaffold_project;
pub mod traits;

pub use dto::*;
pub use errors::*;
pub use scaffold_project::*;
pub use traits::*;
