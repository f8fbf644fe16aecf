//! maker - scaffold a Go project directory from command-line flags
//!
//! The crate is split into a pure [`generation`] domain (option sets, the
//! Makefile segment list, companion templates), an [`application`] layer with
//! the scaffold use case and its output port, and [`infrastructure`] adapters
//! that write to the filesystem.
#![deny(unsafe_code)]

pub mod application;
pub mod generation;
pub mod infrastructure;
