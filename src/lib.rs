//! Core library for the sheet-tools command line application.
//!
//! The library exposes high-level orchestration helpers that power the
//! command-line interface as well as the tests. The modules are structured to
//! keep responsibilities narrow and composable: IO adapters live under
//! [`io`], the tabular data representation inside [`model`], the row
//! consolidation pass in [`consolidate`], the cross-file matching passes in
//! [`compare`] and [`filter`], and the file-level orchestration under
//! [`ops`].

pub mod compare;
pub mod consolidate;
pub mod error;
pub mod filter;
pub mod io;
pub mod model;
pub mod ops;

pub use error::{Result, ToolError};
