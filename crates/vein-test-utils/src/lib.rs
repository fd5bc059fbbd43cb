//! Test utilities for Vein development.
//!
//! Provides an in-memory [`MemoryGrid`] standing in for the host world,
//! failure-injecting wrappers, and permission fixtures.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod grid;

pub use fixtures::{allow_all, deny_all, random_vein_grid, CountingPermission, FailingPermission};
pub use grid::{FailingGrid, Material, MemoryGrid};
