//! Core types and traits for the Vein voxel search library.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Vein workspace:
//! grid positions and offsets, the [`VoxelGrid`] accessor the host world
//! implements, the [`PermissionCheck`] capability, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod permission;
pub mod pos;

pub use error::{GridError, PermissionError, SearchError};
pub use grid::{Voxel, VoxelGrid};
pub use permission::{Fallible, PermissionCheck};
pub use pos::{BlockPos, Offset, Point3};
