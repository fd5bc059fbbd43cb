//! Neighbour topologies for Vein voxel searches.
//!
//! This crate defines [`Connectivity`], the selector for which cells count
//! as neighbours during a flood fill. Each variant is backed by a
//! compile-time offset table; there is no runtime polymorphism in the
//! traversal hot loop.
//!
//! # Topologies
//!
//! - [`Connectivity::Four`]: cardinal directions in the horizontal plane
//! - [`Connectivity::Six`]: axis-aligned face neighbours in 3D
//! - [`Connectivity::TwentySix`]: face, edge, and corner neighbours in 3D

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod connectivity;
pub mod error;

#[cfg(test)]
pub(crate) mod compliance;

pub use connectivity::{Connectivity, OFFSETS_26, OFFSETS_4, OFFSETS_6};
pub use error::SpaceError;
