//! Vein: bounded flood-fill discovery of same-material voxel regions.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Vein sub-crates. For most users, adding `vein` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use std::collections::HashMap;
//! use vein::prelude::*;
//!
//! // A host world: a sparse map from positions to block names.
//! struct World(HashMap<BlockPos, &'static str>);
//!
//! impl VoxelGrid for World {
//!     type Cell = BlockPos;
//!     type Material = &'static str;
//!
//!     fn neighbour(&self, cell: &BlockPos, offset: Offset) -> Result<BlockPos, GridError> {
//!         Ok(cell.offset(offset))
//!     }
//!
//!     fn material(&self, cell: &BlockPos) -> Result<&'static str, GridError> {
//!         Ok(self.0.get(cell).copied().unwrap_or("air"))
//!     }
//! }
//!
//! let mut blocks = HashMap::new();
//! for x in 0..5 {
//!     blocks.insert(BlockPos::new(x, 12, 0), "coal_ore");
//! }
//! let world = World(blocks);
//!
//! let fill = FloodFill::builder()
//!     .connectivity(Connectivity::Six)
//!     .cap(3)
//!     .build()
//!     .unwrap();
//! let origin = BlockPos::new(0, 12, 0);
//! let vein = fill.run(&world, Some(&origin), &|_: &BlockPos| true).unwrap();
//! assert_eq!(vein, vec![origin, BlockPos::new(1, 12, 0), BlockPos::new(2, 12, 0)]);
//!
//! let nearest = sort_by_distance_3d(vein, Point3::new(2.5, 13.0, 0.5));
//! assert_eq!(nearest[0], BlockPos::new(2, 12, 0));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `vein-core` | Positions, grid and permission traits, errors |
//! | [`space`] | `vein-space` | Connectivity modes and offset tables |
//! | [`search`] | `vein-search` | Flood fill, configuration, metrics, ordering |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Positions, grid traits, and error types (`vein-core`).
///
/// Implement [`types::VoxelGrid`] to let searches walk your world.
pub use vein_core as types;

/// Connectivity modes (`vein-space`).
///
/// Provides [`space::Connectivity`] and the raw offset tables.
pub use vein_space as space;

/// Flood-fill search and distance ordering (`vein-search`).
pub use vein_search as search;

/// Common imports for typical Vein usage.
///
/// ```rust
/// use vein::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use vein_core::{BlockPos, Fallible, Offset, PermissionCheck, Point3, Voxel, VoxelGrid};

    // Errors
    pub use vein_core::{GridError, PermissionError, SearchError};
    pub use vein_search::ConfigError;
    pub use vein_space::SpaceError;

    // Space
    pub use vein_space::Connectivity;

    // Search
    pub use vein_search::{
        search, sort_by_distance_3d, sort_by_horizontal_distance, FloodFill, SearchMetrics,
    };
}
