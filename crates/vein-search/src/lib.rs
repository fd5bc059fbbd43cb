//! Bounded flood-fill search and distance ordering over voxel grids.
//!
//! [`search`] finds the connected region of same-material cells around an
//! origin, walking the grid through [`VoxelGrid`](vein_core::VoxelGrid)
//! breadth-first and stopping at a result cap. [`FloodFill`] packages a
//! connectivity and cap as reusable, validated configuration, and
//! [`ordering`] sorts a result by distance from an observer.
//!
//! # Quick start
//!
//! ```
//! use vein_core::{BlockPos, Point3};
//! use vein_search::{ordering, search};
//! use vein_space::Connectivity;
//! use vein_test_utils::{allow_all, Material, MemoryGrid};
//!
//! let grid = MemoryGrid::cuboid(BlockPos::new(0, 0, 0), BlockPos::new(2, 0, 0), Material::IronOre);
//! let origin = BlockPos::new(0, 0, 0);
//!
//! let vein = search(&grid, Connectivity::Six, Some(&origin), &allow_all, 64).unwrap();
//! assert_eq!(vein.len(), 3);
//! assert_eq!(vein[0], origin);
//!
//! let nearest_first = ordering::sort_by_distance_3d(vein, Point3::new(3.0, 0.0, 0.0));
//! assert_eq!(nearest_first[0], BlockPos::new(2, 0, 0));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod flood;
pub mod metrics;
pub mod ordering;

pub use config::{ConfigError, FloodFill, FloodFillBuilder, DEFAULT_CAP, DEFAULT_PREALLOC_LIMIT};
pub use flood::search;
pub use metrics::SearchMetrics;
pub use ordering::{sort_by_distance_3d, sort_by_horizontal_distance};
