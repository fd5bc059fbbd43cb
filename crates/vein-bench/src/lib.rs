//! Benchmark profiles for the Vein flood-fill library.
//!
//! Provides pre-built grids for benchmarking:
//!
//! - [`solid_profile`]: 32×32×32 solid ore block (32K cells, one region)
//! - [`scattered_profile`]: 48×48×48 stone with ~35% ore in seeded veins
//! - [`scattered_origins`]: deterministic ore positions to search from

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use vein_core::BlockPos;
use vein_test_utils::{random_vein_grid, Material, MemoryGrid};

/// Edge length of [`solid_profile`].
pub const SOLID_EXTENT: i32 = 32;

/// Edge length of [`scattered_profile`].
pub const SCATTERED_EXTENT: i32 = 48;

/// A solid cube of iron ore: every search covers one large region.
pub fn solid_profile() -> MemoryGrid {
    let max = SOLID_EXTENT - 1;
    MemoryGrid::cuboid(BlockPos::new(0, 0, 0), BlockPos::new(max, max, max), Material::IronOre)
}

/// Stone with ore scattered at 35% density.
///
/// Near the 3D site-percolation threshold for 6-connectivity, so regions
/// range from single cells to large branching veins.
pub fn scattered_profile(seed: u64) -> MemoryGrid {
    random_vein_grid(seed, SCATTERED_EXTENT, 0.35)
}

/// Up to `count` ore positions from `grid`, spread evenly through its
/// insertion order.
pub fn scattered_origins(grid: &MemoryGrid, count: usize) -> Vec<BlockPos> {
    let ore = grid.positions_of(Material::IronOre);
    if ore.is_empty() || count == 0 {
        return Vec::new();
    }
    let step = (ore.len() / count).max(1);
    ore.into_iter().step_by(step).take(count).collect()
}
