//! In-memory voxel grids for tests and benchmarks.
//!
//! - [`MemoryGrid`]: sparse map of positions to materials; everything
//!   unset reads as [`Material::Void`].
//! - [`FailingGrid`]: wraps any grid and fails deterministically.

use indexmap::IndexMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use vein_core::{BlockPos, GridError, Offset, VoxelGrid};

/// Materials used by the test grids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Material {
    /// Unloaded or never-written space.
    #[default]
    Void,
    /// Empty space.
    Air,
    /// Host rock.
    Stone,
    /// Soil.
    Dirt,
    /// Ore that forms veins inside stone.
    IronOre,
    /// Rarer ore.
    GoldOre,
}

/// Sparse in-memory grid keyed by position.
///
/// Counts every accessor call so tests can assert how much of the grid a
/// search touched.
#[derive(Debug, Default)]
pub struct MemoryGrid {
    cells: IndexMap<BlockPos, Material>,
    neighbour_calls: AtomicUsize,
    material_calls: AtomicUsize,
}

impl MemoryGrid {
    /// An empty grid: every position reads as [`Material::Void`].
    pub fn new() -> Self {
        Self::default()
    }

    /// A grid holding one solid cuboid of `material`, corners inclusive.
    pub fn cuboid(min: BlockPos, max: BlockPos, material: Material) -> Self {
        let mut grid = Self::new();
        grid.fill(min, max, material);
        grid
    }

    /// Set a single cell.
    pub fn set(&mut self, pos: BlockPos, material: Material) {
        self.cells.insert(pos, material);
    }

    /// Fill the cuboid between `min` and `max` (inclusive) with `material`.
    pub fn fill(&mut self, min: BlockPos, max: BlockPos, material: Material) {
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                for z in min.z..=max.z {
                    self.cells.insert(BlockPos::new(x, y, z), material);
                }
            }
        }
    }

    /// Material at `pos`, [`Material::Void`] if never set.
    pub fn get(&self, pos: BlockPos) -> Material {
        self.cells.get(&pos).copied().unwrap_or_default()
    }

    /// Positions holding `material`, in insertion order.
    pub fn positions_of(&self, material: Material) -> Vec<BlockPos> {
        self.cells
            .iter()
            .filter(|(_, m)| **m == material)
            .map(|(p, _)| *p)
            .collect()
    }

    /// Number of explicitly set cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if no cell was ever set.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of `neighbour` calls served so far.
    pub fn neighbour_calls(&self) -> usize {
        self.neighbour_calls.load(Ordering::Relaxed)
    }

    /// Number of `material` calls served so far.
    pub fn material_calls(&self) -> usize {
        self.material_calls.load(Ordering::Relaxed)
    }
}

impl VoxelGrid for MemoryGrid {
    type Cell = BlockPos;
    type Material = Material;

    fn neighbour(&self, cell: &BlockPos, offset: Offset) -> Result<BlockPos, GridError> {
        self.neighbour_calls.fetch_add(1, Ordering::Relaxed);
        Ok(cell.offset(offset))
    }

    fn material(&self, cell: &BlockPos) -> Result<Material, GridError> {
        self.material_calls.fetch_add(1, Ordering::Relaxed);
        Ok(self.get(*cell))
    }
}

/// Wraps a grid and fails deterministically.
///
/// Useful for checking that accessor errors reach the caller untouched.
/// Uses `AtomicUsize` for the call counter so it stays `Sync`.
pub struct FailingGrid<G> {
    inner: G,
    succeed_count: usize,
    fail_at: Option<BlockPos>,
    call_count: AtomicUsize,
}

impl<G> FailingGrid<G> {
    /// Fail every `neighbour` call after the first `succeed_count`.
    pub fn after(inner: G, succeed_count: usize) -> Self {
        Self {
            inner,
            succeed_count,
            fail_at: None,
            call_count: AtomicUsize::new(0),
        }
    }

    /// Fail any `material` lookup at `pos`.
    pub fn at(inner: G, pos: BlockPos) -> Self {
        Self {
            inner,
            succeed_count: usize::MAX,
            fail_at: Some(pos),
            call_count: AtomicUsize::new(0),
        }
    }

    /// How many `neighbour` calls have been made, including failed ones.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::Relaxed)
    }
}

impl<G> VoxelGrid for FailingGrid<G>
where
    G: VoxelGrid<Cell = BlockPos>,
{
    type Cell = BlockPos;
    type Material = G::Material;

    fn neighbour(&self, cell: &BlockPos, offset: Offset) -> Result<BlockPos, GridError> {
        let n = self.call_count.fetch_add(1, Ordering::Relaxed);
        if n >= self.succeed_count {
            return Err(GridError::AccessFailed {
                pos: *cell,
                reason: format!("injected failure after {} lookups", self.succeed_count),
            });
        }
        self.inner.neighbour(cell, offset)
    }

    fn material(&self, cell: &BlockPos) -> Result<G::Material, GridError> {
        if self.fail_at == Some(*cell) {
            return Err(GridError::AccessFailed {
                pos: *cell,
                reason: "injected material failure".into(),
            });
        }
        self.inner.material(cell)
    }
}
