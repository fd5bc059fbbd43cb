//! Permission fixtures and seeded grid generators.
//!
//! - [`allow_all`] / [`deny_all`]: constant permission checks.
//! - [`CountingPermission`]: wraps a check and counts its invocations.
//! - [`FailingPermission`]: errors when asked about one position.
//! - [`random_vein_grid`]: stone cube with ore scattered by a seeded RNG.

use crate::grid::{Material, MemoryGrid};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::atomic::{AtomicUsize, Ordering};
use vein_core::{BlockPos, PermissionCheck, PermissionError, Voxel};

/// Permits every cell.
pub fn allow_all(_: &BlockPos) -> bool {
    true
}

/// Permits no cell.
pub fn deny_all(_: &BlockPos) -> bool {
    false
}

/// Wraps a permission check and counts how often it is consulted.
pub struct CountingPermission<P> {
    inner: P,
    calls: AtomicUsize,
}

impl<P> CountingPermission<P> {
    /// Count calls to `inner`.
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `permits` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl<C, P: PermissionCheck<C>> PermissionCheck<C> for CountingPermission<P> {
    fn permits(&self, cell: &C) -> Result<bool, PermissionError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner.permits(cell)
    }
}

/// Permits everything except one position, where it fails with an error.
pub struct FailingPermission {
    /// The position the check cannot decide.
    pub fail_at: BlockPos,
}

impl<C: Voxel> PermissionCheck<C> for FailingPermission {
    fn permits(&self, cell: &C) -> Result<bool, PermissionError> {
        let pos = cell.pos();
        if pos == self.fail_at {
            return Err(PermissionError::CheckFailed {
                pos,
                reason: "injected permission failure".into(),
            });
        }
        Ok(true)
    }
}

/// A cube of stone `extent` cells on a side, anchored at the origin, with
/// each cell turned to [`Material::IronOre`] with probability `density`.
///
/// The same `(seed, extent, density)` always produces the same grid.
/// `density` is clamped to `[0, 1]`.
pub fn random_vein_grid(seed: u64, extent: i32, density: f64) -> MemoryGrid {
    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut grid = MemoryGrid::new();
    for x in 0..extent {
        for y in 0..extent {
            for z in 0..extent {
                let material = if rng.random_bool(density) {
                    Material::IronOre
                } else {
                    Material::Stone
                };
                grid.set(BlockPos::new(x, y, z), material);
            }
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_checks() {
        assert!(allow_all(&BlockPos::ORIGIN));
        assert!(!deny_all(&BlockPos::ORIGIN));
    }

    #[test]
    fn counting_permission_counts() {
        let p = CountingPermission::new(allow_all);
        for _ in 0..3 {
            assert_eq!(p.permits(&BlockPos::ORIGIN), Ok(true));
        }
        assert_eq!(p.calls(), 3);
    }

    #[test]
    fn failing_permission_fails_only_at_target() {
        let p = FailingPermission {
            fail_at: BlockPos::new(0, 1, 0),
        };
        assert_eq!(p.permits(&BlockPos::ORIGIN), Ok(true));
        assert!(p.permits(&BlockPos::new(0, 1, 0)).is_err());
    }

    #[test]
    fn random_grid_is_deterministic() {
        let a = random_vein_grid(7, 6, 0.3);
        let b = random_vein_grid(7, 6, 0.3);
        assert_eq!(a.len(), 216);
        assert_eq!(
            a.positions_of(Material::IronOre),
            b.positions_of(Material::IronOre)
        );
    }

    #[test]
    fn density_extremes() {
        assert!(random_vein_grid(1, 4, 0.0)
            .positions_of(Material::IronOre)
            .is_empty());
        assert_eq!(random_vein_grid(1, 4, 1.5).positions_of(Material::IronOre).len(), 64);
    }
}
