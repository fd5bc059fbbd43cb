//! Bounded breadth-first flood fill.
//!
//! The traversal keeps an explicit FIFO frontier and a hash-based visited
//! set, so region size never grows the call stack. The visited set is an
//! [`IndexSet`]: insertion order is discovery order, which makes it the
//! result sequence as well.

use crate::config::DEFAULT_PREALLOC_LIMIT;
use crate::metrics::SearchMetrics;
use indexmap::IndexSet;
use std::collections::VecDeque;
use vein_core::{PermissionCheck, SearchError, Voxel, VoxelGrid};
use vein_space::Connectivity;

/// Find the connected same-material region around `origin`.
///
/// Walks `grid` breadth-first from `origin` along `connectivity`'s offset
/// table, accepting each neighbour that is not yet visited, has the
/// origin's material, and passes `permission` (tested in that order). The
/// origin's material is read once, before traversal starts.
///
/// Returns the accepted cells in discovery order, origin first, at most
/// `cap` of them. The search stops the moment the cap is reached, even
/// part-way through a cell's offset table.
///
/// An absent origin, `cap == 0`, or an origin that `permission` rejects
/// all yield an empty result. These are not errors.
///
/// # Errors
///
/// The first failure from `grid` or `permission` aborts the search and is
/// returned as [`SearchError::Grid`] or [`SearchError::Permission`]. Cells
/// found before the failure are discarded.
pub fn search<G, P>(
    grid: &G,
    connectivity: Connectivity,
    origin: Option<&G::Cell>,
    permission: &P,
    cap: usize,
) -> Result<Vec<G::Cell>, SearchError>
where
    G: VoxelGrid + ?Sized,
    P: PermissionCheck<G::Cell> + ?Sized,
{
    let mut metrics = SearchMetrics::default();
    flood(
        grid,
        connectivity,
        origin,
        permission,
        cap,
        cap.min(DEFAULT_PREALLOC_LIMIT),
        &mut metrics,
    )
}

/// Shared traversal behind [`search`] and [`FloodFill`](crate::FloodFill).
pub(crate) fn flood<G, P>(
    grid: &G,
    connectivity: Connectivity,
    origin: Option<&G::Cell>,
    permission: &P,
    cap: usize,
    reserve: usize,
    metrics: &mut SearchMetrics,
) -> Result<Vec<G::Cell>, SearchError>
where
    G: VoxelGrid + ?Sized,
    P: PermissionCheck<G::Cell> + ?Sized,
{
    let Some(origin) = origin else {
        return Ok(Vec::new());
    };
    if cap == 0 || !permission.permits(origin)? {
        return Ok(Vec::new());
    }

    let target = grid.material(origin)?;

    let mut frontier: VecDeque<G::Cell> = VecDeque::with_capacity(reserve);
    let mut found: IndexSet<G::Cell> = IndexSet::with_capacity(reserve);
    frontier.push_back(origin.clone());
    found.insert(origin.clone());

    'search: while found.len() < cap {
        let Some(cell) = frontier.pop_front() else {
            break;
        };
        metrics.cells_expanded += 1;

        for &offset in connectivity.offsets() {
            let next = grid.neighbour(&cell, offset)?;
            metrics.probes += 1;

            if found.contains(&next) {
                metrics.already_visited += 1;
                continue;
            }
            if grid.material(&next)? != target {
                metrics.material_mismatches += 1;
                continue;
            }
            if !permission.permits(&next)? {
                metrics.permission_denials += 1;
                continue;
            }

            frontier.push_back(next.clone());
            found.insert(next);
            if found.len() >= cap {
                break 'search;
            }
        }
    }

    metrics.cells_found = found.len();
    metrics.truncated = !frontier.is_empty();

    if metrics.truncated {
        log::debug!(
            "flood fill from {} hit cap {cap} with {} cells still on the frontier",
            origin.pos(),
            frontier.len(),
        );
    }
    log::trace!(
        "flood fill from {} ({connectivity}): {} cells, {} probes, {} expanded",
        origin.pos(),
        metrics.cells_found,
        metrics.probes,
        metrics.cells_expanded,
    );

    Ok(found.into_iter().collect())
}
