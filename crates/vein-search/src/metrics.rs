//! Per-search counters.
//!
//! [`SearchMetrics`] records how much work one flood fill did, for
//! profiling and for deciding whether a capped result is complete.

/// Counters collected during a single search.
///
/// Filled in by [`FloodFill::run_with_metrics`](crate::FloodFill::run_with_metrics).
/// Collecting them never changes which cells a search returns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchMetrics {
    /// Cells returned.
    pub cells_found: usize,
    /// Cells taken off the frontier and expanded.
    pub cells_expanded: usize,
    /// Neighbour lookups made through the grid accessor.
    pub probes: usize,
    /// Probes that hit a cell already in the result.
    pub already_visited: usize,
    /// Probes whose material differed from the origin's.
    pub material_mismatches: usize,
    /// Probes the permission check rejected.
    pub permission_denials: usize,
    /// The cap stopped the search while cells were still waiting on the
    /// frontier, so the region may extend past the result.
    ///
    /// False only when the frontier drained before the cap was reached.
    /// Queued cells are not probed to prove the region complete, so a
    /// search whose result exactly fills the cap reports `true` even when
    /// nothing lies beyond it.
    pub truncated: bool,
}

impl SearchMetrics {
    /// Probes that added a cell to the result.
    ///
    /// Saturates at zero if the counters were filled in by hand and the
    /// rejections outnumber the probes.
    pub fn accepted(&self) -> usize {
        self.probes
            .saturating_sub(self.already_visited)
            .saturating_sub(self.material_mismatches)
            .saturating_sub(self.permission_denials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = SearchMetrics::default();
        assert_eq!(m.cells_found, 0);
        assert_eq!(m.cells_expanded, 0);
        assert_eq!(m.probes, 0);
        assert_eq!(m.already_visited, 0);
        assert_eq!(m.material_mismatches, 0);
        assert_eq!(m.permission_denials, 0);
        assert!(!m.truncated);
        assert_eq!(m.accepted(), 0);
    }

    #[test]
    fn accepted_is_probes_minus_rejections() {
        let m = SearchMetrics {
            cells_found: 5,
            cells_expanded: 2,
            probes: 12,
            already_visited: 3,
            material_mismatches: 4,
            permission_denials: 1,
            truncated: true,
        };
        assert_eq!(m.accepted(), 4);
    }

    #[test]
    fn accepted_saturates_on_inconsistent_counters() {
        let m = SearchMetrics {
            probes: 2,
            already_visited: 1,
            material_mismatches: 3,
            permission_denials: 1,
            ..SearchMetrics::default()
        };
        assert_eq!(m.accepted(), 0);
    }
}
