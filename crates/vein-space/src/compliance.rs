//! Offset table compliance test helpers.
//!
//! These functions verify the invariants every connectivity table must
//! satisfy. Reused across the per-variant test cases.

use crate::connectivity::Connectivity;
use indexmap::IndexSet;
use vein_core::BlockPos;

/// Assert that no offset is `(0, 0, 0)`: a cell is never its own neighbour.
pub fn assert_no_self_loop(mode: Connectivity) {
    for o in mode.offsets() {
        assert!(!o.is_zero(), "{mode} table contains the zero offset");
    }
}

/// Assert that every offset appears once.
pub fn assert_offsets_unique(mode: Connectivity) {
    let unique: IndexSet<_> = mode.offsets().iter().collect();
    assert_eq!(
        unique.len(),
        mode.degree(),
        "{mode} table has duplicate offsets"
    );
}

/// Assert that `o` in the table implies `-o` in the table.
pub fn assert_closed_under_negation(mode: Connectivity) {
    let table = mode.offsets();
    for &o in table {
        assert!(
            table.contains(&-o),
            "{mode} table contains {o} but not its opposite {}",
            -o
        );
    }
}

/// Assert that every offset moves at most one cell along each axis.
pub fn assert_unit_steps(mode: Connectivity) {
    for o in mode.offsets() {
        assert!(
            o.dx.abs() <= 1 && o.dy.abs() <= 1 && o.dz.abs() <= 1,
            "{mode} table contains non-unit step {o}"
        );
    }
}

/// Assert that planar topologies never step vertically.
pub fn assert_planarity_consistent(mode: Connectivity) {
    let all_planar = mode.offsets().iter().all(|o| o.is_planar());
    assert_eq!(
        all_planar,
        mode.is_planar(),
        "{mode}: is_planar() disagrees with its offsets"
    );
}

/// Assert that `neighbours` follows table order exactly.
pub fn assert_neighbours_follow_table(mode: Connectivity) {
    let pos = BlockPos::new(3, -7, 11);
    let expected: Vec<BlockPos> = mode.offsets().iter().map(|&o| pos.offset(o)).collect();
    assert_eq!(mode.neighbours(pos).to_vec(), expected);
}

/// Run all compliance checks on a connectivity.
pub fn run_full_compliance(mode: Connectivity) {
    assert_no_self_loop(mode);
    assert_offsets_unique(mode);
    assert_closed_under_negation(mode);
    assert_unit_steps(mode);
    assert_planarity_consistent(mode);
    assert_neighbours_follow_table(mode);
}
