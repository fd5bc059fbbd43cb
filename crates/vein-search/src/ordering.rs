//! Distance ordering of discovered cells.
//!
//! Sorts by squared distance from each cell's centre to a reference point.
//! Squared distance orders exactly like distance, so no square root is
//! taken. All sorts are stable: cells at equal distance keep their input
//! order, which for a search result means discovery order.

use vein_core::{BlockPos, Point3, Voxel};

/// Squared Euclidean distance from the centre of `pos` to `reference`.
pub fn distance_sq_3d(pos: BlockPos, reference: Point3) -> f64 {
    let c = pos.center();
    let dx = c.x - reference.x;
    let dy = c.y - reference.y;
    let dz = c.z - reference.z;
    dx * dx + dy * dy + dz * dz
}

/// Squared distance over the horizontal axes (x and z) only.
pub fn distance_sq_horizontal(pos: BlockPos, reference: Point3) -> f64 {
    let c = pos.center();
    let dx = c.x - reference.x;
    let dz = c.z - reference.z;
    dx * dx + dz * dz
}

/// Order `cells` nearest-first by 3D distance from `reference`.
///
/// # Examples
///
/// ```
/// use vein_core::{BlockPos, Point3};
/// use vein_search::sort_by_distance_3d;
///
/// let cells = vec![BlockPos::new(5, 0, 0), BlockPos::new(1, 0, 0), BlockPos::new(3, 0, 0)];
/// let sorted = sort_by_distance_3d(cells, Point3::new(0.0, 0.0, 0.0));
/// assert_eq!(sorted, vec![BlockPos::new(1, 0, 0), BlockPos::new(3, 0, 0), BlockPos::new(5, 0, 0)]);
/// ```
pub fn sort_by_distance_3d<C, I>(cells: I, reference: impl Into<Point3>) -> Vec<C>
where
    C: Voxel,
    I: IntoIterator<Item = C>,
{
    sort_keyed(cells, reference.into(), distance_sq_3d)
}

/// Order `cells` nearest-first by horizontal distance from `reference`,
/// ignoring height.
pub fn sort_by_horizontal_distance<C, I>(cells: I, reference: impl Into<Point3>) -> Vec<C>
where
    C: Voxel,
    I: IntoIterator<Item = C>,
{
    sort_keyed(cells, reference.into(), distance_sq_horizontal)
}

/// In-place form of [`sort_by_distance_3d`].
pub fn sort_slice_by_distance_3d<C: Voxel>(cells: &mut [C], reference: impl Into<Point3>) {
    let reference = reference.into();
    cells.sort_by(|a, b| {
        distance_sq_3d(a.pos(), reference).total_cmp(&distance_sq_3d(b.pos(), reference))
    });
}

/// In-place form of [`sort_by_horizontal_distance`].
pub fn sort_slice_by_horizontal_distance<C: Voxel>(cells: &mut [C], reference: impl Into<Point3>) {
    let reference = reference.into();
    cells.sort_by(|a, b| {
        distance_sq_horizontal(a.pos(), reference)
            .total_cmp(&distance_sq_horizontal(b.pos(), reference))
    });
}

/// Compute each key once, then stable-sort on it.
fn sort_keyed<C, I>(cells: I, reference: Point3, key: fn(BlockPos, Point3) -> f64) -> Vec<C>
where
    C: Voxel,
    I: IntoIterator<Item = C>,
{
    let mut keyed: Vec<(f64, C)> = cells
        .into_iter()
        .map(|c| (key(c.pos(), reference), c))
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    keyed.into_iter().map(|(_, c)| c).collect()
}
